//! How to register your AI
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add a new `AiFactory` entry to the static list with stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.

use crate::ai::{AiPlayer, Easy, Hard, Medium};
use crate::domain::Difficulty;

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub difficulty: Difficulty,
    pub make: fn() -> Box<dyn AiPlayer + Send + Sync>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: Easy::NAME,
        version: Easy::VERSION,
        difficulty: Difficulty::Easy,
        make: make_easy,
    },
    AiFactory {
        name: Medium::NAME,
        version: Medium::VERSION,
        difficulty: Difficulty::Medium,
        make: make_medium,
    },
    AiFactory {
        name: Hard::NAME,
        version: Hard::VERSION,
        difficulty: Difficulty::Hard,
        make: make_hard,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

/// Builds the AI registered for a difficulty tier.
pub fn for_difficulty(difficulty: Difficulty) -> Box<dyn AiPlayer + Send + Sync> {
    match difficulty {
        Difficulty::Easy => make_easy(),
        Difficulty::Medium => make_medium(),
        Difficulty::Hard => make_hard(),
    }
}

fn make_easy() -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(Easy::new())
}

fn make_medium() -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(Medium::new())
}

fn make_hard() -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(Hard::new())
}
