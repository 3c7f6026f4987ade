#![allow(dead_code)]

// tests/common/mod.rs
use bidwhist_engine::{
    ActionOutcome, BidChoice, Difficulty, EngineConfig, EngineError, GameFlowService, GameId,
    GameEvent, Phase, Player, Seat, Suit,
};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::test_logging::init();
}

/// Config with a fixed base seed so every game deals the same way.
pub fn seeded_config(seed: i64) -> EngineConfig {
    EngineConfig {
        game_seed: Some(seed),
        ..EngineConfig::default()
    }
}

pub fn service(seed: i64) -> GameFlowService {
    GameFlowService::new(seeded_config(seed)).expect("valid config")
}

pub fn all_ai(difficulty: Difficulty) -> [Player; 4] {
    std::array::from_fn(|seat| Player::ai(seat as Seat, difficulty))
}

/// Human at seat 0, AI elsewhere.
pub fn one_human(difficulty: Difficulty) -> [Player; 4] {
    let mut players = all_ai(difficulty);
    players[0] = Player::human(0, "alice");
    players
}

pub fn all_human() -> [Player; 4] {
    ["north", "east", "south", "west"]
        .iter()
        .enumerate()
        .map(|(seat, name)| Player::human(seat as Seat, *name))
        .collect::<Vec<_>>()
        .try_into()
        .expect("four players")
}

/// Take whatever action `seat` owes the game right now, using simple
/// choices: pass, finalize in spades (or no-trump), discard the first six
/// cards, play the first legal card.
pub fn act_for(
    svc: &GameFlowService,
    game_id: GameId,
    seat: Seat,
) -> Result<ActionOutcome, EngineError> {
    let view = svc.view(game_id, seat)?;
    match view.phase {
        Phase::Bid => svc.submit_bid(game_id, seat, BidChoice::Pass),
        Phase::Kitty => match view.final_bid {
            None => {
                let highest = view.highest_bid.expect("kitty phase has a winning bid");
                let (direction, no_trump) = match highest.choice {
                    BidChoice::Bid {
                        direction,
                        no_trump,
                        ..
                    } => (direction, no_trump),
                    BidChoice::Pass => panic!("winning bid is a pass"),
                };
                let suit = (!no_trump).then_some(Suit::Spades);
                svc.finalize_bid(game_id, seat, direction, suit)
            }
            Some(_) => {
                let discards = view.hand[..6].to_vec();
                svc.apply_kitty_discard(game_id, seat, &discards)
            }
        },
        Phase::Play => {
            let card = view.legal_plays()[0];
            svc.play_card(game_id, seat, card)
        }
        other => panic!("no action owed during {other:?}"),
    }
}

/// Drive a game with human seats until it ends, acting for whichever
/// human holds the turn. Returns every event produced along the way.
pub fn play_out(
    svc: &GameFlowService,
    game_id: GameId,
    first: ActionOutcome,
) -> Vec<GameEvent> {
    let mut events = first.events;
    let mut view = first.view;
    for _ in 0..100_000 {
        if view.phase == Phase::End {
            return events;
        }
        let seat = view.turn.expect("someone is on turn");
        let outcome = act_for(svc, game_id, seat).expect("simple action is legal");
        events.extend(outcome.events);
        view = outcome.view;
    }
    panic!("game {game_id} did not finish");
}
