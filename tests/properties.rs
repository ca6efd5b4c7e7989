//! Property tests: invariants that hold for any sequence of inputs

use proptest::prelude::*;

use grid_snake::core::config::GameConfig;
use grid_snake::core::types::Direction;
use grid_snake::game::{Game, GameState, TickOutcome, INITIAL_LENGTH};

#[derive(Debug, Clone, Copy)]
enum Input {
    Steer(Direction),
    Pause,
    Wait,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        6 => prop::sample::select(Direction::ALL.to_vec()).prop_map(Input::Steer),
        1 => Just(Input::Pause),
        3 => Just(Input::Wait),
    ]
}

fn small_config() -> GameConfig {
    GameConfig {
        grid_width: 8,
        grid_height: 6,
        ..GameConfig::default()
    }
}

proptest! {
    #[test]
    fn snake_invariants_hold(seed in any::<u64>(), inputs in prop::collection::vec(input(), 1..200)) {
        let config = small_config();
        let floor = config.min_interval();
        let mut game = Game::with_seed(config, seed).unwrap();

        for step in inputs {
            match step {
                Input::Steer(d) => {
                    let current = game.direction();
                    let accepted = game.queue_direction(d);
                    prop_assert_eq!(accepted, !d.is_opposite(current));
                }
                Input::Pause => game.toggle_pause(),
                Input::Wait => {}
            }

            let before_head = game.snake().head();
            let before_len = game.snake().len();
            let before_score = game.score();
            let pending = game.pending_direction();
            let was_running = game.state() == GameState::Running;

            let outcome = game.tick();

            match outcome {
                TickOutcome::Idle => {
                    prop_assert!(!was_running);
                    prop_assert_eq!(game.snake().len(), before_len);
                }
                TickOutcome::Moved => {
                    prop_assert_eq!(game.snake().head(), before_head.step(pending));
                    prop_assert_eq!(game.snake().len(), before_len);
                    prop_assert_eq!(game.score(), before_score);
                }
                TickOutcome::Ate { score, .. } => {
                    prop_assert_eq!(game.snake().head(), before_head.step(pending));
                    prop_assert_eq!(game.snake().len(), before_len + 1);
                    prop_assert_eq!(score, before_score + 1);
                }
                TickOutcome::Ended(_) => {
                    prop_assert_eq!(game.state(), GameState::GameOver);
                }
            }

            // The body never overlaps itself
            let cells: Vec<_> = game.snake().cells().collect();
            let unique: std::collections::HashSet<_> = cells.iter().copied().collect();
            prop_assert_eq!(unique.len(), cells.len());

            // Every body cell is on the board
            prop_assert!(cells.iter().all(|c| game.grid().in_bounds(*c)));

            // Food never sits under the snake
            if let Some(food) = game.food() {
                prop_assert!(!game.snake().contains(food));
            }

            prop_assert_eq!(game.snake().len(), INITIAL_LENGTH + game.score() as usize);
            prop_assert!(game.tick_interval() >= floor);

            if game.state() == GameState::GameOver {
                break;
            }
        }
    }

    #[test]
    fn reset_restores_start(seed in any::<u64>(), ticks in 0usize..50) {
        let mut game = Game::with_seed(small_config(), seed).unwrap();
        for _ in 0..ticks {
            game.tick();
        }
        game.reset();

        prop_assert_eq!(game.state(), GameState::Running);
        prop_assert_eq!(game.score(), 0);
        prop_assert_eq!(game.snake().len(), INITIAL_LENGTH);
        prop_assert_eq!(game.direction(), Direction::Right);
        prop_assert_eq!(game.tick_interval(), game.config().start_interval());
        let food = game.food().unwrap();
        prop_assert!(!game.snake().contains(food));
    }
}
