//! Scoville Rush entry point
//!
//! Headless demo host: runs the engine against the real clock with a
//! seeded random-walk player, logging landings and the final board.
//! A rendering front end would drive the same API.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use scoville_rush::sim::{CellState, GameState, LandingOutcome, MoveIntent, tick};
use scoville_rush::{GameConfig, GameStatus};

fn main() {
    env_logger::init();

    let config = GameConfig::load_from(std::path::Path::new("scoville.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    log::info!(
        "Scoville Rush starting: seed {}, {}x{} grid, {} policy",
        seed,
        config.shape.width(),
        config.shape.height(),
        config.sweet_policy.as_str()
    );

    let start = Instant::now();
    let now_ms = |start: Instant| start.elapsed().as_millis() as u64;

    let mut game = GameState::new(config, seed, now_ms(start));
    let mut walker = Pcg32::seed_from_u64(seed ^ 0x5eed);

    while game.status() == GameStatus::Active {
        std::thread::sleep(Duration::from_millis(config.tick_interval_ms));
        tick(&mut game, now_ms(start));

        // Random-walk player: one intent per tick, the engine clamps.
        let intent = match walker.random_range(0..4u8) {
            0 => MoveIntent::Left,
            1 => MoveIntent::Right,
            2 => MoveIntent::Up,
            _ => MoveIntent::Down,
        };
        match game.submit_move(intent) {
            LandingOutcome::Scored => {
                log::info!("spicy hit at {:?}, score {}", game.player_pos(), game.score())
            }
            LandingOutcome::SweetHit => log::info!("sweet hit at {:?}", game.player_pos()),
            LandingOutcome::Nothing => {}
        }
    }

    match game.status() {
        GameStatus::Completed => log::info!("cleared the board! score {}", game.score()),
        GameStatus::GameOver => log::info!("game over, score {}", game.score()),
        GameStatus::Active => unreachable!(),
    }

    // Final board stays inspectable after the run freezes
    let width = game.shape().width();
    for (row_index, row) in game.cells().chunks(width).enumerate() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(col_index, cell)| {
                if game.player_pos().x == col_index && game.player_pos().y == row_index {
                    '@'
                } else {
                    match cell.state {
                        CellState::Empty => '.',
                        CellState::Active => '#',
                        CellState::Spicy => 's',
                        CellState::Sweet => 'o',
                        CellState::Done => 'x',
                    }
                }
            })
            .collect();
        log::info!("{line}");
    }
}
