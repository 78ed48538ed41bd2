//! Seeded random playout runner.
//!
//! Usage:
//! `cargo run --release --bin cube_playout`
//! `cargo run --release --bin cube_playout -- --seed 7 --plies 120`
//!
//! Set `RUST_LOG=cube_chess=debug` to see every applied move.

use cube_chess::game_state::chess_rules::build_initial_state;
use cube_chess::utils::game_record::GameRecord;
use cube_chess::utils::random_playout::{random_playout, PlayoutConfig};
use cube_chess::utils::render_game_state::render_game_state;

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> T {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), String> {
    env_logger::init();

    let config = PlayoutConfig {
        seed: parse_arg("--seed", 0u64),
        max_plies: parse_arg("--plies", 80usize),
        ..PlayoutConfig::default()
    };
    let start = build_initial_state();
    let result = random_playout(&start, &config).map_err(|e| e.to_string())?;

    let mut record = GameRecord::new(start);
    for mv in &result.moves {
        record.play(mv).map_err(|e| e.to_string())?;
    }

    println!("seed={} plies={} status={:?}", config.seed, result.moves.len(), result.status);
    println!("{}", render_game_state(record.current()));
    println!();
    print!("{}", record.export_text());
    Ok(())
}
