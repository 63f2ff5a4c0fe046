use battlefield::{init_logging, random_placements, Board, BOARD_SIZE};
use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

/// Lay out a random fleet and fire at it until it is gone.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE * BOARD_SIZE)]
    max_shots: usize,
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    shots: usize,
    hits: usize,
    misses: usize,
    sunk: usize,
    all_sunk: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = SmallRng::seed_from_u64(seed);
    info!("laying out fleet with seed {}", seed);

    let placements = random_placements(&mut rng)?;
    let mut board = Board::new(placements)?;

    let mut targets: Vec<(usize, usize)> = (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
        .collect();
    targets.shuffle(&mut rng);

    for &target in targets.iter().take(cli.max_shots) {
        board.fire_at(target);
        if board.all_sunk() {
            break;
        }
    }
    info!(
        "{} shots fired, {} ships afloat",
        board.shots_fired(),
        board.ships_afloat()
    );

    print!("{}", board);
    let summary = Summary {
        seed,
        shots: board.shots_fired(),
        hits: board.hits().count_ones(),
        misses: board.misses().count_ones(),
        sunk: board.ships().len() - board.ships_afloat(),
        all_sunk: board.all_sunk(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
