//! Example demonstrating board generation.
//!
//! Generates a Queens board, printing the region layout (one letter per
//! region, `*` marking the hidden queen placement) and the seed that
//! reproduces it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Reproduce a specific board:
//!
//! ```sh
//! cargo run --example generate_board -- --size 8 \
//!     --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```

use std::process;

use clap::Parser;
use queens_core::Position;
use queens_generator::{BoardGenerator, BoardSeed, GeneratedBoard};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(long, value_name = "SIZE", default_value_t = 6)]
    size: u8,

    /// Seed to reproduce (64 hex digits); a random seed is drawn if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match args.seed.as_deref().map(str::parse::<BoardSeed>) {
        None => BoardSeed::random(),
        Some(Ok(seed)) => seed,
        Some(Err(err)) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let board = BoardGenerator::new(args.size).generate_with_seed(seed);
    print_board(&board);
}

fn print_board(board: &GeneratedBoard) {
    println!("Seed:");
    println!("  {}", board.seed);
    println!();
    println!("Board ({size}x{size}):", size = board.size);
    for row in 0..board.size {
        print!("  ");
        for col in 0..board.size {
            let pos = Position::new(row, col);
            let region = b'a' + u8::try_from(board.regions[pos].index() % 26).unwrap_or(0);
            if board.solution.is_queen(pos) {
                print!("{}* ", char::from(region).to_ascii_uppercase());
            } else {
                print!("{}  ", char::from(region));
            }
        }
        println!();
    }
}
