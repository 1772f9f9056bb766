use clap::Parser;
use holdem_odds::cards::{parse_cards, Card};
use holdem_odds::range::HandRange;
use holdem_odds::simulate::{Simulation, DEFAULT_ITERATIONS};
use std::io::{self, BufRead};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "holdem-odds",
    version,
    about = "Monte Carlo equity calculator for Texas Hold'em",
    long_about = "Estimate win/tie/loss probabilities for Hold'em starting hands.\n\
                  Hands may be exact (AsAd) or generic ranges like TT, AKo or KQs.\n\
                  Missing inputs are prompted for unless --no-interaction is given."
)]
struct Args {
    /// Number of iterations to run.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Hands to test, comma separated, e.g. "AhAs,KsKd" or "TT,AKo".
    #[arg(long, default_value = "")]
    hands: String,

    /// Cards on the board in every iteration, e.g. "Ah Ks 2d".
    #[arg(long, default_value = "")]
    board: String,

    /// Dead cards, excluded from the deck entirely.
    #[arg(long, default_value = "")]
    dead: String,

    /// RNG seed for a reproducible run; OS entropy when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable interactively asking for board and dead cards.
    #[arg(long)]
    no_interaction: bool,
}

fn prompt(message: &str) -> io::Result<String> {
    println!("{message}");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let interactive = !args.no_interaction;

    let board_input = if args.board.is_empty() && interactive {
        prompt("Please input the board cards, separated by spaces. For example, \"Ah As\"")?
    } else {
        args.board
    };
    let board = parse_cards(&board_input)?;

    let dead_input = if args.dead.is_empty() && interactive {
        prompt("Please input any dead cards, separated by spaces. For example, \"Ah As\"")?
    } else {
        args.dead
    };
    let dead = parse_cards(&dead_input)?;

    // Without hands there is nothing to simulate, so ask even when
    // interaction is otherwise disabled.
    let hands_input = if args.hands.is_empty() {
        prompt("Please input comma separated hold em hands. For example, AhAd,KsKd")?
    } else {
        args.hands
    };
    let unavailable: Vec<Card> = board.iter().chain(dead.iter()).copied().collect();
    let ranges = HandRange::parse_list(&hands_input, &unavailable)?;

    let mut sim = Simulation::new(ranges, board, dead, args.iterations)?;
    let report = match args.seed {
        Some(seed) => sim.run_seeded(seed)?,
        None => sim.run(&mut rand::rng())?,
    };
    print!("{report}");
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
