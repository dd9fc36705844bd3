//! Demo: solve a two-jars configuration and replay the plan step by step.
//!
//! ```text
//! two_jars_demo --strategy bfs --j4 1 --j3 3
//! two_jars_demo --strategy astar --seed 42 --scramble 8
//! ```

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use wayfinder_harness::runner::{run, Strategy};
use wayfinder_harness::worlds::two_jars::{random_state, TwoJarsProblem, TwoJarsState};

#[derive(Parser)]
#[command(about = "Solve a two-jars configuration and replay the plan")]
struct Args {
    /// Search strategy: dfs, bfs, ucs, astar, ids.
    #[arg(long, default_value = "bfs")]
    strategy: Strategy,

    /// Starting volume in the 4-liter jar. When omitted, a random scramble
    /// is used.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    j4: Option<u8>,

    /// Starting volume in the 3-liter jar. When omitted, a random scramble
    /// is used.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    j3: Option<u8>,

    /// Seed for the random scramble.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of scramble moves.
    #[arg(long, default_value_t = 8)]
    scramble: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let start = match (args.j4, args.j3) {
        (Some(j4), Some(j3)) => TwoJarsState::new(j4, j3),
        _ => {
            let mut rng = SmallRng::seed_from_u64(args.seed);
            random_state(args.scramble, &mut rng)
        }
    };
    println!("Start: {start}");

    let problem = TwoJarsProblem::new(start);
    let report = run(&problem, args.strategy)?;

    if !report.solved() {
        println!("{}: no plan reaches the goal from this start", args.strategy);
        return Ok(());
    }

    for (index, (action, state)) in report
        .actions
        .iter()
        .zip(report.states.iter().skip(1))
        .enumerate()
    {
        println!("Move {:>2}: {action:<14} -> {state}", index + 1);
    }
    println!(
        "{} solved it in {} moves ({} expansions)",
        args.strategy,
        report.actions.len(),
        report.stats.expansions,
    );

    Ok(())
}
