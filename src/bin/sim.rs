use clap::Parser;
use tictactoe::{init_logging, sim::play_random, BoardSize, WinRules};

#[derive(Parser)]
#[command(author, version, about = "Play a random tic-tac-toe game and print a JSON summary")]
struct Args {
    /// RNG seed; O uses `seed + 1`.
    seed: u64,
    #[arg(long, value_enum, default_value_t = BoardSize::Small)]
    size: BoardSize,
    #[arg(long, help = "Do not count anti-diagonal lines as wins")]
    classic_rules: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let rules = if args.classic_rules {
        WinRules::classic()
    } else {
        WinRules::default()
    };
    let summary = play_random(args.seed, args.size, rules)?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
