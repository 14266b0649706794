#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use tictactoe::{init_logging, run_session, BoardSize, Console, Game, SessionOutcome, WinRules};

#[derive(Parser)]
#[command(author, version, about = "Two-player tic-tac-toe on one terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Board side length: small (3), middle (5) or large (7).
    #[arg(long, value_enum, default_value_t = BoardSize::Small)]
    size: BoardSize,
    #[arg(long, help = "Do not count anti-diagonal lines as wins")]
    classic_rules: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rules = if cli.classic_rules {
        WinRules::classic()
    } else {
        WinRules::default()
    };
    let mut game = Game::with_rules(cli.size, rules);
    let mut console = Console::stdio();

    match run_session(&mut console, &mut game)? {
        SessionOutcome::Won { player, name } => {
            log::info!("{} ({}) won in {} moves", name, player, game.move_count());
        }
        SessionOutcome::Withdrawn => log::info!("session ended without a winner"),
    }
    Ok(())
}
