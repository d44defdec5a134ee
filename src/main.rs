#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::Write;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlacementMode {
    /// Place each ship by hand.
    Manual,
    /// Scatter the fleet randomly.
    Random,
}

#[derive(Parser)]
#[command(author, version, about = "Grid naval combat against a hunt-and-target computer opponent", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// How the player's fleet gets placed.
    #[arg(long, value_enum, default_value_t = PlacementMode::Manual)]
    placement: PlacementMode,
    /// Fix the RNG seed for a reproducible game (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
    /// Pause before the computer's shot, in milliseconds.
    #[arg(long, default_value_t = 800)]
    delay_ms: u64,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    flotilla::init_logging();

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("using fixed seed {} (game will be reproducible)", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    loop {
        flotilla::cli::run_session(
            &mut rng,
            matches!(cli.placement, PlacementMode::Manual),
            Duration::from_millis(cli.delay_ms),
        )?;

        print!("\nPlay again? [y/N] ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        if !line.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }
    Ok(())
}
