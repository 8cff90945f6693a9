use clap::{ArgAction, Parser};
use tracing::Level;

/// Write icon16.png, icon48.png and icon128.png into the current directory.
#[derive(Parser, Debug)]
#[command(name = "eye-icon", version)]
struct Cli {
    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match eye_icon::run_standard()? {
        eye_icon::DriverOutcome::Completed(paths) => {
            tracing::info!(count = paths.len(), "icons written");
        }
        eye_icon::DriverOutcome::MissingCapability(missing) => {
            tracing::info!(capability = missing.capability, "nothing written");
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
