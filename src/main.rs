use clap::Parser;
use scoreboard::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("scoreboard=debug,info")
    } else {
        EnvFilter::new("scoreboard=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Replay(args) => {
            cli::replay::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Demo(args) => {
            cli::demo::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
