use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcpack::cli::Cli;

fn main() {
    let args = Cli::parse();

    // logs go to stderr, stdout is for prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = mcpack::run(args) {
        eprintln!("Error creating datapack: {err:#}");
        std::process::exit(1);
    }
}
