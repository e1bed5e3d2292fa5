mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = platform::config::Args::parse();
    let config = platform::config::load(&args)?;
    platform::logging::initialize(&config.logging);
    platform::run_app(config)
}
