use clap::Parser;
use osdesigner::cli::Cli;
use osdesigner::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging()?;
    tracing::debug!("osdesigner {} built {}", osdesigner::VERSION, osdesigner::BUILD_DATE);

    cli.execute()
}
