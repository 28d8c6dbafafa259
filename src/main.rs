use eyre::Result;
use ranking::{
    cli, config::Config, logging::setup_logging, program::population_change::PopulationChange,
};

fn main() -> Result<()> {
    let cmd = cli::register_args();
    let config = Config::try_from(cmd.get_matches())?;
    setup_logging(config.log_level)?;

    PopulationChange::run(&config.input)?;

    Ok(())
}
