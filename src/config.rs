use clap::ArgMatches;
use eyre::{eyre, ErrReport};
use std::path::PathBuf;
use tracing::Level;

pub struct Config {
    pub input: PathBuf,
    pub log_level: Level,
}

impl TryFrom<ArgMatches> for Config {
    type Error = ErrReport;
    fn try_from(mut matches: ArgMatches) -> Result<Self, Self::Error> {
        let input = matches
            .remove_one::<PathBuf>("input")
            .ok_or(eyre!("Missing input"))?;
        let log_level = matches
            .remove_one::<Level>("log-level")
            .ok_or(eyre!("Missing log-level"))?;

        Ok(Self { input, log_level })
    }
}
