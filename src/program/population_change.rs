use eyre::Result;
use std::{io::BufRead, path::Path};
use tracing::info;

use super::{
    aggregate::{Aggregation, YEAR_A, YEAR_B},
    rank::{rank, render_all},
    ratio::apply_change_ratios,
    record::Record,
    source::LineSource,
};

pub struct PopulationChange {}

impl PopulationChange {
    pub fn run(input: &Path) -> Result<()> {
        info!(input = %input.display(), "Reading census");
        let source = LineSource::open(input)?;
        let ranking = Self::ranking(source)?;
        println!("{:?}", ranking);
        Ok(())
    }

    /// Reads every line, then ranks regions by their `YEAR_B / YEAR_A` ratio.
    pub fn ranking<R: BufRead>(source: LineSource<R>) -> Result<Vec<String>> {
        let mut aggregation = Aggregation::new();
        for line in source {
            let line = line?;
            aggregation.add(&Record::parse(&line));
        }

        let stats = aggregation.stats();
        info!(
            lines = stats.lines,
            kept = stats.kept,
            discarded = stats.discarded,
            nan_counts = stats.nan_counts,
            regions = aggregation.len(),
            "Finished reading {} and {} rows",
            YEAR_A,
            YEAR_B
        );

        let mut regions = aggregation.into_regions();
        apply_change_ratios(&mut regions);
        Ok(render_all(&rank(regions)))
    }
}
