use std::{collections::BTreeMap, fmt};
use tracing::{debug, trace};

use super::record::{Count, Record};

/// Earlier census year, the ratio's denominator.
pub const YEAR_A: i64 = 2010;
/// Later census year, the ratio's numerator.
pub const YEAR_B: i64 = 2015;

/// Region key. `Region(None)` collects lines too short to carry a region column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Region(Option<String>);

impl Region {
    pub fn new(name: &str) -> Self {
        Region(Some(name.to_string()))
    }

    pub fn absent() -> Self {
        Region(None)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<Option<&str>> for Region {
    fn from(name: Option<&str>) -> Self {
        Region(name.map(str::to_string))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("undefined"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Accumulator {
    pub population_a: Count,
    pub population_b: Count,
    /// Unset until every line has been consumed.
    pub change_ratio: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CensusYear {
    A,
    B,
}

impl CensusYear {
    pub fn of(year: Option<i64>) -> Option<Self> {
        match year? {
            YEAR_A => Some(CensusYear::A),
            YEAR_B => Some(CensusYear::B),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub kept: usize,
    pub discarded: usize,
    pub nan_counts: usize,
}

/// Running per-region totals for the two census years.
#[derive(Debug, Default)]
pub struct Aggregation {
    regions: BTreeMap<Region, Accumulator>,
    stats: Stats,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into its region's totals. Records for any other year
    /// are dropped; returns whether the record was kept.
    pub fn add(&mut self, record: &Record<'_>) -> bool {
        self.stats.lines += 1;

        let Some(census_year) = CensusYear::of(record.year) else {
            self.stats.discarded += 1;
            trace!(year = ?record.year, "Discarded record");
            return false;
        };

        let region = Region::from(record.region);
        let accumulator = self.regions.entry(region).or_insert_with_key(|region| {
            debug!(%region, "New region");
            Accumulator::default()
        });
        match census_year {
            CensusYear::A => accumulator.population_a += record.count,
            CensusYear::B => accumulator.population_b += record.count,
        }

        self.stats.kept += 1;
        if record.count.is_nan() {
            self.stats.nan_counts += 1;
            trace!(region = ?record.region, "Count is not a number");
        }

        true
    }

    pub fn get(&self, region: &Region) -> Option<&Accumulator> {
        self.regions.get(region)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Ends the input phase; the totals are frozen from here on.
    pub fn into_regions(self) -> BTreeMap<Region, Accumulator> {
        self.regions
    }
}
