use std::collections::BTreeMap;

use super::{
    aggregate::{Accumulator, Region},
    record::Count,
};

/// `later / earlier` as plain IEEE division: `x/0` is infinite, `0/0` and any
/// NaN count give NaN.
pub fn change_ratio(earlier: Count, later: Count) -> f64 {
    later.as_f64() / earlier.as_f64()
}

/// Sets `change_ratio` on every entry. Run once, after the last line.
pub fn apply_change_ratios(regions: &mut BTreeMap<Region, Accumulator>) {
    for accumulator in regions.values_mut() {
        accumulator.change_ratio = Some(change_ratio(
            accumulator.population_a,
            accumulator.population_b,
        ));
    }
}
