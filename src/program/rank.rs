use std::{cmp::Ordering, collections::BTreeMap};

use super::aggregate::{Accumulator, Region};

pub const CHANGE_RATIO_LABEL: &str = "変化率";

/// Largest ratio first. NaN is not comparable and goes after every number.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Orders regions by change ratio, highest first. The sort is stable, so equal
/// ratios keep the map's region order. An unset ratio ranks as NaN.
pub fn rank(regions: BTreeMap<Region, Accumulator>) -> Vec<(Region, Accumulator)> {
    let mut ranked: Vec<_> = regions.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| {
        descending(
            a.change_ratio.unwrap_or(f64::NAN),
            b.change_ratio.unwrap_or(f64::NAN),
        )
    });
    ranked
}

/// `<region>:<year A>=><year B> 変化率<ratio>`
pub fn render(region: &Region, accumulator: &Accumulator) -> String {
    let ratio = match accumulator.change_ratio {
        Some(ratio) if ratio == f64::INFINITY => "Infinity".to_string(),
        Some(ratio) if ratio == f64::NEG_INFINITY => "-Infinity".to_string(),
        Some(ratio) => ratio.to_string(),
        None => "null".to_string(),
    };
    format!(
        "{}:{}=>{} {}{}",
        region, accumulator.population_a, accumulator.population_b, CHANGE_RATIO_LABEL, ratio
    )
}

pub fn render_all(ranked: &[(Region, Accumulator)]) -> Vec<String> {
    ranked
        .iter()
        .map(|(region, accumulator)| render(region, accumulator))
        .collect()
}
