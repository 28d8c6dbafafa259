pub mod aggregate;
pub mod population_change;
pub mod rank;
pub mod ratio;
pub mod record;
pub mod source;
