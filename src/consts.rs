use std::ops::RangeInclusive;

pub const NUM_ATOMS: usize = 1_000_000;

pub const COORD_MIN: f64 = -300.0;
pub const COORD_MAX: f64 = 300.0;

pub fn coord_range() -> RangeInclusive<f64> {
    COORD_MIN..=COORD_MAX
}

/// minimum width of a coordinate field, longer numbers are never clipped
pub const COORD_WIDTH: usize = 8;
pub const COORD_PRECISION: usize = 3;

pub const DEFAULT_OUTPUT: &str = "test.pdb";
