//! Metric helpers for `cosmology_io`.
//!
//! This module defines metric names and simple helper functions
//! wrapping the [`metrics`](https://docs.rs/metrics) crate.

use metrics::counter;

/// Name of the counter tracking successful conversions.
pub const CONVERSIONS_TOTAL: &str = "cosmology_io_conversions_total";
/// Name of the counter tracking failed conversions.
pub const ERRORS_TOTAL: &str = "cosmology_io_errors_total";

/// Direction of a conversion.
#[derive(Clone, Copy, Debug)]
pub enum Direction {
    /// Cosmology to payload.
    Encode,
    /// Payload to cosmology.
    Decode,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }
}

/// Record a successful conversion through `format`.
pub fn inc_conversions(direction: Direction, format: &str) {
    counter!(
        CONVERSIONS_TOTAL,
        "direction" => direction.as_str(),
        "format" => format.to_owned()
    )
    .increment(1);
}

/// Record a failed conversion.
pub fn inc_errors(direction: Direction) {
    counter!(ERRORS_TOTAL, "direction" => direction.as_str()).increment(1);
}
