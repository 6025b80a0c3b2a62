//! Percent - signed, unbounded percentage for translate offsets
//!
//! Unlike [`Scale`](super::Scale) this is not range-checked: a pointer
//! outside the container yields values past ±100 and they are kept.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(f64);

impl Percent {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    /// `-0` collapses to `0%`
    pub fn to_css(&self) -> String {
        let v = if self.0 == 0.0 { 0.0 } else { self.0 };
        format!("{v}%")
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
