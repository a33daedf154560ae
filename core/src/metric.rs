//! Clamped 0–100 metric shared by happiness and performance.
//!
//! RULE: writes never fail. Anything outside [MIN, MAX] is pulled back
//! to the nearest bound, including values read back from JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Metric(i64);

impl Metric {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn set(&mut self, value: i64) {
        *self = Self::new(value);
    }

    /// Shift by `delta` and clamp. Returns the new value.
    pub fn adjust(&mut self, delta: i64) -> i64 {
        self.set(self.0.saturating_add(delta));
        self.0
    }
}

impl From<i64> for Metric {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Metric> for i64 {
    fn from(metric: Metric) -> Self {
        metric.0
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
