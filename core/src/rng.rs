//! Deterministic random draws.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! Every random outcome flows through a `DrawSource` handed in by the
//! caller. Production callers use `SeededDraws` streams from an `RngBank`;
//! tests that need an exact outcome use `ScriptedDraws`.
//!
//! Each employee gets its own stream, seeded deterministically from
//! (master_seed XOR employee_index * golden-ratio constant). This means:
//!   - Hiring another employee never changes existing employees' streams.
//!   - Each employee's stream is fully reproducible in isolation.

use crate::types::EmployeeId;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::collections::{BTreeMap, VecDeque};

/// The single "next draw" operation the rule engine needs.
pub trait DrawSource {
    /// Next integer in `low..=high`. Callers guarantee `low <= high`.
    fn draw_between(&mut self, low: i64, high: i64) -> i64;
}

impl<D: DrawSource + ?Sized> DrawSource for &mut D {
    fn draw_between(&mut self, low: i64, high: i64) -> i64 {
        (**self).draw_between(low, high)
    }
}

/// A deterministic PCG stream.
pub struct SeededDraws {
    inner: Pcg64Mcg,
}

impl SeededDraws {
    /// Stream for a stable slot under `master_seed`. The slot for an
    /// employee is its id and must never change once assigned.
    pub fn new(master_seed: u64, slot: u64) -> Self {
        let derived_seed = master_seed ^ (slot.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Stream seeded directly, for one-off callers with no bank.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(seed, 0)
    }
}

impl DrawSource for SeededDraws {
    fn draw_between(&mut self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        self.inner.gen_range(low..=high)
    }
}

/// Replays a fixed list of draws.
///
/// Each value is clamped into the requested range. Once the script runs
/// out, the last value repeats (or 0, clamped, if the script was empty).
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    script: VecDeque<i64>,
    last: Option<i64>,
    consumed: usize,
}

impl ScriptedDraws {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            script: values.into_iter().collect(),
            last: None,
            consumed: 0,
        }
    }

    /// How many draws have been taken so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn draw_between(&mut self, low: i64, high: i64) -> i64 {
        self.consumed += 1;
        let value = match self.script.pop_front() {
            Some(v) => {
                self.last = Some(v);
                v
            }
            None => self.last.unwrap_or(0),
        };
        value.clamp(low, high.max(low))
    }
}

/// All employee streams for a single run, created lazily by id.
pub struct RngBank {
    master_seed: u64,
    streams: BTreeMap<EmployeeId, SeededDraws>,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            streams: BTreeMap::new(),
        }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// The persistent stream for `id`. Repeated calls continue the same
    /// stream rather than restarting it.
    pub fn stream(&mut self, id: EmployeeId) -> &mut SeededDraws {
        let seed = self.master_seed;
        self.streams
            .entry(id)
            .or_insert_with(|| SeededDraws::new(seed, u64::from(id.0)))
    }
}
