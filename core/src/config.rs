//! Rule parameters: every threshold, rate and walk profile as data.
//!
//! `RulesConfig::default()` carries the standard office rules.
//! `RulesConfig::load()` reads the same shape from JSON (see data/rules.json).

use crate::{
    error::{SimError, SimResult},
    rng::DrawSource,
    role::Role,
};
use serde::{Deserialize, Serialize};

// ── Work walks ─────────────────────────────────────────────────────

/// Shape of one day's performance random walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkProfile {
    pub min_delta: i64,
    pub max_delta: i64,
    /// Percent chance (0–100) that the day produces no change at all.
    #[serde(default)]
    pub hold_percent: u8,
}

impl WalkProfile {
    pub fn new(min_delta: i64, max_delta: i64) -> Self {
        Self { min_delta, max_delta, hold_percent: 0 }
    }

    pub fn with_hold(mut self, hold_percent: u8) -> Self {
        self.hold_percent = hold_percent;
        self
    }

    /// Draw one day's delta. A profile without a hold chance takes exactly
    /// one draw; with a hold chance it takes the hold roll first.
    pub fn draw_delta<D: DrawSource + ?Sized>(&self, draws: &mut D) -> i64 {
        if self.hold_percent > 0 && draws.draw_between(0, 99) < i64::from(self.hold_percent) {
            return 0;
        }
        draws.draw_between(self.min_delta, self.max_delta)
    }
}

/// What a role is allowed to do. One of these per role replaces the
/// per-class overrides: swap a field, not a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePolicy {
    pub walk: WalkProfile,
    /// Sour every relationship by 1 when a work day lowers performance.
    pub ledger_decays_on_slump: bool,
    /// A review that halves salary to 0 ends employment.
    pub terminable: bool,
    /// Runs the bonus/penalty review when interacting with a direct report.
    pub reviews_reports: bool,
}

// ── Interaction rules ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRules {
    /// Score at or above which an interaction strengthens the bond.
    pub bond_threshold: i64,
    /// Both sides strictly below this sour the relationship.
    pub low_morale_threshold: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRules {
    pub min_report_happiness: i64,
    pub min_report_performance: i64,
    pub min_manager_happiness: i64,
    pub bonus_amount: i64,
}

// ── Top level ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Share of salary (percent) spent each day. Integer division, so the
    /// cost truncates toward zero.
    pub expense_rate_percent: i64,
    pub interaction: InteractionRules,
    pub review: ReviewRules,
    pub manager: RolePolicy,
    pub temporary: RolePolicy,
    pub permanent: RolePolicy,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            expense_rate_percent: 30,
            interaction: InteractionRules {
                bond_threshold: 10,
                low_morale_threshold: 45,
            },
            review: ReviewRules {
                min_report_happiness: 60,
                min_report_performance: 50,
                min_manager_happiness: 60,
                bonus_amount: 1000,
            },
            manager: RolePolicy {
                walk: WalkProfile::new(-5, 10),
                ledger_decays_on_slump: true,
                terminable: false,
                reviews_reports: true,
            },
            temporary: RolePolicy {
                walk: WalkProfile::new(-8, 8),
                ledger_decays_on_slump: false,
                terminable: true,
                reviews_reports: false,
            },
            permanent: RolePolicy {
                walk: WalkProfile::new(-3, 3).with_hold(40),
                ledger_decays_on_slump: false,
                terminable: false,
                reviews_reports: false,
            },
        }
    }
}

impl RulesConfig {
    /// Load from a JSON file.
    /// In tests, use RulesConfig::default().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let rules = Self::from_json(&content)?;
        log::debug!("rules: loaded from {path}");
        Ok(rules)
    }

    pub fn from_json(content: &str) -> SimResult<Self> {
        let rules: RulesConfig = serde_json::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn policy(&self, role: Role) -> &RolePolicy {
        match role {
            Role::Manager => &self.manager,
            Role::Temporary => &self.temporary,
            Role::Permanent => &self.permanent,
        }
    }

    pub fn policy_mut(&mut self, role: Role) -> &mut RolePolicy {
        match role {
            Role::Manager => &mut self.manager,
            Role::Temporary => &mut self.temporary,
            Role::Permanent => &mut self.permanent,
        }
    }

    /// Daily cost of living for a given salary.
    pub fn daily_cost(&self, salary: i64) -> i64 {
        salary.saturating_mul(self.expense_rate_percent) / 100
    }

    pub fn validate(&self) -> SimResult<()> {
        let invalid = |reason: String| -> SimResult<()> { Err(SimError::InvalidRules { reason }) };

        if !(0..=100).contains(&self.expense_rate_percent) {
            return invalid(format!(
                "expense_rate_percent must be within 0..=100, got {}",
                self.expense_rate_percent
            ));
        }
        if self.review.bonus_amount < 0 {
            return invalid(format!("bonus_amount must be non-negative, got {}", self.review.bonus_amount));
        }
        for role in Role::ALL {
            let walk = &self.policy(role).walk;
            if walk.min_delta > walk.max_delta {
                return invalid(format!(
                    "{role} walk has min_delta {} above max_delta {}",
                    walk.min_delta, walk.max_delta
                ));
            }
            if walk.hold_percent > 100 {
                return invalid(format!("{role} walk hold_percent {} exceeds 100", walk.hold_percent));
            }
        }
        Ok(())
    }
}
