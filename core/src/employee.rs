//! The employee record and the operations every role shares.
//!
//! RULES:
//!   - Hard invariants (salary >= 0, fixed name) are enforced by rejection.
//!   - Soft invariants (happiness, performance in 0..=100) are enforced by
//!     clamping and never fail.
//!   - Role differences come from the `RolePolicy` in `RulesConfig`;
//!     nothing in here matches on `Role` directly.

use crate::{
    config::RulesConfig,
    error::{SimError, SimResult},
    interaction::{self, Interaction, ReviewInputs},
    ledger::RelationshipLedger,
    metric::Metric,
    rng::DrawSource,
    role::Role,
    types::EmployeeId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_HAPPINESS: i64 = 50;
pub const DEFAULT_PERFORMANCE: i64 = 75;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    id:            EmployeeId,
    role:          Role,
    name:          String,
    manager:       Option<EmployeeId>,
    salary:        i64,
    savings:       i64,
    happiness:     Metric,
    performance:   Metric,
    is_employed:   bool,
    relationships: RelationshipLedger,
}

/// Result of one `daily_expense` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Expense {
    pub cost:            i64,
    pub savings_after:   i64,
    pub happiness_after: i64,
}

/// Result of one `work` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkDay {
    pub delta:  i64,
    pub before: i64,
    pub after:  i64,
    /// Ledger entries soured because performance dropped.
    pub soured: usize,
}

impl WorkDay {
    pub fn declined(&self) -> bool {
        self.after < self.before
    }
}

/// A write to one named field, routed through the matching setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldWrite {
    Name(String),
    Salary(i64),
    Savings(i64),
    Happiness(i64),
    Performance(i64),
    Employed(bool),
}

impl FieldWrite {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Name(_)        => "name",
            Self::Salary(_)      => "salary",
            Self::Savings(_)     => "savings",
            Self::Happiness(_)   => "happiness",
            Self::Performance(_) => "performance",
            Self::Employed(_)    => "employed",
        }
    }
}

impl Employee {
    /// Fails with `InvalidSalary` if `salary` is negative.
    pub fn new(
        id: EmployeeId,
        role: Role,
        name: impl Into<String>,
        manager: Option<EmployeeId>,
        salary: i64,
        savings: i64,
    ) -> SimResult<Self> {
        let name = name.into();
        if salary < 0 {
            log::warn!("{name}: rejected hire with salary {salary}");
            return Err(SimError::InvalidSalary { attempted: salary });
        }
        Ok(Self {
            id,
            role,
            name,
            manager,
            salary,
            savings,
            happiness: Metric::new(DEFAULT_HAPPINESS),
            performance: Metric::new(DEFAULT_PERFORMANCE),
            is_employed: true,
            relationships: RelationshipLedger::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manager(&self) -> Option<EmployeeId> {
        self.manager
    }

    pub fn reports_to(&self, manager: EmployeeId) -> bool {
        self.manager == Some(manager)
    }

    pub fn salary(&self) -> i64 {
        self.salary
    }

    pub fn savings(&self) -> i64 {
        self.savings
    }

    pub fn happiness(&self) -> i64 {
        self.happiness.value()
    }

    pub fn performance(&self) -> i64 {
        self.performance.value()
    }

    pub fn is_employed(&self) -> bool {
        self.is_employed
    }

    pub fn relationships(&self) -> &RelationshipLedger {
        &self.relationships
    }

    pub fn relationships_mut(&mut self) -> &mut RelationshipLedger {
        &mut self.relationships
    }

    // ── Mutators ──────────────────────────────────────────────

    /// Leaves the current salary untouched on failure.
    pub fn set_salary(&mut self, salary: i64) -> SimResult<()> {
        if salary < 0 {
            log::warn!("{}: rejected salary {salary}, keeping {}", self.name, self.salary);
            return Err(SimError::InvalidSalary { attempted: salary });
        }
        self.salary = salary;
        Ok(())
    }

    pub fn set_savings(&mut self, savings: i64) {
        self.savings = savings;
    }

    pub fn adjust_savings(&mut self, delta: i64) -> i64 {
        self.savings = self.savings.saturating_add(delta);
        self.savings
    }

    pub fn set_happiness(&mut self, happiness: i64) {
        self.happiness.set(happiness);
    }

    pub fn adjust_happiness(&mut self, delta: i64) -> i64 {
        self.happiness.adjust(delta)
    }

    pub fn set_performance(&mut self, performance: i64) {
        self.performance.set(performance);
    }

    pub fn adjust_performance(&mut self, delta: i64) -> i64 {
        self.performance.adjust(delta)
    }

    pub fn set_employed(&mut self, employed: bool) {
        self.is_employed = employed;
    }

    /// Apply a by-name field write. `Name` always fails.
    pub fn apply(&mut self, write: FieldWrite) -> SimResult<()> {
        match write {
            FieldWrite::Name(attempted) => {
                log::warn!("{}: rejected rename to '{attempted}'", self.name);
                return Err(SimError::ImmutableName { name: self.name.clone() });
            }
            FieldWrite::Salary(v)      => self.set_salary(v)?,
            FieldWrite::Savings(v)     => self.set_savings(v),
            FieldWrite::Happiness(v)   => self.set_happiness(v),
            FieldWrite::Performance(v) => self.set_performance(v),
            FieldWrite::Employed(v)    => self.set_employed(v),
        }
        Ok(())
    }

    // ── Daily operations ──────────────────────────────────────

    /// One day of living costs: happiness -1, savings minus the daily cost.
    /// Savings may go negative. Salary is never touched.
    pub fn daily_expense(&mut self, rules: &RulesConfig) -> Expense {
        let cost = rules.daily_cost(self.salary);
        self.savings = self.savings.saturating_sub(cost);
        let happiness_after = self.happiness.adjust(-1);
        log::debug!(
            "{}: daily expense {cost}, savings {} happiness {happiness_after}",
            self.name, self.savings
        );
        Expense {
            cost,
            savings_after: self.savings,
            happiness_after,
        }
    }

    /// One day of work: a role-shaped random walk on performance.
    pub fn work<D: DrawSource + ?Sized>(&mut self, rules: &RulesConfig, draws: &mut D) -> WorkDay {
        let policy = rules.policy(self.role);
        let before = self.performance.value();
        let delta = policy.walk.draw_delta(draws);
        let after = self.performance.adjust(delta);

        let soured = if after < before && policy.ledger_decays_on_slump {
            self.relationships.sour_all(1)
        } else {
            0
        };

        log::debug!("{}: work delta {delta:+}, performance {before} -> {after}", self.name);
        if soured > 0 {
            log::debug!("{}: slump soured {soured} relationships", self.name);
        }
        WorkDay { delta, before, after, soured }
    }

    /// Interact with `other`. Always updates this employee's ledger entry for
    /// `other`; if this employee's role reviews reports and `other` reports
    /// to it, the review runs too. Review inputs are read before the
    /// ledger bookkeeping changes anything.
    pub fn interact(&mut self, other: &mut Employee, rules: &RulesConfig) -> Interaction {
        let inputs = ReviewInputs::capture(self, other);
        let rapport = interaction::exchange(self, other.name(), other.happiness(), &rules.interaction);

        let review = if rules.policy(self.role).reviews_reports && other.reports_to(self.id) {
            Some(interaction::review(other, inputs, rules))
        } else {
            None
        };
        Interaction { rapport, review }
    }

    /// Interaction with oneself: ledger bookkeeping against one's own name.
    /// Nobody reviews themselves.
    pub fn interact_with_self(&mut self, rules: &RulesConfig) -> Interaction {
        let name = self.name.clone();
        let happiness = self.happiness();
        let rapport = interaction::exchange(self, &name, happiness, &rules.interaction);
        Interaction { rapport, review: None }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\tSalary: ${}\n\tSavings: ${}\n\tHappiness: {}%\n\tPerformance: {}%",
            self.name, self.salary, self.savings, self.happiness, self.performance
        )
    }
}
