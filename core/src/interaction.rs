//! Pairwise interaction rules.
//!
//! Two layers:
//!   1. `exchange`: relationship bookkeeping on the initiating employee.
//!      Runs for every interaction regardless of roles.
//!   2. `review`: a manager evaluating one of its direct reports.
//!      Exactly one of bonus or penalty happens per review.

use crate::{
    config::{InteractionRules, RulesConfig},
    employee::Employee,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RapportChange {
    Warmed,
    Soured,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rapport {
    pub change:        RapportChange,
    /// Score after the change.
    pub score:         i64,
    pub first_contact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReviewOutcome {
    Bonus {
        amount: i64,
    },
    Penalty {
        salary_before: i64,
        salary_after:  i64,
        terminated:    bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interaction {
    pub rapport: Rapport,
    pub review:  Option<ReviewOutcome>,
}

/// Everything a review reads, captured at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewInputs {
    pub manager_happiness:  i64,
    pub report_happiness:   i64,
    pub report_performance: i64,
}

impl ReviewInputs {
    pub fn capture(manager: &Employee, report: &Employee) -> Self {
        Self {
            manager_happiness:  manager.happiness(),
            report_happiness:   report.happiness(),
            report_performance: report.performance(),
        }
    }
}

/// Relationship bookkeeping for `actor` meeting `peer_name`.
///
/// First contact inserts a score of 0 before anything else. Then:
///   - score >= bond_threshold: score +1, actor happiness +1
///   - both happiness values < low_morale_threshold: score -1, actor happiness -1
///   - otherwise nothing further
pub fn exchange(
    actor: &mut Employee,
    peer_name: &str,
    peer_happiness: i64,
    rules: &InteractionRules,
) -> Rapport {
    let actor_happiness = actor.happiness();
    let first_contact = !actor.relationships().contains(peer_name);
    let score = actor.relationships_mut().entry(peer_name);

    let (change, happiness_delta) = if *score >= rules.bond_threshold {
        *score = score.saturating_add(1);
        (RapportChange::Warmed, 1)
    } else if actor_happiness < rules.low_morale_threshold
        && peer_happiness < rules.low_morale_threshold
    {
        *score = score.saturating_sub(1);
        (RapportChange::Soured, -1)
    } else {
        (RapportChange::Unchanged, 0)
    };
    let score = *score;

    if happiness_delta != 0 {
        actor.adjust_happiness(happiness_delta);
    }
    log::debug!(
        "{}: met {peer_name} ({change:?}), score {score}, happiness {}",
        actor.name(),
        actor.happiness()
    );
    Rapport { change, score, first_contact }
}

/// A manager's review of a direct report, decided on `inputs`.
///
/// Bonus when the report is happy and performing and the manager is happy.
/// Otherwise the report's salary is halved (floor); a terminable report whose
/// salary reaches 0 loses the job.
pub fn review(report: &mut Employee, inputs: ReviewInputs, rules: &RulesConfig) -> ReviewOutcome {
    let r = &rules.review;
    let earns_bonus = inputs.report_happiness >= r.min_report_happiness
        && inputs.report_performance >= r.min_report_performance
        && inputs.manager_happiness >= r.min_manager_happiness;

    if earns_bonus {
        report.adjust_savings(r.bonus_amount);
        log::info!("{}: review bonus {}, savings {}", report.name(), r.bonus_amount, report.savings());
        return ReviewOutcome::Bonus { amount: r.bonus_amount };
    }

    let salary_before = report.salary();
    let salary_after = salary_before / 2;
    // Halving a non-negative salary can't go negative.
    if let Err(e) = report.set_salary(salary_after) {
        log::warn!("{}: salary cut failed: {e}", report.name());
    }

    let terminated =
        salary_after == 0 && rules.policy(report.role()).terminable && report.is_employed();
    if terminated {
        report.set_employed(false);
        log::info!("{}: terminated after salary cut to 0", report.name());
    } else {
        log::info!("{}: review penalty, salary {salary_before} -> {salary_after}", report.name());
    }

    ReviewOutcome::Penalty { salary_before, salary_after, terminated }
}
