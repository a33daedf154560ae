//! The office event log.
//!
//! RULE: Every state change made through the `Office` appends exactly one
//! event per observable effect. Variants are only ever appended.

use crate::{
    interaction::RapportChange,
    role::Role,
    types::{EmployeeId, EventSeq},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StaffEvent {
    // ── Roster ─────────────────────────────────────
    Hired {
        employee: EmployeeId,
        name: String,
        role: Role,
        manager: Option<EmployeeId>,
    },
    FieldWritten {
        employee: EmployeeId,
        field: String,
    },

    // ── Daily ──────────────────────────────────────
    ExpensesPaid {
        employee: EmployeeId,
        cost: i64,
        savings_after: i64,
        happiness_after: i64,
    },
    PerformanceShifted {
        employee: EmployeeId,
        before: i64,
        after: i64,
    },
    RelationshipsSoured {
        employee: EmployeeId,
        peers: usize,
    },

    // ── Interaction ────────────────────────────────
    RapportChanged {
        employee: EmployeeId,
        peer: String,
        change: RapportChange,
        score: i64,
    },
    BonusPaid {
        manager: EmployeeId,
        report: EmployeeId,
        amount: i64,
    },
    SalaryCut {
        manager: EmployeeId,
        report: EmployeeId,
        before: i64,
        after: i64,
    },
    Terminated {
        manager: EmployeeId,
        report: EmployeeId,
    },
}

/// One entry of the append-only log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub seq:        EventSeq,
    pub event_type: String,
    pub event:      StaffEvent,
}

/// Stable string name for a StaffEvent variant.
pub fn event_type_name(event: &StaffEvent) -> &'static str {
    match event {
        StaffEvent::Hired { .. }               => "hired",
        StaffEvent::FieldWritten { .. }        => "field_written",
        StaffEvent::ExpensesPaid { .. }        => "expenses_paid",
        StaffEvent::PerformanceShifted { .. }  => "performance_shifted",
        StaffEvent::RelationshipsSoured { .. } => "relationships_soured",
        StaffEvent::RapportChanged { .. }      => "rapport_changed",
        StaffEvent::BonusPaid { .. }           => "bonus_paid",
        StaffEvent::SalaryCut { .. }           => "salary_cut",
        StaffEvent::Terminated { .. }          => "terminated",
    }
}
