//! The office: a caller-owned registry of employees.
//!
//! RULES:
//!   - Employees are addressed by `EmployeeId`; a manager link is an id,
//!     never an owning reference, so managers and reports can't form
//!     ownership cycles.
//!   - Names are unique per office (relationship ledgers key on names).
//!   - Nothing happens unless the caller asks: there is no scheduler here.
//!     Each method is one manual call against one or two employees.
//!   - Every effect made through these methods lands in the event log.

use crate::{
    config::RulesConfig,
    employee::{Employee, Expense, FieldWrite, WorkDay},
    error::{SimError, SimResult},
    event::{event_type_name, EventLogEntry, StaffEvent},
    interaction::{Interaction, ReviewOutcome},
    rng::DrawSource,
    role::Role,
    types::EmployeeId,
};

pub struct Office {
    rules:  RulesConfig,
    staff:  Vec<Employee>,
    events: Vec<EventLogEntry>,
}

impl Office {
    pub fn new(rules: RulesConfig) -> SimResult<Self> {
        rules.validate()?;
        Ok(Self {
            rules,
            staff: Vec::new(),
            events: Vec::new(),
        })
    }

    pub fn with_default_rules() -> Self {
        Self {
            rules: RulesConfig::default(),
            staff: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    // ── Roster ────────────────────────────────────────────────

    /// Hire a new employee. `manager`, if given, must already be on staff.
    pub fn hire(
        &mut self,
        role: Role,
        name: impl Into<String>,
        manager: Option<EmployeeId>,
        salary: i64,
        savings: i64,
    ) -> SimResult<EmployeeId> {
        let name = name.into();
        if let Some(manager_id) = manager {
            self.employee(manager_id)?;
        }
        if self.find_by_name(&name).is_some() {
            return Err(SimError::DuplicateName { name });
        }

        let id = EmployeeId(self.staff.len() as u32);
        let employee = Employee::new(id, role, name, manager, salary, savings)?;
        log::info!("{id}: hired {} as {role}", employee.name());

        self.record(StaffEvent::Hired {
            employee: id,
            name: employee.name().to_string(),
            role,
            manager,
        });
        self.staff.push(employee);
        Ok(id)
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.staff.get(id.index())
    }

    /// Direct mutable access. Changes made this way bypass the event log.
    pub fn get_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.staff.get_mut(id.index())
    }

    pub fn employee(&self, id: EmployeeId) -> SimResult<&Employee> {
        self.get(id).ok_or(SimError::UnknownEmployee { id })
    }

    fn employee_mut(&mut self, id: EmployeeId) -> SimResult<&mut Employee> {
        self.staff
            .get_mut(id.index())
            .ok_or(SimError::UnknownEmployee { id })
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Employee> {
        self.staff.iter().find(|e| e.name() == name)
    }

    pub fn id_of(&self, name: &str) -> SimResult<EmployeeId> {
        self.find_by_name(name)
            .map(Employee::id)
            .ok_or_else(|| SimError::UnknownName { name: name.to_string() })
    }

    /// Everyone whose manager link points at `manager`.
    pub fn reports_of(&self, manager: EmployeeId) -> impl Iterator<Item = &Employee> {
        self.staff.iter().filter(move |e| e.reports_to(manager))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.staff.iter()
    }

    pub fn len(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    pub fn events(&self) -> &[EventLogEntry] {
        &self.events
    }

    // ── Operations ────────────────────────────────────────────

    pub fn apply(&mut self, id: EmployeeId, write: FieldWrite) -> SimResult<()> {
        let field = write.field();
        self.employee_mut(id)?.apply(write)?;
        self.record(StaffEvent::FieldWritten {
            employee: id,
            field: field.to_string(),
        });
        Ok(())
    }

    pub fn daily_expense(&mut self, id: EmployeeId) -> SimResult<Expense> {
        let expense = {
            let rules = &self.rules;
            let employee = self
                .staff
                .get_mut(id.index())
                .ok_or(SimError::UnknownEmployee { id })?;
            employee.daily_expense(rules)
        };
        self.record(StaffEvent::ExpensesPaid {
            employee: id,
            cost: expense.cost,
            savings_after: expense.savings_after,
            happiness_after: expense.happiness_after,
        });
        Ok(expense)
    }

    pub fn work<D: DrawSource + ?Sized>(&mut self, id: EmployeeId, draws: &mut D) -> SimResult<WorkDay> {
        let day = {
            let rules = &self.rules;
            let employee = self
                .staff
                .get_mut(id.index())
                .ok_or(SimError::UnknownEmployee { id })?;
            employee.work(rules, draws)
        };
        self.record(StaffEvent::PerformanceShifted {
            employee: id,
            before: day.before,
            after: day.after,
        });
        if day.soured > 0 {
            self.record(StaffEvent::RelationshipsSoured {
                employee: id,
                peers: day.soured,
            });
        }
        Ok(day)
    }

    /// `actor` interacts with `other`. Only `actor`'s ledger changes; if
    /// `actor` reviews reports and `other` is one, `other` is reviewed.
    pub fn interact(&mut self, actor: EmployeeId, other: EmployeeId) -> SimResult<Interaction> {
        let (interaction, peer) = if actor == other {
            let rules = &self.rules;
            let employee = self
                .staff
                .get_mut(actor.index())
                .ok_or(SimError::UnknownEmployee { id: actor })?;
            (employee.interact_with_self(rules), employee.name().to_string())
        } else {
            let rules = &self.rules;
            let (a, b) = pair_mut(&mut self.staff, actor, other)?;
            (a.interact(b, rules), b.name().to_string())
        };

        self.record(StaffEvent::RapportChanged {
            employee: actor,
            peer,
            change: interaction.rapport.change,
            score: interaction.rapport.score,
        });
        match interaction.review {
            Some(ReviewOutcome::Bonus { amount }) => {
                self.record(StaffEvent::BonusPaid { manager: actor, report: other, amount });
            }
            Some(ReviewOutcome::Penalty { salary_before, salary_after, terminated }) => {
                self.record(StaffEvent::SalaryCut {
                    manager: actor,
                    report: other,
                    before: salary_before,
                    after: salary_after,
                });
                if terminated {
                    self.record(StaffEvent::Terminated { manager: actor, report: other });
                }
            }
            None => {}
        }
        Ok(interaction)
    }

    fn record(&mut self, event: StaffEvent) {
        let entry = EventLogEntry {
            seq:        self.events.len() as u64,
            event_type: event_type_name(&event).to_string(),
            event,
        };
        self.events.push(entry);
    }
}

/// Two distinct employees borrowed mutably at once.
fn pair_mut(
    staff: &mut [Employee],
    a: EmployeeId,
    b: EmployeeId,
) -> SimResult<(&mut Employee, &mut Employee)> {
    for id in [a, b] {
        if id.index() >= staff.len() {
            return Err(SimError::UnknownEmployee { id });
        }
    }
    let (ai, bi) = (a.index(), b.index());
    if ai < bi {
        let (lo, hi) = staff.split_at_mut(bi);
        Ok((&mut lo[ai], &mut hi[0]))
    } else {
        let (lo, hi) = staff.split_at_mut(ai);
        Ok((&mut hi[0], &mut lo[bi]))
    }
}
