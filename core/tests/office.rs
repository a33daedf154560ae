//! Office registry: hiring, lookups, the manager link and the event log.

use staffsim_core::{
    event::StaffEvent,
    interaction::{RapportChange, ReviewOutcome},
    rng::ScriptedDraws,
    EmployeeId, FieldWrite, Office, Role, RulesConfig, SimError,
};

#[test]
fn hire_assigns_sequential_ids_and_wires_manager() {
    let mut office = Office::with_default_rules();
    let m = office.hire(Role::Manager, "M", None, 10000, 20000).unwrap();
    let a = office.hire(Role::Temporary, "A", Some(m), 200, 10000).unwrap();

    assert_eq!(m, EmployeeId(0));
    assert_eq!(a, EmployeeId(1));
    assert_eq!(office.len(), 2);
    assert_eq!(office.get(a).unwrap().manager(), Some(m));
    assert_eq!(office.id_of("A").unwrap(), a);
    assert_eq!(office.get(a).unwrap().role(), Role::Temporary);
}

#[test]
fn hire_rejects_negative_salary_without_adding_anyone() {
    let mut office = Office::with_default_rules();
    let result = office.hire(Role::Permanent, "A", None, -5, 0);
    assert!(matches!(result, Err(SimError::InvalidSalary { attempted: -5 })));
    assert!(office.is_empty());
    assert!(office.events().is_empty());
}

#[test]
fn hire_rejects_unknown_manager() {
    let mut office = Office::with_default_rules();
    let result = office.hire(Role::Temporary, "A", Some(EmployeeId(7)), 200, 0);
    assert!(matches!(result, Err(SimError::UnknownEmployee { id }) if id == EmployeeId(7)));
}

#[test]
fn hire_rejects_duplicate_names() {
    let mut office = Office::with_default_rules();
    office.hire(Role::Manager, "A", None, 200, 0).unwrap();
    let result = office.hire(Role::Temporary, "A", None, 200, 0);
    assert!(matches!(result, Err(SimError::DuplicateName { .. })));
}

#[test]
fn reports_of_lists_direct_reports_only() {
    let mut office = Office::with_default_rules();
    let boss = office.hire(Role::Manager, "Boss", None, 20000, 0).unwrap();
    let m = office.hire(Role::Manager, "M", Some(boss), 10000, 0).unwrap();
    office.hire(Role::Temporary, "A", Some(m), 200, 0).unwrap();
    office.hire(Role::Permanent, "B", Some(m), 300, 0).unwrap();

    let names: Vec<&str> = office.reports_of(m).map(|e| e.name()).collect();
    assert_eq!(names, vec!["A", "B"]);
    let names: Vec<&str> = office.reports_of(boss).map(|e| e.name()).collect();
    assert_eq!(names, vec!["M"]);
}

#[test]
fn manager_reviewing_a_manager_never_changes_employment() {
    let mut office = Office::with_default_rules();
    let boss = office.hire(Role::Manager, "Boss", None, 20000, 0).unwrap();
    let m = office.hire(Role::Manager, "M", Some(boss), 1, 0).unwrap();
    office.get_mut(boss).unwrap().set_happiness(10);

    let outcome = office.interact(boss, m).unwrap();

    assert_eq!(
        outcome.review,
        Some(ReviewOutcome::Penalty { salary_before: 1, salary_after: 0, terminated: false })
    );
    assert!(office.get(m).unwrap().is_employed());
    assert!(office.get(boss).unwrap().is_employed());
}

#[test]
fn manager_meeting_someone_elses_report_is_not_a_review() {
    let mut office = Office::with_default_rules();
    let m1 = office.hire(Role::Manager, "M1", None, 10000, 0).unwrap();
    let m2 = office.hire(Role::Manager, "M2", None, 10000, 0).unwrap();
    let a = office.hire(Role::Temporary, "A", Some(m2), 1, 0).unwrap();

    let outcome = office.interact(m1, a).unwrap();
    assert_eq!(outcome.review, None);
    assert_eq!(office.get(a).unwrap().salary(), 1);
}

#[test]
fn review_reads_happiness_before_bookkeeping() {
    // The manager's strong bond would lift happiness 59 -> 60 during
    // bookkeeping; the review must still see 59.
    let mut office = Office::with_default_rules();
    let m = office.hire(Role::Manager, "M", None, 10000, 0).unwrap();
    let a = office.hire(Role::Temporary, "A", Some(m), 200, 0).unwrap();
    office.get_mut(m).unwrap().set_happiness(59);
    office.get_mut(m).unwrap().relationships_mut().set("A", 12);
    office.get_mut(a).unwrap().set_happiness(70);
    office.get_mut(a).unwrap().set_performance(70);

    let outcome = office.interact(m, a).unwrap();

    assert_eq!(outcome.rapport.change, RapportChange::Warmed);
    assert_eq!(office.get(m).unwrap().happiness(), 60);
    assert!(matches!(outcome.review, Some(ReviewOutcome::Penalty { .. })));
}

#[test]
fn self_interaction_books_own_name_only() {
    let mut office = Office::with_default_rules();
    let m = office.hire(Role::Manager, "M", None, 10000, 0).unwrap();
    office.get_mut(m).unwrap().set_happiness(30);

    let outcome = office.interact(m, m).unwrap();

    assert_eq!(outcome.review, None);
    assert_eq!(outcome.rapport.change, RapportChange::Soured);
    let m = office.get(m).unwrap();
    assert_eq!(m.relationships().score("M"), Some(-1));
    assert_eq!(m.happiness(), 29);
    assert_eq!(m.salary(), 10000);
}

#[test]
fn unknown_ids_are_errors() {
    let mut office = Office::with_default_rules();
    let m = office.hire(Role::Manager, "M", None, 10000, 0).unwrap();
    let ghost = EmployeeId(3);

    assert!(matches!(office.daily_expense(ghost), Err(SimError::UnknownEmployee { .. })));
    assert!(matches!(
        office.work(ghost, &mut ScriptedDraws::new([1])),
        Err(SimError::UnknownEmployee { .. })
    ));
    assert!(matches!(office.interact(m, ghost), Err(SimError::UnknownEmployee { .. })));
    assert!(matches!(office.interact(ghost, m), Err(SimError::UnknownEmployee { .. })));
    assert!(matches!(office.id_of("nobody"), Err(SimError::UnknownName { .. })));
}

#[test]
fn field_writes_go_through_validation() {
    let mut office = Office::with_default_rules();
    let a = office.hire(Role::Temporary, "A", None, 200, 0).unwrap();

    office.apply(a, FieldWrite::Happiness(250)).unwrap();
    office.apply(a, FieldWrite::Savings(-40)).unwrap();
    assert!(office.apply(a, FieldWrite::Salary(-1)).is_err());
    assert!(matches!(
        office.apply(a, FieldWrite::Name("Z".into())),
        Err(SimError::ImmutableName { .. })
    ));

    let a_ref = office.get(a).unwrap();
    assert_eq!(a_ref.happiness(), 100);
    assert_eq!(a_ref.savings(), -40);
    assert_eq!(a_ref.salary(), 200);
    assert_eq!(a_ref.name(), "A");

    let written: Vec<&str> = office
        .events()
        .iter()
        .filter_map(|e| match &e.event {
            StaffEvent::FieldWritten { field, .. } => Some(field.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(written, vec!["happiness", "savings"], "failed writes are not logged");
}

#[test]
fn event_log_records_each_effect_in_order() {
    let mut office = Office::with_default_rules();
    let m = office.hire(Role::Manager, "M", None, 10000, 20000).unwrap();
    let a = office.hire(Role::Temporary, "A", Some(m), 1, 0).unwrap();
    office.get_mut(m).unwrap().relationships_mut().set("A", 2);

    office.daily_expense(a).unwrap();
    office.work(m, &mut ScriptedDraws::new([-5])).unwrap();
    office.interact(m, a).unwrap();

    let types: Vec<&str> = office.events().iter().map(|e| e.event_type.as_str()).collect();
    assert_eq!(
        types,
        vec![
            "hired",
            "hired",
            "expenses_paid",
            "performance_shifted",
            "relationships_soured",
            "rapport_changed",
            "salary_cut",
            "terminated",
        ]
    );
    let seqs: Vec<u64> = office.events().iter().map(|e| e.seq).collect();
    assert_eq!(seqs, (0..8).collect::<Vec<u64>>());
}

#[test]
fn event_payloads_serialize_with_type_tag() {
    let mut office = Office::with_default_rules();
    office.hire(Role::Permanent, "A", None, 300, 0).unwrap();
    let json = serde_json::to_value(&office.events()[0].event).unwrap();
    assert_eq!(json["type"], "hired");
    assert_eq!(json["role"], "permanent");
    assert_eq!(json["name"], "A");
}

#[test]
fn custom_rules_flow_through_operations() {
    let mut rules = RulesConfig::default();
    rules.expense_rate_percent = 50;
    rules.review.bonus_amount = 250;
    let mut office = Office::new(rules).unwrap();
    let m = office.hire(Role::Manager, "M", None, 10000, 0).unwrap();
    let a = office.hire(Role::Permanent, "A", Some(m), 200, 0).unwrap();

    office.daily_expense(a).unwrap();
    assert_eq!(office.get(a).unwrap().savings(), -100);

    office.get_mut(m).unwrap().set_happiness(90);
    office.get_mut(a).unwrap().set_happiness(90);
    office.interact(m, a).unwrap();
    assert_eq!(office.get(a).unwrap().savings(), 150);
}

#[test]
fn invalid_rules_are_refused() {
    let mut rules = RulesConfig::default();
    rules.permanent.walk.hold_percent = 101;
    assert!(matches!(Office::new(rules), Err(SimError::InvalidRules { .. })));
}
