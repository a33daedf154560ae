//! Rule engine for a small workplace simulation.
//!
//! Employees (managers, temporary and permanent staff) spend savings,
//! lose happiness, drift in performance and influence each other through
//! pairwise interactions. See `office` for the registry that drives it all.

pub mod config;
pub mod employee;
pub mod error;
pub mod event;
pub mod interaction;
pub mod ledger;
pub mod metric;
pub mod office;
pub mod rng;
pub mod role;
pub mod types;

pub use config::RulesConfig;
pub use employee::{Employee, FieldWrite};
pub use error::{SimError, SimResult};
pub use office::Office;
pub use role::Role;
pub use types::EmployeeId;
