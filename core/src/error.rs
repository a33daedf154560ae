use crate::types::EmployeeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid salary: {attempted} (salary must be non-negative)")]
    InvalidSalary { attempted: i64 },

    #[error("Name of '{name}' is fixed at hire and cannot be reassigned")]
    ImmutableName { name: String },

    #[error("Employee is an abstract role; hire a manager, temporary or permanent employee")]
    AbstractInstantiation,

    #[error("Unknown role '{role}'")]
    UnknownRole { role: String },

    #[error("Employee {id} not found")]
    UnknownEmployee { id: EmployeeId },

    #[error("No employee named '{name}'")]
    UnknownName { name: String },

    #[error("An employee named '{name}' is already on staff")]
    DuplicateName { name: String },

    #[error("Invalid rules: {reason}")]
    InvalidRules { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
