//! The closed set of concrete roles.
//!
//! There is no "plain employee": the base role is abstract, and asking
//! for it by name fails with `AbstractInstantiation`. Behaviour that
//! differs by role lives in `RolePolicy` (config.rs), looked up per call.

use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Temporary,
    Permanent,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Manager, Role::Temporary, Role::Permanent];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Temporary => "temporary",
            Self::Permanent => "permanent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manager" => Ok(Self::Manager),
            "temporary" | "temp" | "temporaryemployee" | "temporary_employee" => Ok(Self::Temporary),
            "permanent" | "perm" | "permanentemployee" | "permanent_employee" => Ok(Self::Permanent),
            "employee" => Err(SimError::AbstractInstantiation),
            _ => Err(SimError::UnknownRole { role: s.to_string() }),
        }
    }
}
