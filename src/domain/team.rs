use serde::{Deserialize, Serialize};

use crate::domain::types::{TeamId, TeamName, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
}

impl Team {
    pub fn try_new(id: i32, name: String) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: TeamId::new(id)?,
            name: TeamName::new(name)?,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTeam {
    pub name: TeamName,
}

impl NewTeam {
    #[must_use]
    pub fn new(name: TeamName) -> Self {
        Self { name }
    }
}

/// Aggregated age figures for the members of a single team.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TeamAgeStats {
    pub team_name: TeamName,
    pub member_count: usize,
    pub average_age: f64,
}
