use serde::{Deserialize, Serialize};

use crate::domain::types::{Age, MemberId, TeamId, TeamName, TypeConstraintError, Username};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub username: Username,
    pub age: Age,
    /// Owning team, if the member joined one.
    pub team_id: Option<TeamId>,
}

impl Member {
    pub fn try_new(
        id: i32,
        username: String,
        age: i32,
        team_id: Option<i32>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: MemberId::new(id)?,
            username: Username::new(username)?,
            age: Age::new(age)?,
            team_id: team_id.map(TeamId::new).transpose()?,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewMember {
    pub username: Username,
    pub age: Age,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    #[must_use]
    pub fn new(username: Username, age: Age, team_id: Option<TeamId>) -> Self {
        Self {
            username,
            age,
            team_id,
        }
    }
}

/// Flat read model joining a member with its (optional) team.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MemberTeam {
    pub member_id: MemberId,
    pub username: Username,
    pub age: Age,
    pub team_id: Option<TeamId>,
    pub team_name: Option<TeamName>,
}

impl MemberTeam {
    pub fn try_new(
        member_id: i32,
        username: String,
        age: i32,
        team_id: Option<i32>,
        team_name: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            member_id: MemberId::new(member_id)?,
            username: Username::new(username)?,
            age: Age::new(age)?,
            team_id: team_id.map(TeamId::new).transpose()?,
            team_name: team_name.map(TeamName::new).transpose()?,
        })
    }
}

/// Name and age only projection of a member.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MemberSummary {
    pub username: Username,
    pub age: Age,
}
