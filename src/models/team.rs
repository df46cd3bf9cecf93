//! Diesel models representing teams.

use diesel::prelude::*;

use crate::domain::team::{NewTeam as DomainNewTeam, Team as DomainTeam};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::teams)]
/// Diesel model for [`crate::domain::team::Team`].
pub struct Team {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::teams)]
/// Insertable form of [`Team`].
pub struct NewTeam<'a> {
    pub name: &'a str,
}

impl TryFrom<Team> for DomainTeam {
    type Error = TypeConstraintError;

    fn try_from(team: Team) -> Result<Self, Self::Error> {
        DomainTeam::try_new(team.id, team.name)
    }
}

impl<'a> From<&'a DomainNewTeam> for NewTeam<'a> {
    fn from(team: &'a DomainNewTeam) -> Self {
        Self {
            name: team.name.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TeamName;

    #[test]
    fn from_domain_newteam() {
        let domain = DomainNewTeam::new(TeamName::new("teamA").expect("valid team name"));
        let new: NewTeam = (&domain).into();
        assert_eq!(new.name, "teamA");
    }

    #[test]
    fn team_with_blank_name_is_rejected() {
        let db = Team {
            id: 1,
            name: " ".into(),
        };
        assert_eq!(
            DomainTeam::try_from(db),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
