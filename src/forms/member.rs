use serde::Deserialize;
use validator::Validate;

use crate::domain::member::NewMember;
use crate::domain::search::has_text;
use crate::domain::types::{Age, TeamId, TeamName, Username};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data used to register a member, optionally joining a team by name.
pub struct AddMemberForm {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(range(min = 0, max = 150))]
    pub age: i32,
    pub team_name: Option<String>,
}

/// Validated member payload; the team still has to be resolved by name.
pub struct AddMemberPayload {
    pub username: Username,
    pub age: Age,
    pub team_name: Option<TeamName>,
}

impl TryFrom<AddMemberForm> for AddMemberPayload {
    type Error = FormError;

    fn try_from(form: AddMemberForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let username = Username::new(form.username).map_err(|_| FormError::InvalidUsername)?;
        let age = Age::new(form.age).map_err(|_| FormError::InvalidAge)?;
        let team_name = has_text(form.team_name.as_deref())
            .map(TeamName::new)
            .transpose()
            .map_err(|_| FormError::InvalidTeamName)?;

        Ok(Self {
            username,
            age,
            team_name,
        })
    }
}

impl AddMemberPayload {
    pub fn into_domain(self, team_id: Option<TeamId>) -> NewMember {
        NewMember::new(self.username, self.age, team_id)
    }
}
