use serde::Deserialize;
use validator::Validate;

use crate::domain::team::NewTeam;
use crate::domain::types::TeamName;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data used to register a team.
pub struct AddTeamForm {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

/// Validated team payload.
pub struct AddTeamPayload {
    pub name: TeamName,
}

impl TryFrom<AddTeamForm> for AddTeamPayload {
    type Error = FormError;

    fn try_from(form: AddTeamForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let name = TeamName::new(form.name).map_err(|_| FormError::InvalidTeamName)?;
        Ok(Self { name })
    }
}

impl AddTeamPayload {
    pub fn into_domain(self) -> NewTeam {
        NewTeam::new(self.name)
    }
}
