//! Services handling team administration.

use crate::domain::team::{Team, TeamAgeStats};
use crate::forms::team::{AddTeamForm, AddTeamPayload};
use crate::repository::{TeamReader, TeamWriter};
use crate::services::ServiceResult;

/// Validates the form and persists the team.
pub fn register_team<R>(repo: &R, form: AddTeamForm) -> ServiceResult<Team>
where
    R: TeamWriter + ?Sized,
{
    let payload = AddTeamPayload::try_from(form)?;

    let new_team = payload.into_domain();

    Ok(repo.create_team(&new_team)?)
}

/// Member count and average age for every team with members.
pub fn team_age_stats<R>(repo: &R) -> ServiceResult<Vec<TeamAgeStats>>
where
    R: TeamReader + ?Sized,
{
    Ok(repo.list_team_age_stats()?)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::types::TeamName;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    #[test]
    fn register_team_persists_trimmed_name() {
        let mut repo = MockRepository::new();
        repo.expect_create_team()
            .withf(|new_team| new_team.name.as_str() == "teamA")
            .times(1)
            .returning(|new_team| Team::try_new(1, new_team.name.to_string()).map_err(Into::into));

        let team = register_team(
            &repo,
            AddTeamForm {
                name: " teamA ".to_string(),
            },
        )
        .expect("should register team");

        assert_eq!(team.name.as_str(), "teamA");
    }

    #[test]
    fn duplicate_team_is_reported() {
        let mut repo = MockRepository::new();
        repo.expect_create_team()
            .times(1)
            .returning(|_| Err(RepositoryError::ConstraintViolation("name".to_string())));

        let result = register_team(
            &repo,
            AddTeamForm {
                name: "teamA".to_string(),
            },
        );

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::ConstraintViolation(_)))
        ));
    }

    #[test]
    fn stats_are_passed_through() {
        let mut repo = MockRepository::new();
        repo.expect_list_team_age_stats().times(1).returning(|| {
            Ok(vec![TeamAgeStats {
                team_name: TeamName::new("teamA").expect("valid team name"),
                member_count: 2,
                average_age: 15.0,
            }])
        });

        let stats = team_age_stats(&repo).expect("should load stats");

        assert_eq!(stats[0].member_count, 2);
        assert_eq!(stats[0].average_age, 15.0);
    }
}
