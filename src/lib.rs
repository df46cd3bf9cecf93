//! Member/team persistence with composable, optional-field searches.
//!
//! The [`repository::predicate`] module turns a
//! [`domain::search::MemberSearchCondition`] into Diesel filters, and
//! [`repository::MemberSearch`] runs them either unpaginated or as a
//! [`pagination::Page`] with an always-count or lazy-count total.

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;
pub mod services;

/// Number of members created by [`seed_sample_data`].
pub const SAMPLE_MEMBER_COUNT: i32 = 100;

/// Populates an empty store with `teamA`, `teamB` and members `member0..99`
/// alternating between the two teams. Returns the number of members created.
pub fn seed_sample_data<R>(repo: &R) -> repository::errors::RepositoryResult<usize>
where
    R: repository::TeamWriter + repository::MemberWriter + ?Sized,
{
    use domain::member::NewMember;
    use domain::team::NewTeam;
    use domain::types::{Age, TeamName, Username};

    let team_a = repo.create_team(&NewTeam::new(TeamName::new("teamA")?))?;
    let team_b = repo.create_team(&NewTeam::new(TeamName::new("teamB")?))?;

    for i in 0..SAMPLE_MEMBER_COUNT {
        let team = if i % 2 == 0 { &team_a } else { &team_b };
        let new_member = NewMember::new(
            Username::new(format!("member{i}"))?,
            Age::new(i)?,
            Some(team.id),
        );
        repo.create_member(&new_member)?;
    }

    log::info!("Seeded {SAMPLE_MEMBER_COUNT} sample members into teamA and teamB");

    Ok(SAMPLE_MEMBER_COUNT as usize)
}
