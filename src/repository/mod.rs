use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        member::{Member, MemberSummary, MemberTeam, NewMember},
        search::MemberSearchCondition,
        team::{NewTeam, Team, TeamAgeStats},
        types::{Age, MemberId, TeamId, TeamName, Username},
    },
    pagination::{Page, PageRequest},
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod member;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod predicate;
pub mod search;
pub mod team;

/// Diesel backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait MemberReader {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
    fn list_members(&self) -> RepositoryResult<Vec<Member>>;
    fn count_members(&self) -> RepositoryResult<usize>;
    fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>>;
}

pub trait MemberWriter {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
    fn change_member_team(
        &self,
        member_id: MemberId,
        team_id: Option<TeamId>,
    ) -> RepositoryResult<Member>;
    fn delete_member(&self, member_id: MemberId) -> RepositoryResult<()>;
    /// Bulk update adding `delta` years to every member; returns affected rows.
    fn add_age_to_all_members(&self, delta: i32) -> RepositoryResult<usize>;
    /// Bulk delete of members strictly older than `age`; returns affected rows.
    fn delete_members_older_than(&self, age: Age) -> RepositoryResult<usize>;
}

pub trait TeamReader {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
    fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>>;
    fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
    fn list_team_age_stats(&self) -> RepositoryResult<Vec<TeamAgeStats>>;
}

pub trait TeamWriter {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
}

/// Filtered reads over members joined with their teams.
///
/// Results are ordered by member id. Page requests are validated before the
/// store is touched.
pub trait MemberSearch {
    fn search_members(&self, condition: &MemberSearchCondition)
    -> RepositoryResult<Vec<MemberTeam>>;
    fn search_members_by_builder(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeam>>;
    fn search_member_summaries(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberSummary>>;
    /// Runs the content query and the count query unconditionally.
    fn search_members_page_simple(
        &self,
        condition: &MemberSearchCondition,
        page: PageRequest,
    ) -> RepositoryResult<Page<MemberTeam>>;
    /// Runs the count query only when the content does not settle the total.
    fn search_members_page_optimized(
        &self,
        condition: &MemberSearchCondition,
        page: PageRequest,
    ) -> RepositoryResult<Page<MemberTeam>>;
}
