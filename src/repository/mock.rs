//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::member::{Member, MemberSummary, MemberTeam, NewMember};
use crate::domain::search::MemberSearchCondition;
use crate::domain::team::{NewTeam, Team, TeamAgeStats};
use crate::domain::types::{Age, MemberId, TeamId, TeamName, Username};
use crate::pagination::{Page, PageRequest};
use crate::repository::errors::RepositoryResult;
use crate::repository::{MemberReader, MemberSearch, MemberWriter, TeamReader, TeamWriter};

mock! {
    pub Repository {}

    impl MemberReader for Repository {
        fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
        fn list_members(&self) -> RepositoryResult<Vec<Member>>;
        fn count_members(&self) -> RepositoryResult<usize>;
        fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>>;
    }

    impl MemberWriter for Repository {
        fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
        fn change_member_team(
            &self,
            member_id: MemberId,
            team_id: Option<TeamId>,
        ) -> RepositoryResult<Member>;
        fn delete_member(&self, member_id: MemberId) -> RepositoryResult<()>;
        fn add_age_to_all_members(&self, delta: i32) -> RepositoryResult<usize>;
        fn delete_members_older_than(&self, age: Age) -> RepositoryResult<usize>;
    }

    impl TeamReader for Repository {
        fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
        fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>>;
        fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
        fn list_team_age_stats(&self) -> RepositoryResult<Vec<TeamAgeStats>>;
    }

    impl TeamWriter for Repository {
        fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
    }

    impl MemberSearch for Repository {
        fn search_members(
            &self,
            condition: &MemberSearchCondition,
        ) -> RepositoryResult<Vec<MemberTeam>>;
        fn search_members_by_builder(
            &self,
            condition: &MemberSearchCondition,
        ) -> RepositoryResult<Vec<MemberTeam>>;
        fn search_member_summaries(
            &self,
            condition: &MemberSearchCondition,
        ) -> RepositoryResult<Vec<MemberSummary>>;
        fn search_members_page_simple(
            &self,
            condition: &MemberSearchCondition,
            page: PageRequest,
        ) -> RepositoryResult<Page<MemberTeam>>;
        fn search_members_page_optimized(
            &self,
            condition: &MemberSearchCondition,
            page: PageRequest,
        ) -> RepositoryResult<Page<MemberTeam>>;
    }
}
