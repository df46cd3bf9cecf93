//! Filtered, optionally paginated member/team reads.

use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::{
    domain::{
        member::{MemberSummary, MemberTeam},
        search::MemberSearchCondition,
    },
    models::member::{MemberSummary as DbMemberSummary, MemberTeam as DbMemberTeam},
    pagination::{Page, PageRequest},
    repository::{
        DieselRepository, MemberSearch,
        errors::{RepositoryError, RepositoryResult},
        predicate::condition_predicate,
    },
    schema::{members, teams},
};

fn into_member_teams(rows: Vec<DbMemberTeam>) -> RepositoryResult<Vec<MemberTeam>> {
    rows.into_iter()
        .map(|row| MemberTeam::try_from(row).map_err(RepositoryError::from))
        .collect()
}

fn load_member_teams(
    conn: &mut SqliteConnection,
    condition: &MemberSearchCondition,
    page: Option<PageRequest>,
) -> RepositoryResult<Vec<MemberTeam>> {
    let mut query = members::table
        .left_join(teams::table)
        .select((
            members::id,
            members::username,
            members::age,
            teams::id.nullable(),
            teams::name.nullable(),
        ))
        .order(members::id.asc())
        .into_boxed::<Sqlite>();

    if let Some(predicate) = condition_predicate(condition) {
        query = query.filter(predicate);
    }

    if let Some(page) = page {
        query = query.offset(page.offset).limit(page.limit);
    }

    into_member_teams(query.load::<DbMemberTeam>(conn)?)
}

fn count_member_teams(
    conn: &mut SqliteConnection,
    condition: &MemberSearchCondition,
) -> RepositoryResult<usize> {
    let mut query = members::table
        .left_join(teams::table)
        .into_boxed::<Sqlite>();

    if let Some(predicate) = condition_predicate(condition) {
        query = query.filter(predicate);
    }

    let total = query.count().get_result::<i64>(conn)?;
    Ok(total as usize)
}

impl MemberSearch for DieselRepository {
    fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeam>> {
        let mut conn = self.conn()?;
        load_member_teams(&mut conn, condition, None)
    }

    fn search_members_by_builder(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeam>> {
        let mut conn = self.conn()?;

        let mut query = members::table
            .left_join(teams::table)
            .select((
                members::id,
                members::username,
                members::age,
                teams::id.nullable(),
                teams::name.nullable(),
            ))
            .order(members::id.asc())
            .into_boxed::<Sqlite>();

        if let Some(username) = condition.username_filter() {
            query = query.filter(members::username.eq(username.to_string()));
        }
        if let Some(team_name) = condition.team_name_filter() {
            query = query.filter(teams::name.eq(team_name.to_string()));
        }
        if let Some(age) = condition.age_goe {
            query = query.filter(members::age.ge(age));
        }
        if let Some(age) = condition.age_loe {
            query = query.filter(members::age.le(age));
        }

        into_member_teams(query.load::<DbMemberTeam>(&mut conn)?)
    }

    fn search_member_summaries(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberSummary>> {
        let mut conn = self.conn()?;

        let mut query = members::table
            .left_join(teams::table)
            .select((members::username, members::age))
            .order(members::id.asc())
            .into_boxed::<Sqlite>();

        if let Some(predicate) = condition_predicate(condition) {
            query = query.filter(predicate);
        }

        query
            .load::<DbMemberSummary>(&mut conn)?
            .into_iter()
            .map(|row| MemberSummary::try_from(row).map_err(RepositoryError::from))
            .collect()
    }

    fn search_members_page_simple(
        &self,
        condition: &MemberSearchCondition,
        page: PageRequest,
    ) -> RepositoryResult<Page<MemberTeam>> {
        page.validate()?;

        let mut conn = self.conn()?;
        // One read transaction keeps `content.len() <= total`.
        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total = count_member_teams(conn, condition)?;
            let content = load_member_teams(conn, condition, Some(page))?;

            Ok(Page::new(content, page, total))
        })
    }

    fn search_members_page_optimized(
        &self,
        condition: &MemberSearchCondition,
        page: PageRequest,
    ) -> RepositoryResult<Page<MemberTeam>> {
        page.validate()?;

        let mut conn = self.conn()?;
        conn.transaction::<_, RepositoryError, _>(|conn| {
            let content = load_member_teams(conn, condition, Some(page))?;

            Page::with_lazy_total(content, page, || count_member_teams(conn, condition))
        })
    }
}
