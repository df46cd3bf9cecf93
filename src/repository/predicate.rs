//! Composable filters over the `members LEFT JOIN teams` query source.
//!
//! Each builder returns `None` when its input does not constrain the search,
//! so callers can list every filter unconditionally and let [`all_of`] drop
//! the absent ones. The same predicates back every projection of the join.

use diesel::helper_types::LeftJoinQuerySource;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable};
use diesel::sqlite::Sqlite;

use crate::domain::search::{MemberSearchCondition, has_text};
use crate::schema::{members, teams};

/// Query source every member search runs against.
pub type MemberTeamSource = LeftJoinQuerySource<members::table, teams::table>;

/// Boolean filter on a member/team row.
///
/// Nullable because team columns are `NULL` for members without a team.
pub type MemberPredicate =
    Box<dyn BoxableExpression<MemberTeamSource, Sqlite, SqlType = Nullable<Bool>>>;

pub fn username_eq(username: Option<&str>) -> Option<MemberPredicate> {
    has_text(username).map(|username| -> MemberPredicate {
        Box::new(members::username.nullable().eq(username.to_string()))
    })
}

pub fn team_name_eq(team_name: Option<&str>) -> Option<MemberPredicate> {
    has_text(team_name).map(|team_name| -> MemberPredicate {
        Box::new(teams::name.nullable().eq(team_name.to_string()))
    })
}

pub fn age_goe(age: Option<i32>) -> Option<MemberPredicate> {
    age.map(|age| -> MemberPredicate { Box::new(members::age.nullable().ge(age)) })
}

pub fn age_loe(age: Option<i32>) -> Option<MemberPredicate> {
    age.map(|age| -> MemberPredicate { Box::new(members::age.nullable().le(age)) })
}

/// Inclusive age range; either bound may be missing.
pub fn age_between(goe: Option<i32>, loe: Option<i32>) -> Option<MemberPredicate> {
    all_of([age_goe(goe), age_loe(loe)])
}

/// ANDs every present predicate. `None` means "match every row".
pub fn all_of<I>(predicates: I) -> Option<MemberPredicate>
where
    I: IntoIterator<Item = Option<MemberPredicate>>,
{
    predicates
        .into_iter()
        .flatten()
        .reduce(|acc, next| -> MemberPredicate { Box::new(acc.and(next)) })
}

/// Full filter for a search condition.
pub fn condition_predicate(condition: &MemberSearchCondition) -> Option<MemberPredicate> {
    all_of([
        username_eq(condition.username.as_deref()),
        team_name_eq(condition.team_name.as_deref()),
        age_between(condition.age_goe, condition.age_loe),
    ])
}
