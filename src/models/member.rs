//! Diesel models representing members and their read projections.

use diesel::prelude::*;

use crate::domain::member::{
    Member as DomainMember, MemberSummary as DomainMemberSummary,
    MemberTeam as DomainMemberTeam, NewMember as DomainNewMember,
};
use crate::domain::types::{Age, TypeConstraintError, Username};
use crate::models::team::Team;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::members)]
#[diesel(belongs_to(Team, foreign_key = team_id))]
/// Diesel model for [`crate::domain::member::Member`].
pub struct Member {
    pub id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
/// Insertable form of [`Member`].
pub struct NewMember<'a> {
    pub username: &'a str,
    pub age: i32,
    pub team_id: Option<i32>,
}

/// Row produced by `members LEFT JOIN teams`.
#[derive(Debug, Clone, Queryable)]
pub struct MemberTeam {
    pub member_id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Queryable)]
pub struct MemberSummary {
    pub username: String,
    pub age: i32,
}

impl TryFrom<Member> for DomainMember {
    type Error = TypeConstraintError;

    fn try_from(member: Member) -> Result<Self, Self::Error> {
        DomainMember::try_new(member.id, member.username, member.age, member.team_id)
    }
}

impl<'a> From<&'a DomainNewMember> for NewMember<'a> {
    fn from(member: &'a DomainNewMember) -> Self {
        Self {
            username: member.username.as_str(),
            age: member.age.get(),
            team_id: member.team_id.map(|id| id.get()),
        }
    }
}

impl TryFrom<MemberTeam> for DomainMemberTeam {
    type Error = TypeConstraintError;

    fn try_from(row: MemberTeam) -> Result<Self, Self::Error> {
        DomainMemberTeam::try_new(
            row.member_id,
            row.username,
            row.age,
            row.team_id,
            row.team_name,
        )
    }
}

impl TryFrom<MemberSummary> for DomainMemberSummary {
    type Error = TypeConstraintError;

    fn try_from(row: MemberSummary) -> Result<Self, Self::Error> {
        Ok(Self {
            username: Username::new(row.username)?,
            age: Age::new(row.age)?,
        })
    }
}
