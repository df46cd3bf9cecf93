//! Repository implementation for members.

use diesel::prelude::*;

use crate::{
    domain::{
        member::{Member, NewMember},
        types::{Age, MemberId, TeamId, Username},
    },
    models::member::{Member as DbMember, NewMember as DbNewMember},
    repository::{
        DieselRepository, MemberReader, MemberWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_domain(db_members: Vec<DbMember>) -> RepositoryResult<Vec<Member>> {
    db_members
        .into_iter()
        .map(|member| Member::try_from(member).map_err(RepositoryError::from))
        .collect()
}

impl MemberWriter for DieselRepository {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let db_new_member: DbNewMember = new_member.into();

        let db_member = diesel::insert_into(members::table)
            .values(&db_new_member)
            .get_result::<DbMember>(&mut conn)?;

        Ok(Member::try_from(db_member)?)
    }

    fn change_member_team(
        &self,
        member_id: MemberId,
        team_id: Option<TeamId>,
    ) -> RepositoryResult<Member> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let db_member = diesel::update(members::table.find(member_id.get()))
            .set(members::team_id.eq(team_id.map(TeamId::get)))
            .get_result::<DbMember>(&mut conn)?;

        Ok(Member::try_from(db_member)?)
    }

    fn delete_member(&self, member_id: MemberId) -> RepositoryResult<()> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(members::table.find(member_id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn add_age_to_all_members(&self, delta: i32) -> RepositoryResult<usize> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let affected = diesel::update(members::table)
            .set(members::age.eq(members::age + delta))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_members_older_than(&self, age: Age) -> RepositoryResult<usize> {
        use crate::schema::members;

        let mut conn = self.conn()?;

        let affected = diesel::delete(members::table.filter(members::age.gt(age.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}

impl MemberReader for DieselRepository {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let db_member = members::table
            .find(id.get())
            .first::<DbMember>(&mut conn)
            .optional()?;

        Ok(db_member.map(Member::try_from).transpose()?)
    }

    fn list_members(&self) -> RepositoryResult<Vec<Member>> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let db_members = members::table
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain(db_members)
    }

    fn count_members(&self) -> RepositoryResult<usize> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let total = members::table.count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }

    fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>> {
        use crate::schema::members;

        let mut conn = self.conn()?;
        let db_members = members::table
            .filter(members::username.eq(username.as_str()))
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain(db_members)
    }
}
