//! Repository implementation for teams.

use diesel::dsl::{count, sum};
use diesel::prelude::*;

use crate::{
    domain::{
        team::{NewTeam, Team, TeamAgeStats},
        types::{TeamId, TeamName},
    },
    models::team::{NewTeam as DbNewTeam, Team as DbTeam},
    repository::{
        DieselRepository, TeamReader, TeamWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl TeamWriter for DieselRepository {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team> {
        use crate::schema::teams;

        let mut conn = self.conn()?;

        let db_new_team: DbNewTeam = new_team.into();

        let db_team = diesel::insert_into(teams::table)
            .values(&db_new_team)
            .get_result::<DbTeam>(&mut conn)?;

        Ok(Team::try_from(db_team)?)
    }
}

impl TeamReader for DieselRepository {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>> {
        use crate::schema::teams;

        let mut conn = self.conn()?;
        let db_team = teams::table
            .find(id.get())
            .first::<DbTeam>(&mut conn)
            .optional()?;

        Ok(db_team.map(Team::try_from).transpose()?)
    }

    fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>> {
        use crate::schema::teams;

        let mut conn = self.conn()?;
        let db_team = teams::table
            .filter(teams::name.eq(name.as_str()))
            .first::<DbTeam>(&mut conn)
            .optional()?;

        Ok(db_team.map(Team::try_from).transpose()?)
    }

    fn list_teams(&self) -> RepositoryResult<Vec<Team>> {
        use crate::schema::teams;

        let mut conn = self.conn()?;
        teams::table
            .order(teams::id.asc())
            .load::<DbTeam>(&mut conn)?
            .into_iter()
            .map(|team| Team::try_from(team).map_err(RepositoryError::from))
            .collect()
    }

    fn list_team_age_stats(&self) -> RepositoryResult<Vec<TeamAgeStats>> {
        use crate::schema::{members, teams};

        let mut conn = self.conn()?;
        let rows = teams::table
            .inner_join(members::table)
            .group_by(teams::name)
            .select((teams::name, count(members::id), sum(members::age)))
            .order(teams::name.asc())
            .load::<(String, i64, Option<i64>)>(&mut conn)?;

        rows.into_iter()
            .map(|(name, member_count, age_sum)| -> RepositoryResult<TeamAgeStats> {
                let average_age = if member_count > 0 {
                    age_sum.unwrap_or_default() as f64 / member_count as f64
                } else {
                    0.0
                };
                Ok(TeamAgeStats {
                    team_name: TeamName::new(name)?,
                    member_count: member_count as usize,
                    average_age,
                })
            })
            .collect()
    }
}
