//! Shared fixtures for integration tests.
#![allow(dead_code)]

use diesel::Connection;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use member_query::db::{ConnectionOptions, DbPool, establish_connection_pool_with};
use member_query::domain::member::{Member, NewMember};
use member_query::domain::team::{NewTeam, Team};
use member_query::domain::types::{Age, TeamName, Username};
use member_query::repository::{DieselRepository, MemberWriter, TeamWriter};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let mut conn = SqliteConnection::establish(&url).expect("open test database");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        let pool = establish_connection_pool_with(
            &url,
            ConnectionOptions {
                enable_wal: false,
                ..ConnectionOptions::default()
            },
        )
        .expect("build pool");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub fn create_team(repo: &DieselRepository, name: &str) -> Team {
    repo.create_team(&NewTeam::new(TeamName::new(name).expect("valid team name")))
        .expect("create team")
}

pub fn create_member(repo: &DieselRepository, name: &str, age: i32, team: Option<&Team>) -> Member {
    repo.create_member(&NewMember::new(
        Username::new(name).expect("valid username"),
        Age::new(age).expect("valid age"),
        team.map(|team| team.id),
    ))
    .expect("create member")
}

/// teamA holds member1 (10) and member2 (20); teamB holds member3 (30) and
/// member4 (40).
pub fn seed_two_teams(repo: &DieselRepository) -> (Team, Team) {
    let team_a = create_team(repo, "teamA");
    let team_b = create_team(repo, "teamB");

    create_member(repo, "member1", 10, Some(&team_a));
    create_member(repo, "member2", 20, Some(&team_a));
    create_member(repo, "member3", 30, Some(&team_b));
    create_member(repo, "member4", 40, Some(&team_b));

    (team_a, team_b)
}
