use member_query::domain::types::{Age, MemberId, TeamName, Username};
use member_query::repository::errors::RepositoryError;
use member_query::repository::{MemberReader, MemberWriter, TeamReader};
use member_query::seed_sample_data;

mod common;

#[test]
fn test_member_repository_crud() {
    let test_db = common::TestDb::new("test_member_repository_crud.db");
    let repo = test_db.repo();

    let member = common::create_member(&repo, "member1", 10, None);

    let found = repo
        .get_member_by_id(member.id)
        .unwrap()
        .expect("member should exist");
    assert_eq!(found.id, member.id);
    assert_eq!(found.username, member.username);

    assert_eq!(repo.list_members().unwrap(), vec![member.clone()]);

    let by_name = repo
        .list_members_by_username(&Username::new("member1").unwrap())
        .unwrap();
    assert_eq!(by_name, vec![member.clone()]);

    repo.delete_member(member.id).unwrap();
    assert!(repo.get_member_by_id(member.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_member(member.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_missing_member_is_none() {
    let test_db = common::TestDb::new("test_missing_member_is_none.db");
    let repo = test_db.repo();

    let missing = repo.get_member_by_id(MemberId::new(999).unwrap()).unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_team_repository_and_membership() {
    let test_db = common::TestDb::new("test_team_repository_and_membership.db");
    let repo = test_db.repo();

    let team_a = common::create_team(&repo, "teamA");
    let team_b = common::create_team(&repo, "teamB");

    assert_eq!(repo.get_team_by_id(team_a.id).unwrap(), Some(team_a.clone()));
    assert_eq!(
        repo.get_team_by_name(&TeamName::new("teamB").unwrap())
            .unwrap(),
        Some(team_b.clone())
    );
    assert!(
        repo.get_team_by_name(&TeamName::new("teamC").unwrap())
            .unwrap()
            .is_none()
    );
    assert_eq!(repo.list_teams().unwrap(), vec![team_a.clone(), team_b.clone()]);

    let member = common::create_member(&repo, "member1", 10, Some(&team_a));
    assert_eq!(member.team_id, Some(team_a.id));

    let moved = repo.change_member_team(member.id, Some(team_b.id)).unwrap();
    assert_eq!(moved.team_id, Some(team_b.id));

    let left = repo.change_member_team(member.id, None).unwrap();
    assert_eq!(left.team_id, None);
}

#[test]
fn test_duplicate_team_name_is_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_team_name.db");
    let repo = test_db.repo();

    common::create_team(&repo, "teamA");
    let result = member_query::repository::TeamWriter::create_team(
        &repo,
        &member_query::domain::team::NewTeam::new(TeamName::new("teamA").unwrap()),
    );

    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[test]
fn test_team_age_stats() {
    let test_db = common::TestDb::new("test_team_age_stats.db");
    let repo = test_db.repo();
    common::seed_two_teams(&repo);
    common::create_member(&repo, "loner", 99, None);

    let stats = repo.list_team_age_stats().unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].team_name.as_str(), "teamA");
    assert_eq!(stats[0].member_count, 2);
    assert_eq!(stats[0].average_age, 15.0);
    assert_eq!(stats[1].team_name.as_str(), "teamB");
    assert_eq!(stats[1].average_age, 35.0);
}

#[test]
fn test_bulk_update_and_delete() {
    let test_db = common::TestDb::new("test_bulk_update_and_delete.db");
    let repo = test_db.repo();
    common::seed_two_teams(&repo);

    assert_eq!(repo.add_age_to_all_members(1).unwrap(), 4);
    let ages: Vec<i32> = repo
        .list_members()
        .unwrap()
        .into_iter()
        .map(|m| m.age.get())
        .collect();
    assert_eq!(ages, vec![11, 21, 31, 41]);

    assert_eq!(
        repo.delete_members_older_than(Age::new(18).unwrap())
            .unwrap(),
        3
    );
    let remaining = repo.list_members().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].username.as_str(), "member1");
}

#[test]
fn test_seed_sample_data() {
    let test_db = common::TestDb::new("test_seed_sample_data.db");
    let repo = test_db.repo();

    assert_eq!(repo.count_members().unwrap(), 0);

    let seeded = seed_sample_data(&repo).unwrap();

    assert_eq!(seeded, 100);
    let members = repo.list_members().unwrap();
    assert_eq!(members.len(), 100);
    assert_eq!(repo.count_members().unwrap(), 100);
    assert_eq!(members[0].username.as_str(), "member0");
    assert_ne!(members[0].team_id, members[1].team_id);
}
