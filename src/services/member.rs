//! Services handling member registration and searches.

use serde::Deserialize;

use crate::domain::member::{Member, MemberTeam};
use crate::domain::search::MemberSearchCondition;
use crate::forms::member::{AddMemberForm, AddMemberPayload};
use crate::pagination::{Page, PageRequest};
use crate::repository::{MemberSearch, MemberWriter, TeamReader};
use crate::services::{ServiceError, ServiceResult};

/// How the total of a paged search is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountStrategy {
    /// Always issue the count query.
    Always,
    /// Skip the count query when the page proves the total.
    #[default]
    Lazy,
}

/// Validates the form, resolves the team by name and persists the member.
pub fn register_member<R>(repo: &R, form: AddMemberForm) -> ServiceResult<Member>
where
    R: MemberWriter + TeamReader + ?Sized,
{
    let payload = AddMemberPayload::try_from(form)?;

    let team_id = match &payload.team_name {
        Some(team_name) => match repo.get_team_by_name(team_name)? {
            Some(team) => Some(team.id),
            None => {
                log::warn!("Cannot register member into unknown team {team_name}");
                return Err(ServiceError::NotFound);
            }
        },
        None => None,
    };

    let new_member = payload.into_domain(team_id);

    Ok(repo.create_member(&new_member)?)
}

/// Returns every member matching the condition.
pub fn search_members<R>(
    repo: &R,
    condition: &MemberSearchCondition,
) -> ServiceResult<Vec<MemberTeam>>
where
    R: MemberSearch + ?Sized,
{
    if condition.is_unbounded() {
        log::warn!("Unbounded member search requested; returning every member");
    }

    repo.search_members(condition).map_err(|err| {
        log::error!("Failed to search members: {err}");
        ServiceError::from(err)
    })
}

/// Loads one page of members using the requested count strategy.
pub fn search_members_page<R>(
    repo: &R,
    condition: &MemberSearchCondition,
    page: usize,
    size: usize,
    strategy: CountStrategy,
) -> ServiceResult<Page<MemberTeam>>
where
    R: MemberSearch + ?Sized,
{
    let request = PageRequest::of(page, size).map_err(|err| {
        log::warn!("Rejected member page request: {err}");
        ServiceError::InvalidArgument(err.to_string())
    })?;

    let result = match strategy {
        CountStrategy::Always => repo.search_members_page_simple(condition, request),
        CountStrategy::Lazy => repo.search_members_page_optimized(condition, request),
    };

    result.map_err(|err| {
        log::error!("Failed to load member page {page}: {err}");
        ServiceError::from(err)
    })
}
