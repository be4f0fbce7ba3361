//! Single-pass reconciliation: orchestration and mutation loop.

use tracing::{debug, info};

use crate::error::SyncResult;
use crate::observer::{SyncEvent, SyncObserver};
use crate::plan::ReconcilePlan;
use crate::traits::{DirectorySource, GroupService};
use crate::types::{expected_members, AccessLevel, ActualMembers, ExpectedMembers, GroupHandle};

/// Counters from one applied reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Members removed from the group.
    pub removed: usize,
    /// Users added to the group.
    pub added: usize,
    /// Planned additions skipped because the user does not exist in the
    /// target system.
    pub skipped: usize,
}

/// Run one full reconciliation pass.
///
/// Fetches the expected membership from the directory and the actual
/// membership from the target group, diffs them (with the empty-intersection
/// guard), then applies all removals followed by all additions. Stateless:
/// both sets are recomputed from source-of-truth on every invocation.
///
/// # Errors
///
/// Propagates the guard error and any collaborator failure. Mutations
/// already issued before a failure remain in effect; there is no rollback
/// and no retry.
pub async fn run_sync(
    directory: &dyn DirectorySource,
    target: &dyn GroupService,
    group_id: &str,
    access_level: AccessLevel,
    observer: &dyn SyncObserver,
) -> SyncResult<SyncOutcome> {
    let accounts = directory.list_active_accounts().await?;
    let expected = expected_members(&accounts);
    debug!(
        accounts = accounts.len(),
        expected = expected.len(),
        "built expected membership from directory"
    );

    let group = target.get_group(group_id).await?;
    let members = target.list_all_members(&group).await?;
    let actual: ActualMembers = members.into_iter().map(|m| (m.username, m.id)).collect();
    debug!(group = %group.name, actual = actual.len(), "fetched current group membership");

    let plan = ReconcilePlan::compute(&expected, &actual)?;
    info!(
        group = %group.name,
        to_remove = plan.to_remove.len(),
        to_add = plan.to_add.len(),
        "computed reconciliation plan"
    );

    apply_plan(target, &group, &plan, &expected, &actual, access_level, observer).await
}

/// Apply a computed plan: all removals first, then all additions.
///
/// Each call is an independent, already-committed operation once issued; a
/// failure partway through leaves a partially reconciled group. A planned
/// addition whose username resolves to no target-system user is skipped
/// with a warning and the run continues; when the lookup returns several
/// users, the first match is used.
pub async fn apply_plan(
    target: &dyn GroupService,
    group: &GroupHandle,
    plan: &ReconcilePlan,
    expected: &ExpectedMembers,
    actual: &ActualMembers,
    access_level: AccessLevel,
    observer: &dyn SyncObserver,
) -> SyncResult<SyncOutcome> {
    let mut outcome = SyncOutcome::default();

    for username in &plan.to_remove {
        // Plan keys come from the actual set, so the lookup cannot miss.
        let Some(&member_id) = actual.get(username) else {
            continue;
        };
        target.remove_member(group, member_id).await?;
        observer.info(&SyncEvent::MemberRemoved {
            username: username.clone(),
            group: group.name.clone(),
        });
        outcome.removed += 1;
    }

    for username in &plan.to_add {
        let email = expected.get(username).cloned().unwrap_or_default();
        let matches = target.find_users_by_username(username).await?;
        let Some(user) = matches.first() else {
            observer.warning(&SyncEvent::UserNotFound {
                username: username.clone(),
                email,
            });
            outcome.skipped += 1;
            continue;
        };
        target.add_member(group, user.id, access_level).await?;
        observer.info(&SyncEvent::MemberAdded {
            username: username.clone(),
            group: group.name.clone(),
            email,
            access_level,
        });
        outcome.added += 1;
    }

    Ok(outcome)
}
