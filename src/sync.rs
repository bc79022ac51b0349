//! Main workflow orchestration logic
//!
//! Runs the full resolve-and-sync lifecycle: submodule initialization under a
//! retry policy, registry construction, release classification against the
//! authority submodules, and the per-submodule checkout. Kept separate from
//! argument parsing so the workflow can be driven programmatically.

use std::thread;

use crate::config::Config;
use crate::error::{CheckoutError, Result};
use crate::git::{CommitInfo, Repository};
use crate::resolve::{self, Classification, Resolution};
use crate::retry::RetryPolicy;
use crate::ui;
use crate::workspace::Workspace;

/// One submodule's outcome: the ref it was pointed at and the commit found there
#[derive(Debug, Clone, PartialEq)]
pub struct SubmoduleReport {
    pub name: String,
    pub target: String,
    pub commit: CommitInfo,
}

/// Result of a successful resolve-and-sync run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// The release actually used (post-fallback value, if fallback occurred)
    pub effective_release: String,
    pub classification: Classification,
    pub entries: Vec<SubmoduleReport>,
}

/// Resolve a requested release and synchronize every submodule to it.
///
/// Steps: initialize submodules (retrying per `policy`), build the registry,
/// classify the request against the authority submodules, then check out the
/// computed target ref in each submodule and read back the resulting commit.
///
/// # Arguments
/// * `workspace` - The discovered top-level repository
/// * `requested` - Release identifier; the default branch name skips classification
/// * `config` - Remote, default branch, and designated submodule names
/// * `policy` - Retry policy for the initialization step
///
/// # Returns
/// * `Ok(RunReport)` - Effective release and one entry per submodule
/// * `Err` - On any failure other than retried initialization attempts
pub fn resolve_and_sync(
    workspace: &Workspace,
    requested: &str,
    config: &Config,
    policy: &RetryPolicy,
) -> Result<RunReport> {
    init_submodules(workspace, policy)?;

    let registry = workspace.submodules()?;

    let mut authorities = Vec::with_capacity(config.authorities.len());
    for name in &config.authorities {
        let handle = registry
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, repo)| repo)
            .ok_or_else(|| {
                CheckoutError::Submodule(format!(
                    "Authority submodule '{}' is not declared in this repository",
                    name
                ))
            })?;
        authorities.push(handle);
    }

    let resolution = resolve::classify(requested, &authorities, config)?;
    match resolution.classification {
        Classification::Branch => {
            ui::display_status(&format!("Found branch {} in submodules", requested));
        }
        Classification::FallbackToMaster => {
            ui::display_warning(&format!(
                "Provided release {} is not a valid tag or branch for both {}; using {} instead",
                requested,
                config.authorities.join(" and "),
                config.default_branch
            ));
        }
        _ => {}
    }

    let entries = apply_targets(&registry, &resolution, config)?;

    Ok(RunReport {
        effective_release: resolution.effective_release,
        classification: resolution.classification,
        entries,
    })
}

/// Check out the computed target ref in every registry entry, in order.
///
/// A ref that fails to resolve is fatal; submodules already applied stay at
/// their new state.
pub fn apply_targets<R: Repository>(
    registry: &[(String, R)],
    resolution: &Resolution,
    config: &Config,
) -> Result<Vec<SubmoduleReport>> {
    let mut entries = Vec::with_capacity(registry.len());

    for (name, repo) in registry {
        let target = resolve::target_ref(resolution, name, config);
        repo.checkout_detached(&target)?;
        let commit = repo.head_commit()?;
        ui::display_submodule(name, &target, &commit);
        entries.push(SubmoduleReport {
            name: name.clone(),
            target,
            commit,
        });
    }

    Ok(entries)
}

fn init_submodules(workspace: &Workspace, policy: &RetryPolicy) -> Result<()> {
    let mut attempt: u32 = 1;
    loop {
        match workspace.update_submodules() {
            Ok(()) => return Ok(()),
            Err(e) => {
                ui::display_warning(&format!(
                    "Submodule update failed (attempt {}): {}",
                    attempt, e
                ));
                attempt += 1;
                match policy.delay_before(attempt) {
                    Some(delay) => {
                        if !delay.is_zero() {
                            thread::sleep(delay);
                        }
                    }
                    None => {
                        return Err(CheckoutError::Submodule(format!(
                            "Submodule initialization failed after {} attempts",
                            attempt - 1
                        )))
                    }
                }
            }
        }
    }
}
