//! Release classification and per-submodule target computation.
//!
//! A requested release is classified once, against the tag and branch sets of
//! the authority submodules, and the result is applied uniformly to every
//! submodule (with the pinned-submodule exception).

use crate::config::Config;
use crate::error::Result;
use crate::git::Repository;

/// How the requested release was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The default branch was requested; no lookup needed
    Master,
    /// The release is a tag in every authority submodule
    Tag,
    /// The release is a remote branch head in every authority submodule
    Branch,
    /// The release is neither; the run proceeds with the default branch
    FallbackToMaster,
}

/// Outcome of classification: the classification itself plus the release
/// value actually used for the rest of the run (post-fallback).
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub classification: Classification,
    pub effective_release: String,
}

/// Classify a requested release against the authority submodules.
///
/// The business rule is agreement: a release counts as a tag only if it is a
/// tag in *every* authority, and as a branch only if it is a remote branch
/// head in *every* authority. The two checks are independent; a release that
/// fails the tag check as a unit may still pass the branch check. Matching is
/// exact string equality, with no normalization.
///
/// # Arguments
/// * `requested` - The release identifier as given
/// * `authorities` - Handles for the designated authority submodules
/// * `config` - Supplies the remote name and default branch
///
/// # Returns
/// * `Ok(Resolution)` - Classification plus the effective release value
/// * `Err` - If a tag or branch listing fails
pub fn classify<R: Repository + ?Sized>(
    requested: &str,
    authorities: &[&R],
    config: &Config,
) -> Result<Resolution> {
    if requested == config.default_branch {
        return Ok(Resolution {
            classification: Classification::Master,
            effective_release: requested.to_string(),
        });
    }

    let mut is_tag = true;
    for authority in authorities {
        if !authority.list_tags()?.iter().any(|t| t == requested) {
            is_tag = false;
            break;
        }
    }
    if is_tag {
        return Ok(Resolution {
            classification: Classification::Tag,
            effective_release: requested.to_string(),
        });
    }

    let mut is_branch = true;
    for authority in authorities {
        if !authority
            .remote_branch_heads(&config.remote)?
            .iter()
            .any(|b| b == requested)
        {
            is_branch = false;
            break;
        }
    }
    if is_branch {
        return Ok(Resolution {
            classification: Classification::Branch,
            effective_release: requested.to_string(),
        });
    }

    Ok(Resolution {
        classification: Classification::FallbackToMaster,
        effective_release: config.default_branch.clone(),
    })
}

/// Compute the target reference for one submodule.
///
/// Pinned submodules, and every submodule when the effective release is the
/// default branch, resolve to the remote default-branch pointer. Otherwise
/// the classification picks between the tag ref and the remote branch ref.
pub fn target_ref(resolution: &Resolution, submodule_name: &str, config: &Config) -> String {
    let pinned = config.pinned.iter().any(|p| p == submodule_name);

    match resolution.classification {
        _ if pinned => config.default_branch_pointer(),
        Classification::Master | Classification::FallbackToMaster => {
            config.default_branch_pointer()
        }
        Classification::Tag => format!("refs/tags/{}", resolution.effective_release),
        Classification::Branch => {
            format!("{}/{}", config.remote, resolution.effective_release)
        }
    }
}
