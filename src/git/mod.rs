//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the per-submodule git
//! operations the resolver needs, allowing for a real implementation backed
//! by the `git2` crate and a mock implementation for testing.
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations:
//!
//! - [repository::Git2Repository]: the real implementation using `git2`
//! - [mock::MockRepository]: an in-memory implementation for tests

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use chrono::{DateTime, Local};

/// Commit read back from a submodule HEAD after checkout, for reporting
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// Full commit hash
    pub hash: String,
    /// Author display name
    pub author: String,
    /// One-line message summary
    pub summary: String,
    /// Commit timestamp in local time
    pub time: DateTime<Local>,
}

/// Per-submodule git operations used by release resolution and checkout.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]; implementations map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::CheckoutError] variants.
pub trait Repository {
    /// List all tag names in the repository.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, order unspecified
    /// * `Err` - If there's a git error
    fn list_tags(&self) -> Result<Vec<String>>;

    /// List the branch heads known for a remote.
    ///
    /// Returns branch names with the remote prefix stripped (e.g. "master",
    /// not "origin/master"). The remote's HEAD pointer is excluded.
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Branch head names for that remote
    /// * `Err` - If there's a git error
    fn remote_branch_heads(&self, remote: &str) -> Result<Vec<String>>;

    /// Point HEAD at `refname` (detached) and hard-reset index and working
    /// tree to match it.
    ///
    /// Local modifications and divergent staged state are discarded;
    /// untracked files are left alone.
    ///
    /// # Arguments
    /// * `refname` - A revparse-able ref, e.g. "origin/master",
    ///   "refs/tags/v10.8.0", or "origin/feature/x"
    ///
    /// # Returns
    /// * `Ok(())` - HEAD and working tree now match `refname`
    /// * `Err` - If the ref cannot be resolved or the reset fails
    fn checkout_detached(&self, refname: &str) -> Result<()>;

    /// Read back the commit HEAD currently points at.
    ///
    /// # Returns
    /// * `Ok(CommitInfo)` - Hash, author, summary, and timestamp of HEAD
    /// * `Err` - If HEAD cannot be resolved to a commit
    fn head_commit(&self) -> Result<CommitInfo>;
}
