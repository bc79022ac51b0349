use crate::error::{CheckoutError, Result};
use crate::git::{CommitInfo, Repository};
use chrono::{Local, TimeZone};
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Vec<String>,
    branch_heads: HashMap<String, Vec<String>>,
    commits: HashMap<String, CommitInfo>,
    head: RefCell<Option<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            branch_heads: HashMap::new(),
            commits: HashMap::new(),
            head: RefCell::new(None),
        }
    }

    /// Add a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Add a branch head under a remote
    pub fn add_branch_head(&mut self, remote: impl Into<String>, branch: impl Into<String>) {
        self.branch_heads
            .entry(remote.into())
            .or_default()
            .push(branch.into());
    }

    /// Register the commit a ref resolves to; only registered refs can be
    /// checked out
    pub fn set_commit(&mut self, refname: impl Into<String>, info: CommitInfo) {
        self.commits.insert(refname.into(), info);
    }

    /// The ref most recently checked out, if any
    pub fn checked_out_ref(&self) -> Option<String> {
        self.head.borrow().clone()
    }

    /// Convenience commit descriptor for tests
    pub fn commit_info(hash: &str, summary: &str) -> CommitInfo {
        CommitInfo {
            hash: hash.to_string(),
            author: "Test Author".to_string(),
            summary: summary.to_string(),
            time: Local.timestamp_opt(1_700_000_000, 0).unwrap(),
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn remote_branch_heads(&self, remote: &str) -> Result<Vec<String>> {
        Ok(self.branch_heads.get(remote).cloned().unwrap_or_default())
    }

    fn checkout_detached(&self, refname: &str) -> Result<()> {
        if !self.commits.contains_key(refname) {
            return Err(CheckoutError::Ref(format!(
                "Cannot resolve ref '{}'",
                refname
            )));
        }
        *self.head.borrow_mut() = Some(refname.to_string());
        Ok(())
    }

    fn head_commit(&self) -> Result<CommitInfo> {
        let head = self.head.borrow();
        let refname = head
            .as_ref()
            .ok_or_else(|| CheckoutError::Ref("HEAD is unborn".to_string()))?;
        self.commits
            .get(refname)
            .cloned()
            .ok_or_else(|| CheckoutError::Ref(format!("No commit at '{}'", refname)))
    }
}
