use crate::error::{CheckoutError, Result};
use crate::git::Git2Repository;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// The top-level repository whose submodules get synchronized.
///
/// Wraps the parent `git2::Repository` and exposes the three things the run
/// needs from it: submodule initialization, the name-to-handle registry, and
/// the working-tree root.
pub struct Workspace {
    repo: Git2Repo,
}

impl Workspace {
    /// Discover the enclosing repository from the current working directory.
    ///
    /// # Returns
    /// * `Ok(Workspace)` - The top-level repository
    /// * `Err` - If the current directory is not inside a git working tree
    pub fn discover() -> Result<Self> {
        Self::discover_from(".")
    }

    /// Discover the enclosing repository from a given directory.
    pub fn discover_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        Ok(Workspace { repo })
    }

    /// Absolute path of the repository's working-tree root.
    pub fn root(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| {
                CheckoutError::submodule("repository is bare and has no working tree")
            })
    }

    /// One attempt at a recursive init+update of all submodules.
    ///
    /// Clones any submodule that is missing, checks out the recorded commit,
    /// and recurses into nested submodules. Retrying on failure is the
    /// caller's concern; see [crate::retry::RetryPolicy].
    pub fn update_submodules(&self) -> Result<()> {
        update_recursive(&self.repo)
    }

    /// Build the submodule registry: declared name paired with an opened
    /// working-tree handle, in declaration order.
    ///
    /// # Returns
    /// * `Ok(entries)` - One entry per declared submodule
    /// * `Err` - If a submodule cannot be opened (e.g. not yet initialized)
    pub fn submodules(&self) -> Result<Vec<(String, Git2Repository)>> {
        let mut registry = Vec::new();

        for submodule in self.repo.submodules()? {
            let name = submodule
                .name()
                .ok_or_else(|| CheckoutError::submodule("submodule name is not valid UTF-8"))?
                .to_string();

            let child = submodule.open().map_err(|e| {
                CheckoutError::Submodule(format!("Cannot open submodule '{}': {}", name, e))
            })?;

            registry.push((name, Git2Repository::from_git2(child)));
        }

        Ok(registry)
    }
}

fn update_recursive(repo: &Git2Repo) -> Result<()> {
    for mut submodule in repo.submodules()? {
        submodule.update(true, None)?;
        let child = submodule.open()?;
        update_recursive(&child)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_outside_repo_fails() {
        let temp_dir = TempDir::new().expect("Could not create temp dir");
        let result = Workspace::discover_from(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_and_empty_registry() {
        let temp_dir = TempDir::new().expect("Could not create temp dir");
        Git2Repo::init(temp_dir.path()).expect("Could not init git repo");

        let workspace = Workspace::discover_from(temp_dir.path()).unwrap();
        assert!(workspace.submodules().unwrap().is_empty());
        // No submodules declared, so one update attempt succeeds trivially
        workspace.update_submodules().unwrap();
    }

    #[test]
    fn test_root_is_absolute() {
        let temp_dir = TempDir::new().expect("Could not create temp dir");
        Git2Repo::init(temp_dir.path()).expect("Could not init git repo");

        let workspace = Workspace::discover_from(temp_dir.path()).unwrap();
        assert!(workspace.root().unwrap().is_absolute());
    }
}
