mod diff;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git repository
    /// or the repository is bare.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let workdir = inner.workdir().ok_or_else(|| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        // Canonical so that joined change paths compare equal to a canonical workspace root
        let root = dunce::canonicalize(workdir)
            .unwrap_or_else(|_| dunce::simplified(workdir).to_path_buf());

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) fn setup_test_repo() -> anyhow::Result<(TempDir, Repository)> {
        let dir = TempDir::new()?;
        let repo = git2::Repository::init(dir.path())?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test")?;
        config.set_str("user.email", "test@example.com")?;

        let sig = git2::Signature::now("Test", "test@example.com")?;
        let tree_id = repo.index()?.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;

        let repository = Repository::open(dir.path())?;
        Ok((dir, repository))
    }

    /// Stages every change in the working tree, removals included, and commits it.
    pub(crate) fn commit_all(repo: &Repository, message: &str) -> anyhow::Result<()> {
        let mut index = repo.inner.index()?;
        index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
        index.update_all(["*"].iter(), None)?;
        index.write()?;

        let sig = git2::Signature::now("Test", "test@example.com")?;
        let tree_id = index.write_tree()?;
        let tree = repo.inner.find_tree(tree_id)?;
        let parent = repo.inner.head()?.peel_to_commit()?;
        repo.inner
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])?;

        Ok(())
    }

    #[test]
    fn open_repository() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        let expected = dir.path().canonicalize()?;
        let actual = repo.root().canonicalize()?;
        assert_eq!(actual, expected);
        Ok(())
    }

    #[test]
    fn open_from_nested_directory() -> anyhow::Result<()> {
        let (dir, _repo) = setup_test_repo()?;
        let nested = dir.path().join("scripts/login");
        std::fs::create_dir_all(&nested)?;

        let repo = Repository::open(&nested)?;

        assert_eq!(repo.root(), dir.path().canonicalize()?);
        Ok(())
    }

    #[test]
    fn open_nonexistent_repository() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let result = Repository::open(dir.path());
        assert!(matches!(result, Err(GitError::NotARepository { .. })));
    }
}
