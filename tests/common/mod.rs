//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use git2::{Commit, Repository, Signature};
use tempfile::TempDir;

/// A real git repository in a temporary directory.
pub struct TestRepo {
    dir: TempDir,
    repo: Repository,
}

impl TestRepo {
    /// Create a repository with one commit.
    pub fn new() -> Self {
        let repo = Self::empty();
        repo.commit_file("README.md", "# Test Repo\n", "Initial commit");
        repo
    }

    /// Create a repository with no commits.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let repo = Repository::init(dir.path()).expect("failed to init repo");
        {
            let mut config = repo.config().expect("failed to open repo config");
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        Self { dir, repo }
    }

    /// Get the path to the repository.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, stage it and commit on HEAD.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> git2::Oid {
        fs::write(self.path().join(name), content).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        let tree = self.repo.find_tree(index.write_tree().unwrap()).unwrap();

        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let parents: Vec<Commit> = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<&Commit> = parents.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    /// Branch HEAD points at (works for unborn branches too).
    pub fn head_branch(&self) -> String {
        let head = self.repo.find_reference("HEAD").unwrap();
        let target = head.symbolic_target().expect("HEAD is detached");
        target.trim_start_matches("refs/heads/").to_string()
    }

    /// Commit id HEAD resolves to.
    pub fn head_oid(&self) -> git2::Oid {
        self.repo.head().unwrap().peel_to_commit().unwrap().id()
    }

    /// Check whether a local branch exists.
    pub fn has_branch(&self, name: &str) -> bool {
        self.repo.find_branch(name, git2::BranchType::Local).is_ok()
    }

    /// Commit id a local branch points at.
    pub fn branch_oid(&self, name: &str) -> git2::Oid {
        self.repo
            .find_branch(name, git2::BranchType::Local)
            .unwrap()
            .get()
            .peel_to_commit()
            .unwrap()
            .id()
    }

    /// Create a branch at HEAD without switching.
    pub fn create_branch(&self, name: &str) {
        let commit = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.branch(name, &commit, false).unwrap();
    }

    /// Detach HEAD at its current commit.
    pub fn detach_head(&self) {
        let oid = self.head_oid();
        self.repo.set_head_detached(oid).unwrap();
    }
}
