//! Test fixture for setting up temporary git repositories

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use git2::{Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

/// File both branches edit so that combining them conflicts
pub const CONFLICT_FILE: &str = "conflict.txt";

/// Test fixture that sets up a temporary git repository
pub struct TestFixture {
    /// Temporary directory containing the git repo
    _temp_dir: TempDir,
    /// Path to the git repository
    pub repo_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        // Canonicalize to handle symlinked temp dirs.
        let repo_path = temp_dir
            .path()
            .canonicalize()
            .unwrap_or_else(|_| temp_dir.path().to_path_buf());

        // Git's default branch is user-configurable, pin it.
        let mut init_opts = RepositoryInitOptions::new();
        init_opts.initial_head("master");
        let repo = Repository::init_opts(&repo_path, &init_opts)?;
        repo.set_head("refs/heads/master")?;

        // The git CLI commits during rebase and merge, give it an identity.
        let mut config = repo.config()?;
        config.set_str("user.name", "Test")?;
        config.set_str("user.email", "test@test.com")?;
        config.set_bool("commit.gpgsign", false)?;

        let sig = Signature::now("Test", "test@test.com")?;
        fs::write(repo_path.join("README.md"), "# Test Repository\n")?;

        let mut index = repo.index()?;
        index.add_path(Path::new("README.md"))?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;

        Ok(Self {
            _temp_dir: temp_dir,
            repo_path,
        })
    }

    /// Run git in the repository, returning its output whatever the exit code
    pub fn git(&self, args: &[&str]) -> Result<Output, Box<dyn std::error::Error>> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .env("GIT_EDITOR", "true")
            .output()?;
        Ok(output)
    }

    /// Run git in the repository and fail unless it succeeds
    pub fn git_ok(&self, args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
        let output = self.git(args)?;
        if !output.status.success() {
            return Err(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            )
            .into());
        }
        Ok(())
    }

    /// Write `contents` to `name` and commit it on the current branch
    pub fn commit_file(
        &self,
        name: &str,
        contents: &str,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(self.repo_path.join(name), contents)?;
        self.git_ok(&["add", name])?;
        self.git_ok(&["commit", "-q", "-m", message])
    }

    /// Create `feature` and `master` commits that edit the same line
    ///
    /// Leaves `master` checked out.
    pub fn diverge(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.git_ok(&["checkout", "-q", "-b", "feature"])?;
        self.commit_file(CONFLICT_FILE, "feature\n", "Feature change")?;
        self.git_ok(&["checkout", "-q", "master"])?;
        self.commit_file(CONFLICT_FILE, "master\n", "Master change")
    }

    /// Rebase `feature` onto `master` and stop on the conflict
    pub fn start_rebase(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.diverge()?;
        self.git_ok(&["checkout", "-q", "feature"])?;
        let output = self.git(&["rebase", "master"])?;
        if output.status.success() {
            return Err("rebase unexpectedly succeeded".into());
        }
        Ok(())
    }

    /// Rebase two conflicting `feature` commits onto `master`
    ///
    /// Stops on the first; resolving it leaves the second to conflict too.
    pub fn start_two_step_rebase(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.git_ok(&["checkout", "-q", "-b", "feature"])?;
        self.commit_file(CONFLICT_FILE, "feature one\n", "Feature change one")?;
        self.commit_file(CONFLICT_FILE, "feature two\n", "Feature change two")?;
        self.git_ok(&["checkout", "-q", "master"])?;
        self.commit_file(CONFLICT_FILE, "master\n", "Master change")?;
        self.git_ok(&["checkout", "-q", "feature"])?;
        let output = self.git(&["rebase", "master"])?;
        if output.status.success() {
            return Err("rebase unexpectedly succeeded".into());
        }
        Ok(())
    }

    /// Merge `feature` into `master` and stop on the conflict
    pub fn start_merge(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.diverge()?;
        let output = self.git(&["merge", "feature"])?;
        if output.status.success() {
            return Err("merge unexpectedly succeeded".into());
        }
        Ok(())
    }

    /// Settle the conflict and stage the result
    pub fn resolve(&self, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(self.repo_path.join(CONFLICT_FILE), contents)?;
        self.git_ok(&["add", CONFLICT_FILE])
    }

    /// Subject line of the HEAD commit
    pub fn head_subject(&self) -> Result<String, Box<dyn std::error::Error>> {
        let repo = Repository::open(&self.repo_path)?;
        let head = repo.head()?.peel_to_commit()?;
        Ok(head.summary().unwrap_or_default().to_string())
    }
}
