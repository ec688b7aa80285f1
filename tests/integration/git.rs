//! Repository inspection and the git CLI backend

use mergepilot::WorkingTreeState;
use mergepilot::git::{self, Cli};
use mergepilot::merge::{CommandOutcome, GitBackend, RecoveryDecision, classify};
use pretty_assertions::assert_eq;

use crate::common::fixture::CONFLICT_FILE;
use crate::common::{TestFixture, git_available};

#[test]
fn test_clean_repository_is_idle() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;

    assert_eq!(
        git::working_tree_state(&fixture.repo_path)?,
        WorkingTreeState::None
    );
    assert!(git::list_files(&fixture.repo_path)?.is_empty());
    Ok(())
}

#[test]
fn test_conflicted_rebase_is_detected() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    fixture.start_rebase()?;

    assert_eq!(
        git::working_tree_state(&fixture.repo_path)?,
        WorkingTreeState::Rebasing
    );

    let files = git::list_files(&fixture.repo_path)?;
    let conflicted: Vec<&str> = files
        .iter()
        .filter(|file| file.conflicted)
        .map(|file| file.path.as_str())
        .collect();
    assert_eq!(conflicted, vec![CONFLICT_FILE]);
    Ok(())
}

#[test]
fn test_conflicted_merge_is_detected() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    fixture.start_merge()?;

    assert_eq!(
        git::working_tree_state(&fixture.repo_path)?,
        WorkingTreeState::Merging
    );
    Ok(())
}

#[test]
fn test_state_is_detected_from_subdirectory() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    fixture.start_merge()?;
    let nested = fixture.repo_path.join("nested");
    std::fs::create_dir(&nested)?;

    let cli = Cli::open(&nested, vec!["git".to_string()])?;

    assert_eq!(cli.root(), fixture.repo_path.as_path());
    assert_eq!(cli.working_tree_state()?, WorkingTreeState::Merging);
    Ok(())
}

#[test]
fn test_no_rebase_in_progress_means_already_done() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    let cli = Cli::open(&fixture.repo_path, vec!["git".to_string()])?;

    let outcome = cli.invoke("rebase", "--continue")?;

    assert!(matches!(outcome, CommandOutcome::Failure(_)));
    assert_eq!(classify(&outcome), RecoveryDecision::AlreadyDone);
    Ok(())
}

#[test]
fn test_invoke_reports_success() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    fixture.start_rebase()?;
    let cli = Cli::open(&fixture.repo_path, vec!["git".to_string()])?;

    assert_eq!(cli.invoke("rebase", "--abort")?, CommandOutcome::Success);
    assert_eq!(cli.working_tree_state()?, WorkingTreeState::None);
    Ok(())
}

#[test]
fn test_leading_program_arguments_are_kept() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }
    let fixture = TestFixture::new()?;
    fixture.start_merge()?;
    let program = vec!["git".to_string(), "-c".to_string(), "core.pager=cat".to_string()];
    let cli = Cli::open(&fixture.repo_path, program)?;

    let sub = cli
        .prepare_subprocess("merge", "--continue")
        .ok_or("no subprocess")?;

    assert_eq!(
        sub.argv(),
        vec!["git", "-c", "core.pager=cat", "merge", "--continue"]
    );
    assert_eq!(sub.cwd, fixture.repo_path);

    assert_eq!(cli.invoke("merge", "--abort")?, CommandOutcome::Success);
    assert_eq!(cli.working_tree_state()?, WorkingTreeState::None);
    Ok(())
}

#[test]
fn test_open_outside_repository_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::TempDir::new()?;

    assert!(Cli::open(dir.path(), vec!["git".to_string()]).is_err());
    Ok(())
}
