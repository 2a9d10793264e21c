use crate::common::command::{
    init_repository_dir, mini_git_commit, repository_dir, run_mini_git_command,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_metadata;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_replaces_the_working_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_mini_git_command(dir, &["branch", "feature"])
        .assert()
        .success();
    run_mini_git_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout("Switched to branch 'feature'\n");

    write_file(FileSpec::new(dir.join("b.txt"), "bee".into()));
    std::fs::remove_dir_all(dir.join("a"))?;
    run_mini_git_command(dir, &["add", "b.txt"]).assert().success();
    mini_git_commit(dir, "feature work").assert().success();

    run_mini_git_command(dir, &["checkout", "master"])
        .assert()
        .success();

    assert_eq!(read_metadata(dir, "HEAD"), "ref: refs/heads/master");
    assert!(!dir.join("b.txt").exists());
    assert_eq!(std::fs::read_to_string(dir.join("a/b/3.txt"))?, "three");
    run_mini_git_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("nothing to commit, working tree clean\n"));

    run_mini_git_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(dir.join("b.txt"))?, "bee");

    Ok(())
}

#[rstest]
fn checkout_removes_untracked_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("scratch/notes.txt"), "notes".into()));
    run_mini_git_command(dir, &["branch", "other"])
        .assert()
        .success();

    run_mini_git_command(dir, &["checkout", "other"])
        .assert()
        .success();

    assert!(!dir.join("scratch").exists());
    assert!(dir.join(".metadata/HEAD").is_file());

    Ok(())
}

#[rstest]
fn checkout_unknown_target_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(init_repository_dir.path(), &["checkout", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'nowhere' not found"));

    Ok(())
}

#[rstest]
fn checkout_unborn_branch_keeps_files(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_mini_git_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("draft.txt"), "draft".into()));
    run_mini_git_command(dir, &["branch", "early"])
        .assert()
        .success();

    run_mini_git_command(dir, &["checkout", "early"])
        .assert()
        .success();

    assert_eq!(read_metadata(dir, "HEAD"), "ref: refs/heads/early");
    assert!(dir.join("draft.txt").is_file());

    Ok(())
}
