use crate::common::command::{
    get_head_commit_sha, mini_git_commit, repository_dir, run_mini_git_command,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_metadata;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn fast_forward_unborn_master(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_mini_git_command(dir, &["init"]).assert().success();
    run_mini_git_command(dir, &["branch", "feature"])
        .assert()
        .success();
    run_mini_git_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("f.txt"), "feature".into()));
    run_mini_git_command(dir, &["add", "f.txt"]).assert().success();
    mini_git_commit(dir, "feature work").assert().success();
    let feature_tip = get_head_commit_sha(dir)?;
    run_mini_git_command(dir, &["checkout", "master"])
        .assert()
        .success();
    assert_eq!(read_metadata(dir, "refs/heads/master"), "");

    run_mini_git_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout("Fast-forward merge successful. feature merged into master.\n");

    assert_eq!(read_metadata(dir, "refs/heads/master"), feature_tip);
    assert_eq!(read_metadata(dir, "HEAD"), "ref: refs/heads/master");
    run_mini_git_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicates::str::contains("nothing to commit"));

    Ok(())
}

#[rstest]
fn merge_unborn_branch_into_master_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_mini_git_command(dir, &["init"]).assert().success();
    run_mini_git_command(dir, &["branch", "empty"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("a.txt"), "a".into()));
    run_mini_git_command(dir, &["add", "a.txt"]).assert().success();
    mini_git_commit(dir, "first").assert().success();
    let master_tip = get_head_commit_sha(dir)?;

    run_mini_git_command(dir, &["merge", "empty"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("an unborn branch"));

    assert_eq!(read_metadata(dir, "refs/heads/master"), master_tip);

    Ok(())
}
