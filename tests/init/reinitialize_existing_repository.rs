use crate::common::command::{
    get_head_commit_sha, init_repository_dir, repository_dir, run_mini_git_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reinitialize_keeps_history_and_index(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head_before = get_head_commit_sha(init_repository_dir.path())?;
    let index_before = std::fs::read(init_repository_dir.path().join(".metadata/index"))?;

    run_mini_git_command(init_repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Reinitialized existing Mini Git repository in",
        ));

    assert_eq!(get_head_commit_sha(init_repository_dir.path())?, head_before);
    assert_eq!(
        std::fs::read(init_repository_dir.path().join(".metadata/index"))?,
        index_before
    );

    Ok(())
}

#[rstest]
fn commands_outside_a_repository_fail(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a mini-git repository"));

    Ok(())
}
