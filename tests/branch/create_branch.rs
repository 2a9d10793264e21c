use crate::common::command::{
    get_head_commit_sha, init_repository_dir, repository_dir, run_mini_git_command,
};
use crate::common::read_metadata;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("feature")]
#[case("feature/login")]
#[case("release-1.0")]
#[case("fix_123")]
fn create_branch_with_valid_name(
    init_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let head = get_head_commit_sha(init_repository_dir.path())?;

    run_mini_git_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .success()
        .stdout(format!("Created branch '{name}'\n"));

    assert_eq!(
        read_metadata(init_repository_dir.path(), &format!("refs/heads/{name}")),
        head
    );

    Ok(())
}

#[rstest]
#[case("bad name")]
#[case("..")]
#[case("name.lock")]
#[case("trailing/")]
#[case("with~tilde")]
#[case("HEAD")]
fn create_branch_with_invalid_name(
    init_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid branch name"));

    Ok(())
}

#[rstest]
fn create_duplicate_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(init_repository_dir.path(), &["branch", "topic"])
        .assert()
        .success();

    run_mini_git_command(init_repository_dir.path(), &["branch", "topic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a branch named 'topic' already exists"));

    Ok(())
}

#[rstest]
fn create_branch_without_commits(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_mini_git_command(repository_dir.path(), &["branch", "early"])
        .assert()
        .success();

    assert_eq!(read_metadata(repository_dir.path(), "refs/heads/early"), "");

    Ok(())
}
