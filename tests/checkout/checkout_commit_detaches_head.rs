use crate::common::command::{
    get_head_commit_sha, mini_git_commit, repository_with_multiple_commits, run_mini_git_command,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_metadata;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parent_of(dir: &std::path::Path, oid: &str) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_mini_git_command(dir, &["cat-file", "-p", oid])
        .assert()
        .success();
    let commit = String::from_utf8(output.get_output().stdout.clone())?;

    commit
        .lines()
        .find_map(|line| line.strip_prefix("parent "))
        .map(str::to_string)
        .ok_or_else(|| "no parent".into())
}

#[rstest]
fn checkout_abbreviated_commit_detaches_head(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_multiple_commits.path();
    let tip = get_head_commit_sha(dir)?;
    let middle = parent_of(dir, &tip)?;

    run_mini_git_command(dir, &["checkout", &middle[..8]])
        .assert()
        .success()
        .stdout(format!("HEAD is now at {}\n", &middle[..7]));

    assert_eq!(read_metadata(dir, "HEAD"), middle);
    assert_eq!(read_metadata(dir, "refs/heads/master"), tip);
    assert!(dir.join("file2.txt").is_file());
    assert!(!dir.join("file3.txt").exists());

    Ok(())
}

#[rstest]
fn commit_on_detached_head_moves_only_head(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_multiple_commits.path();
    let tip = get_head_commit_sha(dir)?;
    let middle = parent_of(dir, &tip)?;
    run_mini_git_command(dir, &["checkout", &middle])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("side.txt"), "side".into()));
    run_mini_git_command(dir, &["add", "side.txt"])
        .assert()
        .success();
    mini_git_commit(dir, "detached work").assert().success();

    let detached = read_metadata(dir, "HEAD");
    assert_ne!(detached, middle);
    assert_eq!(parent_of(dir, &detached)?, middle);
    assert_eq!(read_metadata(dir, "refs/heads/master"), tip);

    Ok(())
}
