use crate::common::command::{repository_dir, run_mini_git_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn adding_a_missing_file_fails_and_stages_nothing(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(repository_dir.path().join("real.txt"), "real".into()));

    run_mini_git_command(repository_dir.path(), &["add", "real.txt", "missing.txt"])
        .assert()
        .failure();

    assert_eq!(
        std::fs::read_to_string(repository_dir.path().join(".metadata/index"))?,
        ""
    );

    Ok(())
}

#[rstest]
fn adding_the_metadata_directory_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_mini_git_command(repository_dir.path(), &["add", ".metadata"])
        .assert()
        .failure();

    Ok(())
}

#[rstest]
fn adding_a_file_outside_the_repository_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let outside = TempDir::new()?;
    write_file(FileSpec::new(outside.path().join("stray.txt"), "stray".into()));
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let stray = outside.path().join("stray.txt");
    run_mini_git_command(repository_dir.path(), &["add", stray.to_str().unwrap()])
        .assert()
        .failure();

    Ok(())
}
