use crate::common::command::{repository_dir, run_mini_git_command};
use crate::common::read_metadata;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty Mini Git repository in .+\.metadata\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let metadata = repository_dir.path().join(".metadata");
    assert!(metadata.join("objects").is_dir());
    assert!(metadata.join("refs").join("heads").is_dir());
    assert_eq!(read_metadata(repository_dir.path(), "HEAD"), "ref: refs/heads/master");
    assert_eq!(read_metadata(repository_dir.path(), "refs/heads/master"), "");
    assert_eq!(read_metadata(repository_dir.path(), "index"), "");

    Ok(())
}

#[rstest]
fn init_repository_at_given_path(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success();

    assert!(
        repository_dir
            .path()
            .join("nested/project/.metadata/HEAD")
            .is_file()
    );

    Ok(())
}
