use crate::common::command::{init_repository_dir, repository_dir, run_mini_git_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn status_of(dir: &std::path::Path) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_mini_git_command(dir, &["status"]).assert().success();
    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}

#[rstest]
fn print_no_commits_yet_for_an_empty_repository(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    assert_eq!(
        status_of(repository_dir.path())?,
        "On branch master\n\nNo commits yet\n"
    );

    Ok(())
}

#[rstest]
fn print_nothing_to_commit_when_no_files_are_changed(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        status_of(init_repository_dir.path())?,
        "On branch master\n\nnothing to commit, working tree clean\n"
    );

    Ok(())
}

#[rstest]
fn list_untracked_files_in_name_order(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    for name in ["file.txt", "another.txt", "dir/inner.txt"] {
        write_file(FileSpec::new(repository_dir.path().join(name), name.into()));
    }

    assert_eq!(
        status_of(repository_dir.path())?,
        "On branch master\n\
         \nUntracked files:\n        another.txt\n        dir/inner.txt\n        file.txt\n"
    );

    Ok(())
}

#[rstest]
fn report_staged_modified_and_untracked_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "staged change".into()));
    write_file(FileSpec::new(dir.join("new.txt"), "brand new".into()));
    run_mini_git_command(dir, &["add", "1.txt", "new.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("a/2.txt"), "unstaged change".into()));
    write_file(FileSpec::new(dir.join("stray.txt"), "stray".into()));

    assert_eq!(
        status_of(dir)?,
        "On branch master\n\
         \nChanges to be committed:\n        modified:   1.txt\n        new file:   new.txt\n\
         \nChanges not staged for commit:\n        modified:   a/2.txt\n\
         \nUntracked files:\n        stray.txt\n"
    );

    Ok(())
}

#[rstest]
fn report_detached_head(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let head = crate::common::command::get_head_commit_sha(init_repository_dir.path())?;
    run_mini_git_command(init_repository_dir.path(), &["checkout", &head])
        .assert()
        .success();

    assert_eq!(
        status_of(init_repository_dir.path())?,
        format!(
            "HEAD detached at {}\n\nnothing to commit, working tree clean\n",
            &head[..7]
        )
    );

    Ok(())
}
