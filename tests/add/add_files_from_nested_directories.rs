use crate::common::command::{repository_dir, run_mini_git_command};
use crate::common::count_objects;
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn index_names(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(dir.join(".metadata/index"))
        .expect("index is readable")
        .lines()
        .map(|line| line.split_once(' ').expect("index line").1.to_string())
        .collect()
}

#[rstest]
fn add_files_from_nested_directories_to_index(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(repository_dir.path().join("top.txt"), "top".into()));
    write_file(FileSpec::new(
        repository_dir.path().join("src/nested/deep.txt"),
        "deep".into(),
    ));
    write_file(FileSpec::new(repository_dir.path().join("src/a.txt"), "a".into()));

    run_mini_git_command(repository_dir.path(), &["add", "src", "top.txt"])
        .assert()
        .success();

    assert_eq!(
        index_names(repository_dir.path()),
        vec!["src/a.txt", "src/nested/deep.txt", "top.txt"]
    );
    assert_eq!(count_objects(repository_dir.path()), 3);

    Ok(())
}

#[rstest]
fn add_from_a_subdirectory_uses_repository_relative_names(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(repository_dir.path().join("docs/guide.md"), "# guide".into()));

    run_mini_git_command(&repository_dir.path().join("docs"), &["add", "guide.md"])
        .assert()
        .success();

    assert_eq!(index_names(repository_dir.path()), vec!["docs/guide.md"]);

    Ok(())
}

#[rstest]
fn identical_contents_are_stored_once(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(repository_dir.path().join("one.txt"), "same".into()));
    write_file(FileSpec::new(repository_dir.path().join("two.txt"), "same".into()));

    run_mini_git_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    run_mini_git_command(repository_dir.path(), &["add", "one.txt"])
        .assert()
        .success();

    assert_eq!(count_objects(repository_dir.path()), 1);

    Ok(())
}

#[rstest]
fn add_many_generated_files(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let files = write_generated_files(repository_dir.path(), 10);

    run_mini_git_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    let mut expected = files
        .iter()
        .map(|file| file.path.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    expected.sort();
    assert_eq!(index_names(repository_dir.path()), expected);

    Ok(())
}
