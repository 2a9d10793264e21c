use crate::common::command::{repository_dir, run_mini_git_command};
use crate::common::count_objects;
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

const HELLO_OID: &str = "ce013625030ba8dba906f756967f9e9ca394464a";

#[rstest]
fn hash_object_without_write_stores_nothing(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(repository_dir.path().join("hello.txt"), "hello\n".into()));

    run_mini_git_command(repository_dir.path(), &["hash-object", "hello.txt"])
        .assert()
        .success()
        .stdout(format!("{HELLO_OID}\n"));

    assert_eq!(count_objects(repository_dir.path()), 0);

    Ok(())
}

#[rstest]
fn write_blob_object_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(repository_dir.path().join("hello.txt"), "hello\n".into()));

    run_mini_git_command(repository_dir.path(), &["hash-object", "-w", "hello.txt"])
        .assert()
        .success()
        .stdout(format!("{HELLO_OID}\n"));

    let object_path = repository_dir
        .path()
        .join(".metadata/objects")
        .join(&HELLO_OID[..2])
        .join(&HELLO_OID[2..]);
    assert_eq!(std::fs::read(object_path)?, b"blob 6\0hello\n");

    Ok(())
}
