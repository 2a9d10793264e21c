use crate::common::command::{init_repository_dir, repository_dir, run_mini_git_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn read_blob_object_by_prefix(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    use fake::Fake;
    use fake::faker::lorem::en::Words;

    let content = Words(5..10).fake::<Vec<String>>().join(" ");
    run_mini_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(repository_dir.path().join("words.txt"), content.clone()));
    let output = run_mini_git_command(repository_dir.path(), &["hash-object", "-w", "words.txt"])
        .assert()
        .success();
    let oid = String::from_utf8(output.get_output().stdout.clone())?;

    run_mini_git_command(repository_dir.path(), &["cat-file", "-p", &oid.trim()[..6]])
        .assert()
        .success()
        .stdout(content);

    Ok(())
}

#[rstest]
fn unknown_object_is_reported(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(
        init_repository_dir.path(),
        &["cat-file", "-p", "0000000000000000000000000000000000000000"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("not found"));

    Ok(())
}

#[rstest]
fn corrupt_object_is_detected(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let oid = "ce013625030ba8dba906f756967f9e9ca394464a";
    let object_dir = init_repository_dir.path().join(".metadata/objects").join(&oid[..2]);
    std::fs::create_dir_all(&object_dir)?;
    std::fs::write(object_dir.join(&oid[2..]), b"blob 6\0HELLO\n")?;

    run_mini_git_command(init_repository_dir.path(), &["cat-file", "-p", oid])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is corrupt"));

    Ok(())
}
