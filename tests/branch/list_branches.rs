use crate::common::command::{init_repository_dir, run_mini_git_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_only_the_default_branch(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mini_git_command(init_repository_dir.path(), &["branch"])
        .assert()
        .success()
        .stdout("* master\n");

    Ok(())
}

#[rstest]
fn list_branches_sorted_with_current_marked(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    for name in ["zeta", "feature/login", "alpha"] {
        run_mini_git_command(init_repository_dir.path(), &["branch", name])
            .assert()
            .success();
    }
    run_mini_git_command(init_repository_dir.path(), &["checkout", "zeta"])
        .assert()
        .success();

    run_mini_git_command(init_repository_dir.path(), &["branch"])
        .assert()
        .success()
        .stdout("  alpha\n  feature/login\n  master\n* zeta\n");

    Ok(())
}
