use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mini_git::areas::repository::Repository;
use mini_git::artifacts::branch::head_target::HeadTarget;
use mini_git::artifacts::core::layout;
use mini_git::artifacts::log::format::{CommitDisplayFormat, write_commit};
use mini_git::artifacts::merge::MergeOutcome;
use mini_git::artifacts::objects::commit::Author;
use mini_git::artifacts::objects::object::{Object, ObjectBox};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter
const LOG_ENV: &str = "MINI_GIT_LOG";

#[derive(Parser)]
#[command(
    name = "mini-git",
    version = "0.1.0",
    about = "A minimal version control system",
    long_about = "A minimal version control system: content-addressed objects, \
    branches, linear history and fast-forward merges.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(name = "add", about = "Stage files or directories for the next commit")]
    Add {
        #[arg(required = true, help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit in the repository with the specified commit message. \
        The author is read from GIT_AUTHOR_NAME, GIT_AUTHOR_EMAIL and GIT_AUTHOR_DATE."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(name = "status", about = "Show staged, modified and untracked files")]
    Status,
    #[command(
        name = "branch",
        about = "List branches, or create one at the current commit"
    )]
    Branch {
        #[arg(index = 1, help = "Name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to a branch, or detach HEAD at a commit"
    )]
    Checkout {
        #[arg(index = 1, help = "Branch name or commit id")]
        target: String,
    },
    #[command(name = "merge", about = "Fast-forward the current branch to another branch")]
    Merge {
        #[arg(index = 1, help = "Branch to merge")]
        branch: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA (or a unique prefix of it) of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database"
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let pwd = std::env::current_dir().context("Unable to read the current directory")?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Init { path } => {
            let path = path.map(|path| pwd.join(path)).unwrap_or_else(|| pwd.clone());
            let existed = layout::metadata_path(&path).is_dir();

            let repository = Repository::init(&path)?;

            let verb = if existed { "Reinitialized existing" } else { "Initialized empty" };
            writeln!(
                stdout,
                "{verb} Mini Git repository in {}",
                repository.metadata_path().display()
            )?;
        }
        Commands::Add { paths } => {
            let mut repository = Repository::discover(&pwd)?;
            repository.add(&pwd, &paths)?;
        }
        Commands::Commit { message } => {
            let mut repository = Repository::discover(&pwd)?;
            let summary = repository.commit(message.trim(), Author::load_from_env())?;

            let root = if summary.is_root { "(root-commit) " } else { "" };
            writeln!(
                stdout,
                "[{root}{}] {}",
                summary.oid.to_short_oid(),
                summary.short_message
            )?;
        }
        Commands::Log { oneline } => {
            let repository = Repository::discover(&pwd)?;
            let format = match oneline {
                true => CommitDisplayFormat::OneLine,
                false => CommitDisplayFormat::Medium,
            };

            for item in repository.log(repository.resolve_head()?) {
                let (oid, commit) = item?;
                write_commit(&mut stdout, &oid, &commit, format)?;
            }
        }
        Commands::Status => {
            let mut repository = Repository::discover(&pwd)?;
            repository.status()?.render(&mut stdout)?;
        }
        Commands::Branch { name: None } => {
            let repository = Repository::discover(&pwd)?;
            for (name, is_current) in repository.list_branches()? {
                let marker = if is_current { '*' } else { ' ' };
                writeln!(stdout, "{marker} {name}")?;
            }
        }
        Commands::Branch { name: Some(name) } => {
            let mut repository = Repository::discover(&pwd)?;
            let name = repository.create_branch(&name)?;
            writeln!(stdout, "Created branch '{name}'")?;
        }
        Commands::Checkout { target } => {
            let mut repository = Repository::discover(&pwd)?;
            match repository.checkout(&target)? {
                HeadTarget::Symbolic(name) => writeln!(stdout, "Switched to branch '{name}'")?,
                HeadTarget::Detached(oid) => {
                    writeln!(stdout, "HEAD is now at {}", oid.to_short_oid())?
                }
            }
        }
        Commands::Merge { branch } => {
            let mut repository = Repository::discover(&pwd)?;
            match repository.merge(&branch)? {
                MergeOutcome::FastForward { .. } => {
                    let current = repository
                        .refs()
                        .current_branch()?
                        .map(|name| name.to_string())
                        .unwrap_or_else(|| "HEAD".to_string());
                    writeln!(
                        stdout,
                        "Fast-forward merge successful. {branch} merged into {current}."
                    )?;
                }
                MergeOutcome::UpToDate => writeln!(stdout, "Already up to date.")?,
            }
        }
        Commands::CatFile { sha } => {
            let repository = Repository::discover(&pwd)?;
            match repository.cat_file(&sha)? {
                ObjectBox::Blob(blob) => stdout.write_all(blob.content())?,
                object => writeln!(stdout, "{}", object.display())?,
            }
        }
        Commands::HashObject { write, file } => {
            let repository = Repository::discover(&pwd)?;
            let oid = repository.hash_object(&pwd.join(file), write)?;
            writeln!(stdout, "{oid}")?;
        }
    }

    Ok(())
}
