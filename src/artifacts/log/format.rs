use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

/// How `log` prints each commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitDisplayFormat {
    #[default]
    Medium,
    OneLine,
}

pub fn write_commit(
    writer: &mut impl Write,
    oid: &ObjectId,
    commit: &Commit,
    format: CommitDisplayFormat,
) -> std::io::Result<()> {
    match format {
        CommitDisplayFormat::Medium => write_medium(writer, oid, commit),
        CommitDisplayFormat::OneLine => write_oneline(writer, oid, commit),
    }
}

fn write_medium(writer: &mut impl Write, oid: &ObjectId, commit: &Commit) -> std::io::Result<()> {
    writeln!(writer, "{}", format!("commit {oid}").yellow())?;
    writeln!(writer, "Author: {}", commit.author().display_name())?;
    writeln!(writer, "Date:   {}", commit.author().readable_timestamp())?;
    writeln!(writer)?;
    for message_line in commit.message().lines() {
        writeln!(writer, "    {message_line}")?;
    }
    writeln!(writer)
}

fn write_oneline(writer: &mut impl Write, oid: &ObjectId, commit: &Commit) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        oid.to_short_oid().yellow(),
        commit.short_message()
    )
}
