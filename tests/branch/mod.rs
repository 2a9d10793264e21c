mod create_branch;
mod list_branches;
