mod merge_into_unborn_branch;
