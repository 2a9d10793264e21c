//! Branch names and HEAD targets

pub mod branch_name;
pub mod head_target;

/// Ref-name rules: no leading dot or slash, no `/.`, `..`, `@{`, trailing
/// slash, `.lock` suffix, control characters, or any of `*:?[\~^`
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
