//! Descriptions of git short-status codes.

/// Git short-status codes and what they mean.
///
/// Mirrors the `XY` legend from `git status --short`.
pub const STATUS_DESCRIPTIONS: &[(char, &str)] = &[
    (' ', "unmodified"),
    ('M', "modified"),
    ('T', "file type changed"),
    ('A', "added"),
    ('D', "deleted"),
    ('R', "renamed"),
    ('C', "copied"),
    ('U', "updated but unmerged"),
    ('?', "untracked"),
    ('!', "ignored"),
];

/// Look up the description of a status code.
pub fn describe_code(code: char) -> Option<&'static str> {
    STATUS_DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, description)| *description)
}
