//! Input line formats and their selection.

use std::env;
use std::fmt;

use tracing::warn;

/// Environment variable to override the default line format.
pub const FORMAT_ENV_VAR: &str = "AUTO_COMMIT_MSG_FORMAT";

/// Which git command produced an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFormat {
    /// Decide per line: tab-separated lines are diff-index output.
    #[default]
    Auto,
    /// `git status --short` / `--porcelain`.
    Status,
    /// `git diff-index --name-status`.
    DiffIndex,
}

impl LineFormat {
    /// Get the name used on the command line and in the environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Status => "status",
            Self::DiffIndex => "diff-index",
        }
    }

    /// Resolve `Auto` to a concrete format for one line.
    ///
    /// git separates diff-index fields with tabs, while status lines use a
    /// single space after the two status columns. A diff-index rename or copy
    /// carries a similarity score right after its code, and no status line
    /// has a digit in its second column.
    pub fn resolve(self, line: &str) -> LineFormat {
        match self {
            Self::Auto if line.contains('\t') || has_score(line) => Self::DiffIndex,
            Self::Auto => Self::Status,
            other => other,
        }
    }

    /// Get the configured default format.
    ///
    /// Reads from AUTO_COMMIT_MSG_FORMAT if set, otherwise `Auto`.
    /// Logs a warning if the variable holds an unknown value.
    pub fn from_env() -> LineFormat {
        match env::var(FORMAT_ENV_VAR) {
            Ok(v) if !v.is_empty() => match v.parse::<LineFormat>() {
                Ok(format) => format,
                Err(_) => {
                    warn!(
                        "Invalid {} value '{}', using default '{}'",
                        FORMAT_ENV_VAR,
                        v,
                        LineFormat::default()
                    );
                    LineFormat::default()
                }
            },
            _ => LineFormat::default(),
        }
    }
}

fn has_score(line: &str) -> bool {
    line.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
}

impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LineFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "status" => Ok(Self::Status),
            "diff-index" | "diff_index" | "diffindex" => Ok(Self::DiffIndex),
            _ => Err(format!(
                "Unknown line format: {} (expected auto, status or diff-index)",
                s
            )),
        }
    }
}
