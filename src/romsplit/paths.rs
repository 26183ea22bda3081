use std::fmt;
use std::path::{Path, PathBuf};

use super::transcode::TranscodeMode;

pub const DEFAULT_SUFFIX: &str = "bin";
pub const LOW_TAG: &str = "_low";
pub const HIGH_TAG: &str = "_high";

/// How output names are built from the input name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Naming {
    /// `<stem>[_low|_high].<suffix>`
    #[default]
    Current,
    /// `<input>_low` and `<input>_high`, nothing stripped, no extension
    /// (`<input>.bin` for a single output).
    Legacy,
}

/// Destination path(s) for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputPlan {
    Single(PathBuf),
    Pair { low: PathBuf, high: PathBuf },
}

impl OutputPlan {
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            OutputPlan::Single(p) => vec![p.as_path()],
            OutputPlan::Pair { low, high } => vec![low.as_path(), high.as_path()],
        }
    }
}

impl fmt::Display for OutputPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputPlan::Single(p) => write!(f, "'{}'", p.display()),
            OutputPlan::Pair { low, high } => {
                write!(f, "'{}' and '{}'", low.display(), high.display())
            }
        }
    }
}

/// Everything before the extension dot of the last path component.
/// A leading dot (hidden file) is not an extension.
fn stem(input: &str) -> &str {
    let name_start = input.rfind(std::path::is_separator).map_or(0, |i| i + 1);
    let name = &input.as_bytes()[name_start..];
    match memchr::memrchr(b'.', name) {
        Some(dot) if dot > 0 => &input[..name_start + dot],
        _ => input,
    }
}

/// Suffix text with leading dots removed; `None` picks the default.
fn normalize_suffix(suffix: Option<&str>) -> &str {
    suffix.map_or(DEFAULT_SUFFIX, |s| s.trim_start_matches('.'))
}

fn with_suffix(base: &str, tag: &str, suffix: &str) -> PathBuf {
    if suffix.is_empty() {
        PathBuf::from(format!("{base}{tag}"))
    } else {
        PathBuf::from(format!("{base}{tag}.{suffix}"))
    }
}

/// Compute output paths without touching the filesystem.
///
/// `suffix` is only consulted for [`Naming::Current`].
pub fn derive(
    input: &str,
    mode: TranscodeMode,
    naming: Naming,
    suffix: Option<&str>,
) -> OutputPlan {
    match naming {
        Naming::Legacy => match mode {
            TranscodeMode::Split => OutputPlan::Pair {
                low: PathBuf::from(format!("{input}{LOW_TAG}")),
                high: PathBuf::from(format!("{input}{HIGH_TAG}")),
            },
            TranscodeMode::Merge => {
                OutputPlan::Single(PathBuf::from(format!("{input}.{DEFAULT_SUFFIX}")))
            }
        },
        Naming::Current => {
            let base = stem(input);
            let suffix = normalize_suffix(suffix);
            match mode {
                TranscodeMode::Split => OutputPlan::Pair {
                    low: with_suffix(base, LOW_TAG, suffix),
                    high: with_suffix(base, HIGH_TAG, suffix),
                },
                TranscodeMode::Merge => OutputPlan::Single(with_suffix(base, "", suffix)),
            }
        }
    }
}
