use std::collections::HashMap;

use thiserror::Error;

/// One row of an option table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptSpec {
    pub short: char,
    pub long: &'static str,
    pub takes_value: bool,
}

impl OptSpec {
    pub const fn flag(short: char, long: &'static str) -> Self {
        Self {
            short,
            long,
            takes_value: false,
        }
    }

    pub const fn value(short: char, long: &'static str) -> Self {
        Self {
            short,
            long,
            takes_value: true,
        }
    }
}

/// A matched option: a bare flag, or an option carrying its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptMatch {
    Present,
    Value(String),
}

impl OptMatch {
    pub fn value(&self) -> Option<&str> {
        match self {
            OptMatch::Present => None,
            OptMatch::Value(v) => Some(v),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("option '-{short}' and '--{long}' given together")]
    Conflict { short: char, long: String },
    #[error("option '--{long}' requires an argument")]
    MissingValue { long: String },
}

/// Option lookups over an argument vector (program name first).
///
/// Lookups scan the whole vector, so option order does not matter and
/// unknown arguments are simply never matched.
#[derive(Clone, Debug)]
pub struct ArgParser {
    args: Vec<String>,
}

impl ArgParser {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Program name as invoked, or "" for an empty vector.
    pub fn program(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or("")
    }

    /// Number of arguments after the program name.
    pub fn param_count(&self) -> usize {
        self.args.len().saturating_sub(1)
    }

    fn params(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }

    pub fn help_requested(&self) -> bool {
        self.params().iter().any(|a| a == "-h" || a == "--help")
    }

    /// Help was asked for, or `no_args` is set and nothing was passed at all.
    pub fn wants_help(&self, no_args: bool) -> bool {
        self.help_requested() || (no_args && self.param_count() == 0)
    }

    /// The argument following position `i`, if it can serve as a value.
    fn next_value(&self, i: usize) -> Option<String> {
        self.params()
            .get(i + 1)
            .filter(|next| !next.starts_with('-'))
            .cloned()
    }

    /// Look up `--name`, `--name=value` or `--name value`.
    pub fn long_opt(&self, name: &str, takes_value: bool) -> Option<OptMatch> {
        if name.is_empty() {
            return None;
        }

        for (i, arg) in self.params().iter().enumerate() {
            let Some(rest) = arg.strip_prefix("--") else {
                continue;
            };
            let Some(tail) = rest.strip_prefix(name) else {
                continue;
            };

            if !takes_value {
                if tail.is_empty() {
                    return Some(OptMatch::Present);
                }
                continue;
            }

            if let Some(v) = tail.strip_prefix('=')
                && !v.is_empty()
            {
                return Some(OptMatch::Value(v.to_string()));
            }
            if tail.is_empty()
                && let Some(v) = self.next_value(i)
            {
                return Some(OptMatch::Value(v));
            }
        }

        None
    }

    /// Look up `-c`, `-c=value`, `-cvalue` or `-c value`.
    pub fn short_opt(&self, c: char, takes_value: bool) -> Option<OptMatch> {
        if !c.is_ascii_alphanumeric() {
            return None;
        }

        for (i, arg) in self.params().iter().enumerate() {
            let Some(rest) = arg.strip_prefix('-') else {
                continue;
            };
            let Some(tail) = rest.strip_prefix(c) else {
                continue;
            };

            if !takes_value {
                if tail.is_empty() {
                    return Some(OptMatch::Present);
                }
                continue;
            }

            if let Some(v) = tail.strip_prefix('=')
                && !v.is_empty()
            {
                return Some(OptMatch::Value(v.to_string()));
            }
            if tail.starts_with(|ch: char| ch.is_ascii_alphanumeric()) {
                return Some(OptMatch::Value(tail.to_string()));
            }
            if tail.is_empty()
                && let Some(v) = self.next_value(i)
            {
                return Some(OptMatch::Value(v));
            }
        }

        None
    }

    /// Combined short/long lookup. Giving both spellings is an error.
    pub fn opt(
        &self,
        short: char,
        long: &str,
        takes_value: bool,
    ) -> Result<Option<OptMatch>, ArgError> {
        let s = self.short_opt(short, takes_value);
        let l = self.long_opt(long, takes_value);

        match (s, l) {
            (Some(_), Some(_)) => Err(ArgError::Conflict {
                short,
                long: long.to_string(),
            }),
            (Some(m), None) | (None, Some(m)) => Ok(Some(m)),
            (None, None) => Ok(None),
        }
    }

    /// True if `arg` spells `spec` in its separate-value form (`-c` / `--long`).
    fn is_bare_spelling(spec: &OptSpec, arg: &str) -> bool {
        if let Some(long) = arg.strip_prefix("--") {
            return long == spec.long;
        }
        let mut chars = arg.chars();
        chars.next() == Some('-') && chars.next() == Some(spec.short) && chars.next().is_none()
    }

    /// True if `arg` mentions `spec` in any spelling.
    fn mentions(spec: &OptSpec, arg: &str) -> bool {
        if let Some(long) = arg.strip_prefix("--") {
            return long == spec.long
                || long
                    .strip_prefix(spec.long)
                    .is_some_and(|t| t.starts_with('='));
        }
        arg.strip_prefix('-').is_some_and(|rest| {
            rest.starts_with(spec.short) && (spec.takes_value || rest.len() == spec.short.len_utf8())
        })
    }

    fn positionals(&self, table: &[OptSpec]) -> Vec<String> {
        let mut out = Vec::new();
        let mut skip_next = false;

        for arg in self.params() {
            if std::mem::take(&mut skip_next) && !arg.starts_with('-') {
                continue;
            }
            if arg.len() > 1 && arg.starts_with('-') {
                skip_next = table
                    .iter()
                    .any(|s| s.takes_value && Self::is_bare_spelling(s, arg));
                continue;
            }
            out.push(arg.clone());
        }

        out
    }
}

/// Result of applying an option table to an argument vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub program: String,
    pub help: bool,
    pub options: HashMap<&'static str, OptMatch>,
    pub positionals: Vec<String>,
}

impl ParsedArgs {
    /// True if the option was given (flag or value).
    pub fn has(&self, long: &str) -> bool {
        self.options.contains_key(long)
    }

    pub fn value(&self, long: &str) -> Option<&str> {
        self.options.get(long).and_then(OptMatch::value)
    }
}

/// Apply `table` to `args` (program name first).
pub fn parse<I, S>(table: &[OptSpec], args: I) -> Result<ParsedArgs, ArgError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let parser = ArgParser::new(args);
    let mut options = HashMap::new();

    for spec in table {
        match parser.opt(spec.short, spec.long, spec.takes_value)? {
            Some(m) => {
                options.insert(spec.long, m);
            }
            None if spec.takes_value
                && parser.params().iter().any(|a| ArgParser::mentions(spec, a)) =>
            {
                return Err(ArgError::MissingValue {
                    long: spec.long.to_string(),
                });
            }
            None => {}
        }
    }

    Ok(ParsedArgs {
        program: parser.program().to_string(),
        help: parser.help_requested(),
        positionals: parser.positionals(table),
        options,
    })
}
