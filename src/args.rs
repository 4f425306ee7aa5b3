// src/args.rs
use clap::{Parser, ValueHint};
use std::ffi::OsString;

/// Command-line surface.
///
/// There are no flags: help and version are disabled and hyphenated tokens
/// are accepted, so whatever comes first is the path, verbatim. Use the
/// `*_literal` constructors so a leading `--` is a path too.
#[derive(Parser, Debug)]
#[command(
    name = "nol",
    about = "Count the newline bytes in a file or standard input",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// File to read (stdin when omitted)
    #[arg(
        value_hint = ValueHint::FilePath,
        value_parser = clap::value_parser!(OsString),
        allow_hyphen_values = true
    )]
    pub path: Option<OsString>,

    /// Ignored
    #[arg(
        hide = true,
        num_args = 0..,
        value_parser = clap::value_parser!(OsString),
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub rest: Vec<OsString>,
}

impl Args {
    /// Parse the process arguments, every user token taken as a value.
    #[must_use]
    pub fn parse_literal() -> Self {
        Self::parse_from(literal_argv(std::env::args_os()))
    }

    /// Like [`Args::parse_literal`] over an explicit argv (program name first).
    ///
    /// # Errors
    ///
    /// Returns the clap error if parsing fails.
    pub fn try_parse_literal_from<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(literal_argv(argv))
    }
}

/// `[bin, "--", tokens...]`: clap stops looking for options after the
/// inserted separator, so a user-supplied `--` stays a literal value.
fn literal_argv<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut tokens = argv.into_iter().map(Into::into);
    let bin = tokens.next().unwrap_or_else(|| OsString::from("nol"));
    let mut out = vec![bin, OsString::from("--")];
    out.extend(tokens);
    out
}
