// crates/cli/src/args.rs
use crate::error::{AppError, Result};
use crate::parsers::{parse_positive_usize, split_words};
use clap::Parser;
use std::env;
use std::path::PathBuf;

/// Name of the environment variable holding default options.
pub const LFOPTS_VAR: &str = "LFOPTS";

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "lf",
    version = crate::VERSION,
    about = "Lists files in a terse format, sorted and grouped by extension.",
    after_help = "The LFOPTS environment variable may hold default options; \
                  command-line options override them."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Show all names, even ones normally hidden
    #[arg(short = 'a', long = "show-all", overrides_with = "show_all")]
    pub show_all: bool,

    /// Sort using ASCII order instead of the current locale
    #[arg(short = 'A', long, overrides_with_all = ["ascii", "ascii_ic", "locale"])]
    pub ascii: bool,

    /// Like --ascii, but ignores case
    #[arg(short = 'I', long = "ascii-ic", overrides_with_all = ["ascii", "ascii_ic", "locale"])]
    pub ascii_ic: bool,

    /// Use the default locale for sorting (the default)
    #[arg(short = 'L', long, overrides_with_all = ["ascii", "ascii_ic", "locale"])]
    pub locale: bool,

    /// Print directory arguments; do not list their files
    #[arg(short = 'd', long = "directory", overrides_with = "directory")]
    pub directory: bool,

    /// Set default display width of extensions to N
    #[arg(
        short = 'X',
        long = "ext-width",
        value_name = "N",
        overrides_with = "ext_width",
        default_value_t = 4,
        value_parser = parse_positive_usize
    )]
    pub ext_width: usize,

    /// Extensions wider than N are ignored
    #[arg(
        short = 'Z',
        long = "ext-limit",
        value_name = "N",
        overrides_with = "ext_limit",
        default_value_t = 4,
        value_parser = parse_positive_usize
    )]
    pub ext_limit: usize,

    /// Force all file and directory names to lower case
    #[arg(short = 'F', long = "force-lower-case", overrides_with = "force_lower")]
    pub force_lower: bool,

    /// Format lines to be no longer than N characters
    #[arg(
        short = 'w',
        long = "line-width",
        value_name = "N",
        overrides_with = "line_width",
        default_value_t = 80,
        value_parser = parse_positive_usize
    )]
    pub line_width: usize,

    /// Leave blank N spaces at the right of each line
    #[arg(short = 'M', long, value_name = "N", default_value_t = 0, overrides_with = "margin")]
    pub margin: usize,

    /// Separate names in the listing with string S
    #[arg(
        short = 'N',
        long = "name-separator",
        value_name = "S",
        default_value = " ",
        overrides_with = "name_separator"
    )]
    pub name_separator: String,

    /// Replace spaces in file names with string S
    #[arg(short = 'S', long = "replace-spaces", value_name = "S", overrides_with = "replace_spaces")]
    pub replace_spaces: Option<String>,

    /// Set verbosity level; 0 is least verbose
    #[arg(short = 'v', long, value_name = "N", default_value_t = 1, overrides_with = "verbose")]
    pub verbose: u8,

    /// Files or directories to list; defaults to the current directory
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Parse the command line, letting `LFOPTS` supply leading default
/// options. The variable's words go first so later command-line options
/// override them.
///
/// # Errors
/// Returns an error when `LFOPTS` cannot be split into words; clap's own
/// failures (bad flags, bad values) exit the process directly.
pub fn parse_with_env() -> Result<(Args, Option<String>)> {
    let lfopts = env::var(LFOPTS_VAR).ok().filter(|v| !v.is_empty());

    let mut argv: Vec<String> = Vec::new();
    argv.push(env::args().next().unwrap_or_else(|| String::from("lf")));
    if let Some(opts) = &lfopts {
        argv.extend(split_words(opts).map_err(AppError::Lfopts)?);
    }
    argv.extend(env::args().skip(1));

    Ok((Args::parse_from(argv), lfopts))
}
