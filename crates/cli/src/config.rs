// crates/cli/src/config.rs
use crate::args::Args;
pub use lf_engine::config::{Config, ConfigBuilder};
use lf_engine::order::NameOrder;
use std::env;
use std::path::PathBuf;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let order = if args.ascii {
            NameOrder::Ascii
        } else if args.ascii_ic {
            NameOrder::AsciiIgnoreCase
        } else {
            NameOrder::Locale
        };

        // Replacing a space with a space is no replacement at all.
        let replace_spaces = args.replace_spaces.filter(|s| s != " ");

        let targets = if args.paths.is_empty() {
            vec![env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
        } else {
            args.paths
        };

        ConfigBuilder::default()
            .targets(targets)
            .order(order)
            .ext_width(args.ext_width)
            .ext_limit(args.ext_limit)
            .line_width(args.line_width)
            .margin(args.margin)
            .name_separator(args.name_separator)
            .force_lower(args.force_lower)
            .replace_spaces(replace_spaces)
            .show_all(args.show_all)
            .list_dir_args(!args.directory)
            .verbose(args.verbose)
            .build()
            .expect("Failed to build config")
    }
}
