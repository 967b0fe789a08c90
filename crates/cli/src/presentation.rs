// crates/cli/src/presentation.rs
use lf_engine::config::Config;
use lf_engine::filesystem::{self, EntryKind};
use lf_engine::index::GroupIndex;
use lf_engine::order::{LocaleSupport, NameOrder, locale_support};
use lf_engine::wrap;
use std::env;
use std::path::PathBuf;

/// Announce which directory the listing covers, mirroring the target
/// dispatch: one slurped directory argument is announced by name, a
/// relative argument or multiple arguments announce the cwd instead.
pub fn announce_target(config: &Config) {
    if config.verbose == 0 {
        return;
    }
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match config.targets.as_slice() {
        [] => {}
        [target] => {
            let is_dir = matches!(filesystem::entry_kind(target), Ok(EntryKind::Dir));
            if is_dir && config.list_dir_args {
                println!("Listing files in: {}", target.display());
            } else if target.is_relative() {
                println!("Listing files in: {}", cwd.display());
            }
        }
        _ => println!("Listing files in: {}", cwd.display()),
    }
}

/// Report the active options, for verbosity >= 2.
pub fn print_option_report(config: &Config, lfopts: Option<&str>) {
    if let Some(opts) = lfopts {
        println!("LFOPTS: [{opts}]");
    }

    match config.order {
        NameOrder::Ascii => println!("sorting in ASCII order"),
        NameOrder::AsciiIgnoreCase => println!("sorting in ASCII order, ignoring case"),
        NameOrder::Locale => {
            let name = match locale_support() {
                LocaleSupport::Natural(name) | LocaleSupport::Unsupported(name) => name,
                LocaleSupport::Posix => String::from("C"),
            };
            println!("sorting in locale order: {name}");
        }
    }

    println!("formatting lines for width: {}", config.line_width);
    if config.margin != 0 {
        println!("leaving a right margin of: {}", config.margin);
    }
    println!("ignoring extensions longer than: {}", config.ext_limit);
    println!("formatting extension display width of: {}", config.ext_width);

    if config.name_separator != " " {
        println!("separating names with: [{}]", config.name_separator);
    }
    if let Some(replacement) = &config.replace_spaces {
        println!("replacing spaces with: [{replacement}]");
    }
    if config.force_lower {
        println!("forcing names to lower case");
    }
    if config.show_all {
        println!("showing all names, even hidden ones");
    }
    if !config.list_dir_args {
        println!("printing directory arguments without listing them");
    }

    println!();
}

/// Print the rendered listing to stdout.
pub fn print_listing(index: &GroupIndex, config: &Config) {
    for line in wrap::render_listing(index, config) {
        println!("{line}");
    }
}
