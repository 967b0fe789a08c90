use lf_cli::args;
use lf_cli::config::Config;
use lf_cli::presentation;
use lf_engine::order::{LocaleSupport, NameOrder, locale_support};
use std::process::ExitCode;

fn main() -> ExitCode {
    let (args, lfopts) = match args::parse_with_env() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("lf: {e}");
            return ExitCode::from(2);
        }
    };
    let config = Config::from(args);

    // The engine silently degrades to ASCII order; warning is our job.
    if config.order == NameOrder::Locale
        && let LocaleSupport::Unsupported(name) = locale_support()
    {
        eprintln!("lf: unable to use locale '{name}'; defaulting to ASCII sort.");
    }

    presentation::announce_target(&config);
    if config.verbose >= 2 {
        presentation::print_option_report(&config, lfopts.as_deref());
    }

    let result = lf_engine::run(&config);
    for (path, err) in &result.errors {
        eprintln!("lf: {}: {err}", path.display());
    }
    presentation::print_listing(&result.index, &config);

    ExitCode::SUCCESS
}
