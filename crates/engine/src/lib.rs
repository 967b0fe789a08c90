// crates/engine/src/lib.rs
//
// Core of lf: classify file names into extension groups, keep them in
// collation order, and wrap each group into width-bounded lines. The
// whole pass is sequential; all state lives in one GroupIndex owned by
// the single run() call.

pub mod classify;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod index;
pub mod order;
pub mod wrap;

use crate::classify::classify;
use crate::config::Config;
use crate::error::EngineError;
use crate::filesystem::EntryKind;
use crate::index::GroupIndex;
use crate::order::Collator;
use std::path::PathBuf;

/// The populated index for one listing pass, plus the per-path failures
/// met along the way. Failures never abort the pass; the caller decides
/// how to report them.
#[derive(Debug)]
pub struct RunResult {
    pub index: GroupIndex,
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Classify and index every target named by the configuration.
///
/// Directory targets are slurped one level deep (unless `list_dir_args`
/// is off, in which case the directory name itself is indexed). With more
/// than one target, slurped entry names keep their directory prefix so
/// the listing stays unambiguous. Explicitly named targets are never
/// hidden-filtered; names discovered inside a directory are.
#[must_use]
pub fn run(config: &Config) -> RunResult {
    let collator = Collator::for_order(config.order);
    let transforms = config.transforms();
    let mut index = GroupIndex::new(collator);
    let mut errors = Vec::new();

    let keep_path = config.targets.len() > 1;

    for target in &config.targets {
        match filesystem::entry_kind(target) {
            Err(err) => errors.push((target.clone(), err)),
            Ok(EntryKind::Dir) if config.list_dir_args => {
                let scan = filesystem::scan_dir(target, config.show_all);
                errors.extend(scan.errors);
                for (name, kind) in scan.entries {
                    let display = if keep_path {
                        target.join(&name).display().to_string()
                    } else {
                        name
                    };
                    match kind {
                        EntryKind::Dir => index.add_directory(transforms.apply(&display)),
                        EntryKind::File | EntryKind::Other => index.add_file(
                            classify(&display, config.ext_limit).transformed(&transforms),
                        ),
                    }
                }
            }
            Ok(EntryKind::Dir) => {
                index.add_directory(transforms.apply(&target.display().to_string()));
            }
            Ok(EntryKind::File | EntryKind::Other) => index.add_file(
                classify(&target.display().to_string(), config.ext_limit)
                    .transformed(&transforms),
            ),
        }
    }

    RunResult { index, errors }
}
