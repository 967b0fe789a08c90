use crate::classify::NameTransforms;
use crate::order::NameOrder;
use derive_builder::Builder;
use std::path::PathBuf;

/// Everything one listing pass needs, resolved up front by the caller.
///
/// No process-wide state: the CLI builds one of these per invocation and
/// the engine never mutates it.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Files or directories to list.
    #[builder(default)]
    pub targets: Vec<PathBuf>,

    /// Name ordering policy, fixed for the whole pass.
    #[builder(default)]
    pub order: NameOrder,

    /// Display width reserved for extension labels.
    #[builder(default = "4")]
    pub ext_width: usize,

    /// Longest accepted extension; longer ones are ignored.
    #[builder(default = "4")]
    pub ext_limit: usize,

    /// Format lines for this maximum width.
    #[builder(default = "80")]
    pub line_width: usize,

    /// Blank columns to leave at the right of each line.
    #[builder(default = "0")]
    pub margin: usize,

    /// String separating basenames on a line.
    #[builder(default = "String::from(\" \")")]
    pub name_separator: String,

    /// Force names to lower case.
    #[builder(default)]
    pub force_lower: bool,

    /// Replace spaces in names with this string.
    #[builder(default)]
    pub replace_spaces: Option<String>,

    /// List hidden (dot-prefixed) names too.
    #[builder(default)]
    pub show_all: bool,

    /// List the contents of directory arguments rather than printing
    /// the arguments themselves.
    #[builder(default = "true")]
    pub list_dir_args: bool,

    /// Verbosity level; 0 is least verbose.
    #[builder(default = "1")]
    pub verbose: u8,
}

impl Config {
    /// Line width after reserving margin space.
    #[must_use]
    pub fn width(&self) -> usize {
        self.line_width.saturating_sub(self.margin)
    }

    #[must_use]
    pub fn transforms(&self) -> NameTransforms {
        NameTransforms {
            force_lower: self.force_lower,
            replace_spaces: self.replace_spaces.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            order: NameOrder::default(),
            ext_width: 4,
            ext_limit: 4,
            line_width: 80,
            margin: 0,
            name_separator: String::from(" "),
            force_lower: false,
            replace_spaces: None,
            show_all: false,
            list_dir_args: true,
            verbose: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let plain = Config::default();
        assert_eq!(built.ext_width, plain.ext_width);
        assert_eq!(built.ext_limit, plain.ext_limit);
        assert_eq!(built.line_width, plain.line_width);
        assert_eq!(built.name_separator, plain.name_separator);
        assert_eq!(built.list_dir_args, plain.list_dir_args);
    }

    #[test]
    fn test_width_reserves_margin() {
        let config = ConfigBuilder::default()
            .line_width(80usize)
            .margin(8usize)
            .build()
            .unwrap();
        assert_eq!(config.width(), 72);
    }
}
