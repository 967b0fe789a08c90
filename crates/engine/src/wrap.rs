//! Width-bounded rendering of one group per labeled, wrapped line.

use crate::config::Config;
use crate::index::GroupIndex;
use std::mem;

/// Separates a group label from its names. Fixed; the original tool had
/// no option for it either.
pub const LABEL_SEPARATOR: &str = ": ";

/// Label for the directory group, printed above the extension groups.
pub const DIRS_LABEL: &str = "DIRS";

/// Pack `items` into lines no wider than `line_width - margin`.
///
/// The first line starts with `label` right-aligned in a `gutter_width`
/// field plus [`LABEL_SEPARATOR`]; continuation lines are blank-padded to
/// the same start column. Items are never split: one wider than the whole
/// budget still goes on a line of its own, since wrapping could not
/// relieve the overflow.
#[must_use]
pub fn wrap_group(
    label: &str,
    gutter_width: usize,
    items: &[String],
    separator: &str,
    line_width: usize,
    margin: usize,
) -> Vec<String> {
    let budget = line_width.saturating_sub(margin);
    let gap = gutter_width + LABEL_SEPARATOR.chars().count();
    let separator_len = separator.chars().count();

    let mut lines = Vec::new();
    let mut line = format!("{label:>gutter_width$}{LABEL_SEPARATOR}");
    let mut width = line.chars().count();
    let mut need_separator = false;

    for item in items {
        let item_len = item.chars().count();
        let added = item_len + if need_separator { separator_len } else { 0 };

        // Wrap only when a fresh line would actually give more room: a
        // line holding nothing past the gutter keeps the item as-is.
        if width + added > budget && width > gap {
            lines.push(mem::take(&mut line));
            line = " ".repeat(gap);
            width = gap;
            need_separator = false;
        }

        if need_separator {
            line.push_str(separator);
            width += separator_len;
        }
        line.push_str(item);
        width += item_len;
        need_separator = true;
    }

    lines.push(line);
    lines
}

/// Render a fully populated index: the directory group first when
/// non-empty, then every extension group in collation order.
#[must_use]
pub fn render_listing(index: &GroupIndex, config: &Config) -> Vec<String> {
    let mut lines = Vec::new();

    if !index.directories().is_empty() {
        lines.extend(wrap_group(
            DIRS_LABEL,
            config.ext_width,
            index.directories().as_slice(),
            &config.name_separator,
            config.line_width,
            config.margin,
        ));
    }

    for extension in index.extensions() {
        lines.extend(wrap_group(
            extension,
            config.ext_width,
            index.basenames_for(extension),
            &config.name_separator,
            config.line_width,
            config.margin,
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ClassifiedEntry;
    use crate::config::ConfigBuilder;
    use crate::order::{Collator, NameOrder};

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_single_line_fits() {
        let lines = wrap_group("c", 4, &items(&["bar", "baz", "foo"]), " ", 80, 0);
        assert_eq!(lines, ["   c: bar baz foo"]);
    }

    #[test]
    fn test_empty_label_is_blank_gutter() {
        let lines = wrap_group("", 4, &items(&["readme"]), " ", 80, 0);
        assert_eq!(lines, ["    : readme"]);
    }

    #[test]
    fn test_wraps_under_gutter() {
        let lines = wrap_group("c", 4, &items(&["aaaa", "bbbb", "cccc"]), " ", 12, 0);
        assert_eq!(lines, ["   c: aaaa", "      bbbb", "      cccc"]);
    }

    #[test]
    fn test_margin_shrinks_budget() {
        let wide = wrap_group("c", 4, &items(&["aaaa", "bbbb"]), " ", 15, 0);
        assert_eq!(wide, ["   c: aaaa bbbb"]);
        let narrow = wrap_group("c", 4, &items(&["aaaa", "bbbb"]), " ", 15, 4);
        assert_eq!(narrow, ["   c: aaaa", "      bbbb"]);
    }

    #[test]
    fn test_overlong_item_emitted_whole() {
        let lines = wrap_group("c", 4, &items(&["a", "unbreakable-very-long-name", "b"]), " ", 16, 0);
        assert_eq!(
            lines,
            [
                "   c: a",
                "      unbreakable-very-long-name",
                "      b",
            ]
        );
    }

    #[test]
    fn test_wrapped_lines_respect_budget() {
        let names = items(&["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"]);
        for line_width in [14, 20, 26] {
            for line in wrap_group("txt", 4, &names, " ", line_width, 2) {
                // a line carrying a single unavoidably wide item is exempt
                let single_item = line.trim_start().split(' ').count() == 1;
                assert!(
                    line.chars().count() <= line_width - 2 || single_item,
                    "{line:?} exceeds width {line_width}"
                );
            }
        }
    }

    #[test]
    fn test_custom_separator_counts_toward_width() {
        let lines = wrap_group("c", 4, &items(&["aa", "bb"]), ", ", 11, 0);
        assert_eq!(lines, ["   c: aa", "      bb"]);
        let lines = wrap_group("c", 4, &items(&["aa", "bb"]), ", ", 12, 0);
        assert_eq!(lines, ["   c: aa, bb"]);
    }

    #[test]
    fn test_wide_label_widens_first_line() {
        let lines = wrap_group("DIRS", 4, &items(&["bak", "junk"]), " ", 80, 0);
        assert_eq!(lines, ["DIRS: bak junk"]);
        let lines = wrap_group("longlabel", 4, &items(&["x"]), " ", 80, 0);
        assert_eq!(lines, ["longlabel: x"]);
    }

    #[test]
    fn test_render_listing_end_to_end() {
        let config = ConfigBuilder::default()
            .order(NameOrder::Ascii)
            .build()
            .unwrap();
        let mut index = GroupIndex::new(Collator::for_order(NameOrder::Ascii));
        for (basename, extension) in
            [("foo", "c"), ("bar", "c"), ("baz", "o"), ("readme", "")]
        {
            index.add_file(ClassifiedEntry {
                basename: basename.into(),
                extension: extension.into(),
            });
        }
        index.add_directory("bak".into());
        index.add_directory("junk".into());

        let lines = render_listing(&index, &config);
        assert_eq!(
            lines,
            [
                "DIRS: bak junk",
                "    : readme",
                "   c: bar foo",
                "   o: baz",
            ]
        );
    }

    #[test]
    fn test_render_listing_skips_empty_dirs_group() {
        let config = ConfigBuilder::default().build().unwrap();
        let mut index = GroupIndex::new(Collator::for_order(NameOrder::Ascii));
        index.add_file(ClassifiedEntry {
            basename: "makefile".into(),
            extension: String::new(),
        });
        let lines = render_listing(&index, &config);
        assert_eq!(lines, ["    : makefile"]);
    }
}
