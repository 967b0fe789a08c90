//! File name classification: splitting a name into basename and extension.

/// A file name split into its display parts.
///
/// `extension` is empty for names without a usable extension, the literal
/// `"."` for names whose final character is a dot, and otherwise a run of
/// at most `ext_limit` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEntry {
    pub basename: String,
    pub extension: String,
}

impl ClassifiedEntry {
    /// Apply display transforms to both halves of the split.
    #[must_use]
    pub fn transformed(self, transforms: &NameTransforms) -> Self {
        Self {
            basename: transforms.apply(&self.basename),
            extension: transforms.apply(&self.extension),
        }
    }
}

/// Display transforms applied to names after classification.
///
/// Transforms never influence where a name is split; a forced-lower `.TXT`
/// file still lands in the group keyed `txt` only because the key itself
/// was lowered too.
#[derive(Debug, Clone, Default)]
pub struct NameTransforms {
    pub force_lower: bool,
    pub replace_spaces: Option<String>,
}

impl NameTransforms {
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        let mut s = if self.force_lower {
            name.to_lowercase()
        } else {
            name.to_string()
        };
        if let Some(replacement) = &self.replace_spaces {
            s = s.replace(' ', replacement);
        }
        s
    }
}

/// Split a raw name into basename and extension.
///
/// Total function: every input, however degenerate, yields some entry.
pub fn classify(name: &str, ext_limit: usize) -> ClassifiedEntry {
    match split_point(name, ext_limit) {
        None => ClassifiedEntry {
            basename: name.to_string(),
            extension: String::new(),
        },
        Some(i_dot) => {
            let candidate = &name[i_dot + 1..];
            ClassifiedEntry {
                basename: name[..i_dot].to_string(),
                extension: if candidate.is_empty() {
                    // dot was the final character
                    ".".to_string()
                } else {
                    candidate.to_string()
                },
            }
        }
    }
}

/// Find the byte offset of the dot that separates basename from extension,
/// or `None` when the whole name is the basename.
fn split_point(name: &str, ext_limit: usize) -> Option<usize> {
    let i_dot = name.rfind('.')?;

    // An initial dot marks a hidden file, not a name that is all
    // extension; a null basename would not make sense.
    if i_dot == 0 {
        return None;
    }

    let candidate = &name[i_dot + 1..];
    if candidate.is_empty() {
        return Some(i_dot);
    }
    if candidate.chars().count() > ext_limit {
        return None;
    }

    // Names like "foo-2.18" are version-like, not a ".18" file with a
    // basename of "foo-2": a numeric candidate preceded by a numeric
    // final dash segment keeps the whole name as the basename.
    if is_numeric(candidate) {
        let stem = &name[..i_dot];
        if let Some(i_dash) = stem.rfind('-') {
            let segment = &stem[i_dash + 1..];
            if !segment.is_empty() && is_numeric(segment) {
                return None;
            }
        }
    }

    Some(i_dot)
}

fn is_numeric(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(name: &str) -> (String, String) {
        let entry = classify(name, 4);
        (entry.basename, entry.extension)
    }

    #[test]
    fn test_ordinary_extension() {
        assert_eq!(split("archive.7z"), ("archive".into(), "7z".into()));
        assert_eq!(split("readme.txt"), ("readme".into(), "txt".into()));
    }

    #[test]
    fn test_no_dot_means_no_extension() {
        assert_eq!(split("makefile"), ("makefile".into(), String::new()));
    }

    #[test]
    fn test_hidden_names_have_no_extension() {
        assert_eq!(split(".bashrc"), (".bashrc".into(), String::new()));
        assert_eq!(split("."), (".".into(), String::new()));
    }

    #[test]
    fn test_trailing_dot_yields_dot_extension() {
        assert_eq!(split("name."), ("name".into(), ".".into()));
        assert_eq!(split("a.b."), ("a.b".into(), ".".into()));
    }

    #[test]
    fn test_overlong_extension_rejected() {
        assert_eq!(
            split("filelist.md5sum"),
            ("filelist.md5sum".into(), String::new())
        );
        // exactly at the limit is accepted
        assert_eq!(split("photo.jpeg"), ("photo".into(), "jpeg".into()));
    }

    #[test]
    fn test_numeric_veto() {
        assert_eq!(split("foo-2.18"), ("foo-2.18".into(), String::new()));
        // only the final dash segment is inspected
        assert_eq!(split("a-b-2.18"), ("a-b-2.18".into(), String::new()));
        // non-numeric dash segment keeps the extension
        assert_eq!(split("foo-bar.18"), ("foo-bar".into(), "18".into()));
        // no dash at all keeps the extension
        assert_eq!(split("foo.18"), ("foo".into(), "18".into()));
        // non-numeric candidate is never vetoed
        assert_eq!(split("foo-2.c"), ("foo-2".into(), "c".into()));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(split(""), (String::new(), String::new()));
        assert_eq!(split("..."), ("..".into(), ".".into()));
    }

    #[test]
    fn test_extension_length_bound_holds() {
        for limit in 1..6 {
            for name in ["a.b", "x.tar.gz", "v-1.100", "n.", "long.extension"] {
                let entry = classify(name, limit);
                let len = entry.extension.chars().count();
                assert!(
                    entry.extension.is_empty() || entry.extension == "." || len <= limit,
                    "classify({name:?}, {limit}) gave extension {:?}",
                    entry.extension
                );
            }
        }
    }

    #[test]
    fn test_transforms_apply_after_split() {
        let transforms = NameTransforms {
            force_lower: true,
            replace_spaces: Some("_".into()),
        };
        let entry = classify("My File.TXT", 4).transformed(&transforms);
        assert_eq!(entry.basename, "my_file");
        assert_eq!(entry.extension, "txt");
    }

    #[test]
    fn test_space_replacement_alone() {
        let transforms = NameTransforms {
            force_lower: false,
            replace_spaces: Some("%20".into()),
        };
        assert_eq!(transforms.apply("a b c"), "a%20b%20c");
    }
}
