//! The extension-keyed group index built up during one listing pass.

use crate::classify::ClassifiedEntry;
use crate::order::Collator;
use hashbrown::HashMap;

/// A set of unique names kept sorted under a fixed collator.
#[derive(Debug, Clone, Default)]
pub struct SortedNames {
    names: Vec<String>,
}

impl SortedNames {
    /// Insert keeping order; a name already present is a no-op.
    /// Returns true when the name was actually added.
    fn insert(&mut self, name: String, collator: &Collator) -> bool {
        match self
            .names
            .binary_search_by(|probe| collator.compare(probe, &name))
        {
            Ok(_) => false,
            Err(pos) => {
                self.names.insert(pos, name);
                true
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> IntoIterator for &'a SortedNames {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Accumulates classified names for one listing pass.
///
/// Extension groups hold basenames; directory names live in their own set
/// and are never extension-split. The extension keys are kept in a sorted
/// set of their own, since the group map does not order them. Write-once-
/// then-read: there is no removal.
#[derive(Debug, Clone)]
pub struct GroupIndex {
    collator: Collator,
    dirs: SortedNames,
    ext_keys: SortedNames,
    groups: HashMap<String, SortedNames>,
}

impl GroupIndex {
    /// The collator is fixed for the index's lifetime; the sorted sets
    /// depend on it never changing under them.
    #[must_use]
    pub fn new(collator: Collator) -> Self {
        Self {
            collator,
            dirs: SortedNames::default(),
            ext_keys: SortedNames::default(),
            groups: HashMap::new(),
        }
    }

    pub fn add_directory(&mut self, name: String) {
        self.dirs.insert(name, &self.collator);
    }

    pub fn add_file(&mut self, entry: ClassifiedEntry) {
        let ClassifiedEntry {
            basename,
            extension,
        } = entry;
        let collator = &self.collator;
        self.ext_keys.insert(extension.clone(), collator);
        self.groups
            .entry(extension)
            .or_default()
            .insert(basename, collator);
    }

    /// Known extension keys in collation order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.ext_keys.iter().map(String::as_str)
    }

    /// The ordered basenames filed under an extension; empty for an
    /// extension never seen.
    #[must_use]
    pub fn basenames_for(&self, extension: &str) -> &[String] {
        self.groups
            .get(extension)
            .map_or(&[], SortedNames::as_slice)
    }

    #[must_use]
    pub fn directories(&self) -> &SortedNames {
        &self.dirs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.ext_keys.is_empty()
    }
}
