use std::cmp::Ordering;
use std::env;

/// Name ordering policy for one listing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameOrder {
    /// Collate using the locale named by the environment.
    #[default]
    Locale,
    /// Byte-wise ordinal comparison.
    Ascii,
    /// Byte-wise ordinal comparison after ASCII case folding.
    AsciiIgnoreCase,
}

/// What the environment's collation locale allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleSupport {
    /// A natural-language locale whose text we can collate.
    Natural(String),
    /// The C/POSIX locale, or none at all; plain byte order applies.
    Posix,
    /// A locale we cannot honor; byte order applies and a warning is due.
    Unsupported(String),
}

/// Resolve the collation locale from `LC_ALL`, `LC_COLLATE`, `LANG`,
/// in that order of precedence.
pub fn locale_support() -> LocaleSupport {
    let found = ["LC_ALL", "LC_COLLATE", "LANG"]
        .iter()
        .find_map(|var| env::var(var).ok().filter(|v| !v.is_empty()));

    let Some(value) = found else {
        return LocaleSupport::Posix;
    };
    if value == "C" || value == "POSIX" {
        return LocaleSupport::Posix;
    }

    // "en_US.UTF-8", "fr_FR.utf8@euro", bare "fr_FR"...  Anything with a
    // non-UTF-8 codeset is out of reach for our collation.
    match value.split('.').nth(1).map(|cs| cs.split('@').next().unwrap_or(cs)) {
        None => LocaleSupport::Natural(value),
        Some(codeset) if codeset.replace('-', "").eq_ignore_ascii_case("utf8") => {
            LocaleSupport::Natural(value)
        }
        Some(_) => LocaleSupport::Unsupported(value),
    }
}

/// A resolved comparison strategy.
///
/// Built once per listing pass and injected into the group index; the
/// index's sorted sets rely on the ordering staying fixed for their
/// whole lifetime.
#[derive(Debug, Clone)]
pub struct Collator {
    mode: CollateMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollateMode {
    Locale,
    Ascii,
    AsciiIgnoreCase,
}

impl Collator {
    /// Resolve an ordering policy against the current environment.
    ///
    /// A `Locale` request degrades to byte order when no usable locale
    /// exists; the caller is expected to have warned the user already.
    #[must_use]
    pub fn for_order(order: NameOrder) -> Self {
        let mode = match order {
            NameOrder::Ascii => CollateMode::Ascii,
            NameOrder::AsciiIgnoreCase => CollateMode::AsciiIgnoreCase,
            NameOrder::Locale => match locale_support() {
                LocaleSupport::Natural(_) => CollateMode::Locale,
                LocaleSupport::Posix | LocaleSupport::Unsupported(_) => CollateMode::Ascii,
            },
        };
        Self { mode }
    }

    /// Total order over names under the active policy.
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self.mode {
            CollateMode::Ascii => a.as_bytes().cmp(b.as_bytes()),
            CollateMode::AsciiIgnoreCase => compare_ascii_ignore_case(a, b),
            CollateMode::Locale => compare_collated(a, b),
        }
    }
}

fn compare_ascii_ignore_case(a: &str, b: &str) -> Ordering {
    fn folded(s: &str) -> impl Iterator<Item = u8> + '_ {
        s.bytes().map(|b| b.to_ascii_lowercase())
    }
    folded(a)
        .cmp(folded(b))
        .then_with(|| a.as_bytes().cmp(b.as_bytes()))
}

/// Approximates natural-language collation: case-insensitive at the
/// primary level, original text as the tiebreaker so the order stays total.
fn compare_collated(a: &str, b: &str) -> Ordering {
    fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
        s.chars().flat_map(char::to_lowercase)
    }
    folded(a).cmp(folded(b)).then_with(|| a.cmp(b))
}
