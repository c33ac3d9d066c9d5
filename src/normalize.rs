//! Label normalization
//!
//! Maps user-facing language names as typed in a UI picker ("py", "C++",
//! "node", " TS ") onto the canonical label set. Strings that normalize
//! to nothing canonical are preserved as `Claim::Other`, which can never
//! equal a detected label and therefore produces a deterministic
//! rejection rather than an error.

use crate::lang::Lang;

/// A normalized claimed language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Claim {
    /// A member of the canonical label set (including `Unknown`).
    Canonical(Lang),
    /// Unrecognized input, lowercased with all whitespace removed.
    Other(String),
}

impl Claim {
    /// Canonical key, or the cleaned raw string for unrecognized input
    pub fn key(&self) -> &str {
        match self {
            Self::Canonical(lang) => lang.key(),
            Self::Other(s) => s,
        }
    }

    /// Display name for presentation; unrecognized input shown as-is
    pub fn display_name(&self) -> &str {
        match self {
            Self::Canonical(lang) => lang.display_name(),
            Self::Other(s) => s,
        }
    }
}

/// Exact aliases checked before the prefix rules.
const ALIASES: &[(&str, Lang)] = &[
    ("c++", Lang::Cpp),
    ("cpp", Lang::Cpp),
    ("c#", Lang::Csharp),
    ("csharp", Lang::Csharp),
    ("js", Lang::JavaScript),
    ("javascript", Lang::JavaScript),
    ("node", Lang::JavaScript),
    ("ts", Lang::TypeScript),
    ("typescript", Lang::TypeScript),
];

/// Prefix rules checked in order; first match wins.
const PREFIXES: &[(&str, Lang)] = &[
    ("py", Lang::Python),
    ("go", Lang::Go),
    ("rb", Lang::Ruby),
    ("php", Lang::Php),
    ("matlab", Lang::Matlab),
];

/// Normalize an arbitrary user-supplied language name.
///
/// Case-insensitive, with all whitespace stripped before matching so
/// the function is idempotent over its own output. Empty input maps to
/// `Unknown`.
pub fn normalize(raw: &str) -> Claim {
    let cleaned: String = raw.to_lowercase().split_whitespace().collect();
    if cleaned.is_empty() {
        return Claim::Canonical(Lang::Unknown);
    }

    for (alias, lang) in ALIASES {
        if cleaned == *alias {
            return Claim::Canonical(*lang);
        }
    }

    for (prefix, lang) in PREFIXES {
        if cleaned.starts_with(prefix) {
            return Claim::Canonical(*lang);
        }
    }

    match Lang::from_key(&cleaned) {
        Some(lang) => Claim::Canonical(lang),
        None => Claim::Other(cleaned),
    }
}
