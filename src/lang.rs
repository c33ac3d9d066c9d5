//! Canonical language labels and the friendly-name table

use serde::Serialize;

/// Supported programming languages plus the `Unknown` sentinel.
///
/// The set is closed and fixed for the process lifetime. `CANONICAL`
/// defines the iteration order used to break score ties (first maximum
/// encountered wins), so the order here is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    C,
    Cpp,
    Java,
    JavaScript,
    TypeScript,
    Python,
    Go,
    Rust,
    R,
    Php,
    Perl,
    Ruby,
    Swift,
    Kotlin,
    Dart,
    Matlab,
    Sql,
    Html,
    Css,
    Elixir,
    Csharp,
    Unknown,
}

impl Lang {
    /// Number of labels including `Unknown`, for dense score storage.
    pub const COUNT: usize = 22;

    /// All real languages, in tie-break order. `Unknown` is excluded:
    /// it only wins by default when every score is zero.
    pub const CANONICAL: [Lang; 21] = [
        Lang::C,
        Lang::Cpp,
        Lang::Java,
        Lang::JavaScript,
        Lang::TypeScript,
        Lang::Python,
        Lang::Go,
        Lang::Rust,
        Lang::R,
        Lang::Php,
        Lang::Perl,
        Lang::Ruby,
        Lang::Swift,
        Lang::Kotlin,
        Lang::Dart,
        Lang::Matlab,
        Lang::Sql,
        Lang::Html,
        Lang::Css,
        Lang::Elixir,
        Lang::Csharp,
    ];

    /// Get the canonical lowercase key of the label
    pub fn key(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::R => "r",
            Self::Php => "php",
            Self::Perl => "perl",
            Self::Ruby => "ruby",
            Self::Swift => "swift",
            Self::Kotlin => "kotlin",
            Self::Dart => "dart",
            Self::Matlab => "matlab",
            Self::Sql => "sql",
            Self::Html => "html",
            Self::Css => "css",
            Self::Elixir => "elixir",
            Self::Csharp => "csharp",
            Self::Unknown => "unknown",
        }
    }

    /// Get the human-readable display name (presentation only)
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cpp => "C++",
            Self::Java => "Java",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Python => "Python",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::R => "R",
            Self::Php => "PHP",
            Self::Perl => "Perl",
            Self::Ruby => "Ruby",
            Self::Swift => "Swift",
            Self::Kotlin => "Kotlin",
            Self::Dart => "Dart",
            Self::Matlab => "MATLAB",
            Self::Sql => "SQL",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Elixir => "Elixir",
            Self::Csharp => "C#",
            Self::Unknown => "Unknown",
        }
    }

    /// Look up a label by its canonical key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "c" => Some(Self::C),
            "cpp" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            "javascript" => Some(Self::JavaScript),
            "typescript" => Some(Self::TypeScript),
            "python" => Some(Self::Python),
            "go" => Some(Self::Go),
            "rust" => Some(Self::Rust),
            "r" => Some(Self::R),
            "php" => Some(Self::Php),
            "perl" => Some(Self::Perl),
            "ruby" => Some(Self::Ruby),
            "swift" => Some(Self::Swift),
            "kotlin" => Some(Self::Kotlin),
            "dart" => Some(Self::Dart),
            "matlab" => Some(Self::Matlab),
            "sql" => Some(Self::Sql),
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "elixir" => Some(Self::Elixir),
            "csharp" => Some(Self::Csharp),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Dense index for score storage
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
