//! Static signal table and the scoring pass
//!
//! A signal is a weighted pattern-match rule contributing to one
//! language's score. The table is data, evaluated by a small
//! interpreter (`evaluate`), so every rule is auditable and testable on
//! its own rather than buried in a chain of conditionals.
//!
//! # Evaluation order
//!
//! Signals run in one deterministic left-to-right pass, grouped by
//! family: C-family, then scripting, then web, then systems/data. The
//! grouping is mostly for readability, but the order is load-bearing in
//! one place: the C `struct` signal consults the C++ score accumulated
//! so far (`unless_scored`), so C++ signals must precede C signals.
//! Keep new signals inside their family group.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::lang::Lang;
use crate::score::ScoreVec;

/// A single pattern condition.
enum Matcher {
    /// Compiled regular expression
    Pattern(Regex),
    /// Plain substring containment
    Literal(&'static str),
}

impl Matcher {
    fn matches(&self, code: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(code),
            Self::Literal(s) => code.contains(s),
        }
    }
}

/// A weighted detection rule targeting one language.
struct Signal {
    lang: Lang,
    weight: u32,
    /// Every matcher here must hit for the signal to fire.
    requires: Vec<Matcher>,
    /// No matcher here may hit.
    forbids: Vec<Matcher>,
    /// Skip the signal if this language has already scored.
    unless_scored: Option<Lang>,
}

fn re(source: &str) -> Regex {
    Regex::new(source).expect("signal pattern must compile")
}

impl Signal {
    fn pattern(lang: Lang, weight: u32, source: &str) -> Self {
        Self {
            lang,
            weight,
            requires: vec![Matcher::Pattern(re(source))],
            forbids: Vec::new(),
            unless_scored: None,
        }
    }

    fn literal(lang: Lang, weight: u32, needle: &'static str) -> Self {
        Self {
            lang,
            weight,
            requires: vec![Matcher::Literal(needle)],
            forbids: Vec::new(),
            unless_scored: None,
        }
    }

    fn and_pattern(mut self, source: &str) -> Self {
        self.requires.push(Matcher::Pattern(re(source)));
        self
    }

    fn and_literal(mut self, needle: &'static str) -> Self {
        self.requires.push(Matcher::Literal(needle));
        self
    }

    fn not_pattern(mut self, source: &str) -> Self {
        self.forbids.push(Matcher::Pattern(re(source)));
        self
    }

    fn not_literal(mut self, needle: &'static str) -> Self {
        self.forbids.push(Matcher::Literal(needle));
        self
    }

    fn unless_scored(mut self, lang: Lang) -> Self {
        self.unless_scored = Some(lang);
        self
    }

    /// Whether this signal fires against the given code, considering
    /// the scores accumulated earlier in the pass.
    fn fires(&self, code: &str, scores: &ScoreVec) -> bool {
        if let Some(guard) = self.unless_scored {
            if scores.is_scored(guard) {
                return false;
            }
        }
        self.requires.iter().all(|m| m.matches(code))
            && !self.forbids.iter().any(|m| m.matches(code))
    }
}

/// The full signal configuration, compiled once at first use.
static SIGNALS: Lazy<Vec<Signal>> = Lazy::new(|| {
    use Lang::*;

    vec![
        // ==================================================================
        // C-family: C / C++ / Java / C#
        // ==================================================================

        // C++
        Signal::pattern(
            Cpp,
            100,
            r"#include\s+<(iostream|vector|string|algorithm|map|set|queue|stack|list|memory|fstream)>",
        ),
        Signal::pattern(Cpp, 100, r"\busing\s+namespace\s+std;"),
        Signal::pattern(Cpp, 50, r"\bstd::|\bcout\s*<<"),
        Signal::pattern(Cpp, 50, r"\btemplate\s*<"),
        // C. The struct signal only counts when no C++ evidence exists yet,
        // otherwise every C++ class-like body would double-score C.
        Signal::pattern(C, 100, r"#include\s+<stdio\.h>"),
        Signal::pattern(C, 20, r"\bprintf\s*\("),
        Signal::pattern(C, 20, r"\bstruct\s+\w+\s*\{").unless_scored(Cpp),
        // Java
        Signal::pattern(Java, 100, r"\bpublic\s+static\s+void\s+main\s*\(String"),
        Signal::pattern(Java, 80, r"\bSystem\.out\.print"),
        Signal::pattern(Java, 60, r"\bimport\s+java\."),
        // C#
        Signal::pattern(Csharp, 100, r"\busing\s+System;"),
        Signal::pattern(Csharp, 80, r"\bConsole\.Write"),
        Signal::pattern(Csharp, 50, r"\bpublic\s+class\s+\w+")
            .and_pattern(r"\{\s*get;\s*set;\s*\}"),
        // ==================================================================
        // Scripting: Python / Ruby / PHP / Perl
        // ==================================================================

        // Python
        Signal::pattern(Python, 60, r"\bdef\s+\w+\(.*\):"),
        Signal::pattern(Python, 20, r"(?m)^\s*print\("),
        Signal::pattern(Python, 50, r"\[.*for\s+\w+\s+in\s+.*\]"),
        Signal::pattern(Python, 50, r"\bimport\s+[\w.]+|\bfrom\s+[\w.]+\s+import"),
        Signal::pattern(Python, 20, r"(?m):\s*$"),
        Signal::pattern(Python, 50, r"\belif\b|if __name__"),
        // Ruby
        Signal::pattern(Ruby, 50, r"\bdef\s+\w+").and_pattern(r"\bend\b"),
        Signal::pattern(Ruby, 40, r"\bputs\b"),
        Signal::pattern(Ruby, 50, r"\battr_accessor\b"),
        Signal::pattern(Ruby, 30, r"\.times\s+do\b"),
        // PHP
        Signal::pattern(Php, 200, r"<\?php|<\?="),
        Signal::pattern(Php, 30, r"\$\w+"),
        Signal::pattern(Php, 30, r"\bfunction\s+\w+\("),
        // Perl
        Signal::pattern(Perl, 60, r"\bmy\s*\(?\s*\$\w+"),
        Signal::pattern(Perl, 60, r"\buse\s+strict;"),
        Signal::pattern(Perl, 80, r"\bsub\s+\w+\s*\{"),
        // ==================================================================
        // Web: JavaScript / TypeScript / HTML / CSS / Dart / Elixir
        // ==================================================================

        // JavaScript
        Signal::pattern(JavaScript, 40, r"\bconsole\.(log|warn|error|info)\("),
        Signal::pattern(JavaScript, 20, r"\bvar\s+\w+\s*="),
        Signal::pattern(JavaScript, 20, r"\bconst\s+\w+\s*="),
        Signal::pattern(JavaScript, 30, r"\bfunction\s+\w+\s*\("),
        Signal::pattern(JavaScript, 30, r#"\bimport\s+.*\s+from\s+['"]"#),
        Signal::pattern(
            JavaScript,
            30,
            r"\bexport\s+(default\s+)?(const|function|class|let|var)",
        ),
        Signal::pattern(JavaScript, 20, r"\b(document|window|global|process)\."),
        Signal::pattern(JavaScript, 20, r"\bJSON\.(parse|stringify)"),
        Signal::literal(JavaScript, 20, "=>"),
        // TypeScript
        Signal::pattern(
            TypeScript,
            60,
            r":\s*(string|number|boolean|any|void|unknown|never|object)\b",
        ),
        Signal::pattern(TypeScript, 60, r"\binterface\s+[A-Z]\w*"),
        Signal::pattern(TypeScript, 50, r"\btype\s+\w+\s*="),
        Signal::pattern(TypeScript, 50, r"\benum\s+\w+"),
        Signal::pattern(TypeScript, 50, r"\bimplements\s+\w+"),
        Signal::pattern(TypeScript, 30, r"\bas\s+[A-Z]\w*"),
        Signal::pattern(TypeScript, 30, r"\breadonly\s+"),
        // HTML
        Signal::pattern(Html, 200, r"(?i)<!DOCTYPE\s+html>"),
        Signal::pattern(
            Html,
            50,
            r"(?i)</?(html|body|div|span|h1|p|script|style|ul|li|table)\b",
        ),
        // CSS
        Signal::pattern(Css, 80, r"(?i)([.#:@][\w-]+\s*|[a-z0-9]+\s*)\{[^{}]*:[^{}]*\}"),
        Signal::pattern(Css, 60, r"--[\w-]+\s*:"),
        Signal::pattern(Css, 60, r"@(media|import|keyframes|font-face|charset)\b"),
        Signal::pattern(Css, 20, r":\s*#[0-9a-fA-F]{3,6}\b"),
        Signal::pattern(Css, 20, r"\b(px|rem|em|vh|vw|rgba|hsl)\b"),
        // Dart
        Signal::pattern(Dart, 50, r"\bvoid\s+main\(\)"),
        Signal::pattern(Dart, 50, r"Future<.*>"),
        Signal::pattern(Dart, 60, r#"\bimport\s+['"]package:"#),
        // Elixir
        Signal::pattern(Elixir, 100, r"\bdefmodule\b"),
        Signal::literal(Elixir, 50, "|>"),
        Signal::pattern(Elixir, 80, r"\bdef\s+.*\s+do\b"),
        // ==================================================================
        // Systems / data: Go / Rust / Swift / Kotlin / R / MATLAB / SQL
        // ==================================================================

        // Go
        Signal::pattern(Go, 100, r"(?m)^package\s+main"),
        Signal::pattern(Go, 30, r"\bfunc\s+\w+\("),
        Signal::pattern(Go, 60, r"chan\s+\w+"),
        Signal::literal(Go, 20, ":="),
        // Rust
        Signal::pattern(Rust, 80, r"\bfn\s+main\("),
        Signal::pattern(Rust, 60, r"\bimpl\s+\w+"),
        Signal::pattern(Rust, 60, r"println!\("),
        // Swift
        Signal::pattern(Swift, 80, r"\bimport\s+(Swift|Foundation|UIKit|SwiftUI)"),
        Signal::pattern(Swift, 50, r"\bfunc\s+\w+\(.*\)\s*->"),
        Signal::pattern(Swift, 50, r"\bguard\s+let\b"),
        // Kotlin
        Signal::pattern(Kotlin, 80, r"\bfun\s+main\("),
        Signal::pattern(Kotlin, 60, r"\bdata\s+class\s+\w+"),
        Signal::pattern(Kotlin, 20, r"\bval\s+\w+").and_literal("fun"),
        // R. Assignment arrows are the primary evidence; print/cat and
        // bare semicolons exist as tie-breakers against Python and MATLAB
        // in short generic scripts.
        Signal::pattern(R, 50, r"\w+\s*<-"),
        Signal::pattern(R, 80, r"\w+\s*<-\s*(data\.frame|c\(|rnorm|read\.)"),
        Signal::literal(R, 60, "%>%"),
        Signal::pattern(R, 20, r"\b(print|cat|paste|head|tail|summary|plot)\s*\("),
        Signal::literal(R, 15, ";").not_pattern(r"(?m)^\s*(import|def|class)\s+"),
        // MATLAB. Output-suppressing trailing semicolons and the bare
        // `end` keyword are weak alone but decisive in short scripts.
        Signal::pattern(Matlab, 40, r"(?m)^\s*%").not_literal("#"),
        Signal::pattern(Matlab, 30, r"(?s)=\s*\[.*?\];?"),
        Signal::pattern(
            Matlab,
            50,
            r"\b(disp|numel|zeros|ones|eye|repmat|linspace|mod|size|length|plot|fprintf)\s*\(",
        ),
        Signal::pattern(Matlab, 60, r"\[.*~.*\]\s*="),
        Signal::pattern(Matlab, 20, r"(?m);\s*$"),
        Signal::pattern(Matlab, 20, r"(?m)\bend\s*$").not_literal("def "),
        // SQL
        Signal::pattern(
            Sql,
            60,
            r"(?im)^\s*(SELECT|INSERT|UPDATE|DELETE|CREATE|DROP)\b",
        ),
    ]
});

/// Run the scoring pass: evaluate every signal against the code, in
/// table order, and return the accumulated score vector.
pub fn evaluate(code: &str) -> ScoreVec {
    let mut scores = ScoreVec::new();
    for signal in SIGNALS.iter() {
        if signal.fires(code, &scores) {
            scores.add(signal.lang, signal.weight);
            trace!(
                lang = signal.lang.key(),
                weight = signal.weight,
                "signal fired"
            );
        }
    }
    scores
}
