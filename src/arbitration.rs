//! Post-scoring arbitration
//!
//! Ordered override rules that resolve known confusions between
//! languages whose signals false-positive against each other. Rules run
//! strictly in table order and later rules observe the effects of
//! earlier ones; the order is part of the contract, not an
//! implementation accident. Do not reorder entries without re-running
//! the regression corpus in `tests/`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::lang::Lang;
use crate::score::ScoreVec;

/// One named override, applied in sequence.
pub struct Rule {
    pub name: &'static str,
    apply: fn(&mut ScoreVec, &str),
}

/// The arbitration sequence. Each entry is a conditional zeroing or
/// adjustment keyed on current scores and/or raw substrings of the
/// input.
pub static RULES: &[Rule] = &[
    Rule {
        name: "python-vs-matlab",
        apply: python_vs_matlab,
    },
    Rule {
        name: "go-vs-r",
        apply: go_vs_r,
    },
    Rule {
        name: "perl-vs-php",
        apply: perl_vs_php,
    },
    Rule {
        name: "elixir-vs-ruby",
        apply: elixir_vs_ruby,
    },
    Rule {
        name: "markup-suppression",
        apply: markup_suppression,
    },
    Rule {
        name: "typescript-over-javascript",
        apply: typescript_over_javascript,
    },
    Rule {
        name: "javascript-vs-css",
        apply: javascript_vs_css,
    },
    Rule {
        name: "css-vs-object-literal",
        apply: css_vs_object_literal,
    },
];

/// Apply every rule, in order, to the populated score vector.
pub fn arbitrate(scores: &mut ScoreVec, code: &str) {
    for rule in RULES {
        let before = *scores;
        (rule.apply)(scores, code);
        if *scores != before {
            debug!(rule = rule.name, "arbitration rule adjusted scores");
        }
    }
}

static HASH_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|\s)#").expect("pattern"));
static PERCENT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*%").expect("pattern"));
static SUB_DEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bsub\s+\w+").expect("pattern"));
static FUNCTION_DEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfunction\s+\w+").expect("pattern"));
static JS_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(const|let|var|function|return|import|export)\b").expect("pattern"));
static CSS_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.#:][\w-]+\s*)\{").expect("pattern"));
static EXPORT_KW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bexport\b").expect("pattern"));

/// Python-looking evidence (any python score, or a `#` comment) zeroes
/// MATLAB, unless a line-leading `%` comment exists and MATLAB has a
/// strong score already.
fn python_vs_matlab(scores: &mut ScoreVec, code: &str) {
    if scores.is_scored(Lang::Python) || HASH_COMMENT.is_match(code) {
        let strong_matlab = PERCENT_LINE.is_match(code) && scores.get(Lang::Matlab) > 60;
        if !strong_matlab {
            scores.zero(Lang::Matlab);
        }
    }
}

/// The `<-` token is ambiguous between R assignment and Go channel
/// receive; existing Go evidence wins, strong R evidence zeroes Go.
/// The `:=` token is Go-only and zeroes R regardless.
fn go_vs_r(scores: &mut ScoreVec, code: &str) {
    if code.contains("<-") {
        if scores.is_scored(Lang::Go) {
            scores.zero(Lang::R);
        } else if scores.get(Lang::R) > 50 {
            scores.zero(Lang::Go);
        }
    }
    if code.contains(":=") {
        scores.zero(Lang::R);
    }
}

/// `sub name` is Perl, `function name` is PHP. The PHP check runs
/// second on purpose: when both idioms appear, the later zeroing wins.
fn perl_vs_php(scores: &mut ScoreVec, code: &str) {
    if scores.is_scored(Lang::Perl) && SUB_DEF.is_match(code) {
        scores.zero(Lang::Php);
    }
    if scores.is_scored(Lang::Php) && FUNCTION_DEF.is_match(code) {
        scores.zero(Lang::Perl);
    }
}

/// Ruby's def/end signals fire on most Elixir modules; conclusive
/// Elixir evidence suppresses them.
fn elixir_vs_ruby(scores: &mut ScoreVec, _code: &str) {
    if scores.get(Lang::Elixir) >= 80 {
        scores.zero(Lang::Ruby);
    }
}

/// Template parameters and Dart generics look like markup tags to the
/// HTML signals.
fn markup_suppression(scores: &mut ScoreVec, _code: &str) {
    if scores.get(Lang::Cpp) >= 50 || scores.get(Lang::Dart) >= 50 {
        scores.zero(Lang::Html);
    }
}

/// TypeScript is a superset of JavaScript; any TypeScript evidence
/// means the stricter label is the right one.
fn typescript_over_javascript(scores: &mut ScoreVec, _code: &str) {
    if scores.is_scored(Lang::TypeScript) {
        scores.zero(Lang::JavaScript);
    }
}

/// JS keywords with no selector-shaped rule block mean the brace-colon
/// CSS signals were spurious.
fn javascript_vs_css(scores: &mut ScoreVec, code: &str) {
    if JS_KEYWORDS.is_match(code) && !CSS_BLOCK.is_match(code) {
        scores.zero(Lang::Css);
    }
}

/// Arrow functions and `export` are JS object-literal evidence that
/// outweighs a spurious brace-colon match.
fn css_vs_object_literal(scores: &mut ScoreVec, code: &str) {
    if scores.is_scored(Lang::Css) && (code.contains("=>") || EXPORT_KW.is_match(code)) {
        scores.zero(Lang::Css);
    }
}
