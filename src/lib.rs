//! Lexident: heuristic programming-language classifier
//!
//! Classifies a snippet of source code into one of a fixed set of
//! language labels using weighted regex signals, then resolves known
//! confusions between similar languages (Python vs MATLAB, Go vs R,
//! TypeScript vs JavaScript, PHP vs Perl, CSS vs JS object literals,
//! HTML vs markup-emitting C++/Dart) with an ordered arbitration pass.
//! A submission verifier composes the detector with a label normalizer
//! and returns an accept/reject verdict plus the detected label.
//!
//! This is a lexical heuristic, not a parser: it never builds an AST or
//! validates syntax, and it never fails — degenerate input maps to the
//! `Unknown` label. Classification is a pure function over the input
//! string; all configuration (label set, signal table, arbitration
//! rules) is immutable process-wide state, safe for concurrent reads.
//!
//! # Example
//!
//! ```
//! use lexident::{detect, verify, Lang};
//!
//! assert_eq!(detect("fn main() { println!(\"hi\"); }"), Lang::Rust);
//!
//! let verdict = verify("let x: number = 5;", "javascript");
//! assert!(!verdict.accepted);
//! assert_eq!(verdict.detected, Lang::TypeScript);
//! ```

pub mod arbitration;
pub mod cli;
pub mod detector;
pub mod error;
pub mod lang;
pub mod normalize;
pub mod score;
pub mod signals;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use detector::{detect, verify, Verdict};
pub use error::{LexidentError, Result};
pub use lang::Lang;
pub use normalize::{normalize, Claim};
pub use score::ScoreVec;
pub use signals::evaluate;
