//! Detection and submission verification entry points

use serde::Serialize;
use tracing::debug;

use crate::arbitration;
use crate::lang::Lang;
use crate::normalize::{normalize, Claim};
use crate::signals;

/// Outcome of verifying a submission against a claimed language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Whether the detected language exactly matches the claimed one.
    pub accepted: bool,
    /// The language the detector settled on.
    pub detected: Lang,
}

/// Classify a code snippet.
///
/// Pure and deterministic: two calls with identical input yield
/// identical output. Empty or whitespace-only input yields `Unknown`;
/// classification never fails.
pub fn detect(code: &str) -> Lang {
    if code.trim().is_empty() {
        return Lang::Unknown;
    }

    let mut scores = signals::evaluate(code);
    arbitration::arbitrate(&mut scores, code);

    let best = scores.best();
    debug!(
        detected = best.key(),
        score = scores.get(best),
        "classified snippet"
    );
    best
}

/// Verify a submission: normalize the claimed label, detect the actual
/// language, and accept only on exact canonical equality. There is no
/// partial credit; an unrecognized claim can never match.
pub fn verify(code: &str, claimed: &str) -> Verdict {
    let claim = normalize(claimed);
    let detected = detect(code);
    let accepted = matches!(&claim, Claim::Canonical(lang) if *lang == detected);
    Verdict { accepted, detected }
}
