//! Per-call score vector

use crate::lang::Lang;

/// Accumulated signal scores for one classification call.
///
/// Created fresh per call, populated by signal evaluation, adjusted by
/// arbitration, then discarded. Weights are positive integers; scores
/// accumulate additively and are uncapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreVec([u32; Lang::COUNT]);

impl ScoreVec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score for a label
    pub fn get(&self, lang: Lang) -> u32 {
        self.0[lang.index()]
    }

    /// Add a signal weight to a label's score
    pub fn add(&mut self, lang: Lang, weight: u32) {
        self.0[lang.index()] += weight;
    }

    /// Suppress a label entirely (arbitration override)
    pub fn zero(&mut self, lang: Lang) {
        self.0[lang.index()] = 0;
    }

    /// Whether any signal has fired for this label so far
    pub fn is_scored(&self, lang: Lang) -> bool {
        self.get(lang) > 0
    }

    /// Labels with a nonzero score, in canonical order
    pub fn nonzero(&self) -> impl Iterator<Item = (Lang, u32)> + '_ {
        Lang::CANONICAL
            .iter()
            .filter_map(|&lang| {
                let v = self.get(lang);
                (v > 0).then_some((lang, v))
            })
    }

    /// The winning label: strictly greatest score, ties broken by
    /// canonical iteration order (first maximum encountered wins). An
    /// all-zero vector yields `Unknown`.
    pub fn best(&self) -> Lang {
        let mut best = Lang::Unknown;
        let mut best_score = 0;
        for &lang in &Lang::CANONICAL {
            let v = self.get(lang);
            if v > best_score {
                best = lang;
                best_score = v;
            }
        }
        best
    }
}
