use std::fmt;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

/// Minimum Jaro-Winkler score for a fuzzy substance match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// The ingredient held by a container.
///
/// `Unset` marks a container whose ingredient has not been chosen yet. It is
/// excluded from every total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Substance {
    Coco,
    Sugar,
    #[default]
    Unset,
}

impl Substance {
    /// Substances a user can pick.
    pub const SELECTABLE: [Substance; 2] = [Substance::Coco, Substance::Sugar];

    pub fn name(&self) -> &'static str {
        match self {
            Substance::Coco => "Coco",
            Substance::Sugar => "Sugar",
            Substance::Unset => "Unset",
        }
    }

    /// Whether this substance takes part in aggregation.
    #[inline]
    pub fn is_set(&self) -> bool {
        !matches!(self, Substance::Unset)
    }

    /// Resolve free text to a substance.
    ///
    /// Exact (case-insensitive) names win, then the closest fuzzy match above
    /// the threshold. Blank or unrecognised text resolves to `Unset`.
    pub fn parse(text: &str) -> Substance {
        let input = text.trim().to_lowercase();
        if input.is_empty() {
            return Substance::Unset;
        }

        if let Some(exact) = Self::SELECTABLE
            .into_iter()
            .find(|s| s.name().to_lowercase() == input)
        {
            return exact;
        }

        Self::SELECTABLE
            .into_iter()
            .map(|s| (s, jaro_winkler(&s.name().to_lowercase(), &input)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(s, _)| s)
            .unwrap_or(Substance::Unset)
    }
}

impl fmt::Display for Substance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
