//! Six-band score distribution over grand totals.

use serde::Serialize;

/// Fixed score bands over [0, 10]. All bands are half-open except the
/// top one, which includes 10 itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    #[serde(rename = "< 5")]
    Below5,
    #[serde(rename = "5 - <6")]
    From5,
    #[serde(rename = "6 - <7")]
    From6,
    #[serde(rename = "7 - <8")]
    From7,
    #[serde(rename = "8 - <9")]
    From8,
    #[serde(rename = "9 - 10")]
    From9,
}

/// All bands in display order.
pub const BANDS: [ScoreBand; 6] = [
    ScoreBand::Below5,
    ScoreBand::From5,
    ScoreBand::From6,
    ScoreBand::From7,
    ScoreBand::From8,
    ScoreBand::From9,
];

impl ScoreBand {
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Below5 => "< 5",
            ScoreBand::From5 => "5 - <6",
            ScoreBand::From6 => "6 - <7",
            ScoreBand::From7 => "7 - <8",
            ScoreBand::From8 => "8 - <9",
            ScoreBand::From9 => "9 - 10",
        }
    }

    /// Band a grand total falls into. Every score maps to exactly one
    /// band; scores of 10 (or above, from over-weighted keys) land in
    /// the top band.
    pub fn for_score(score: f64) -> ScoreBand {
        if score < 5.0 {
            ScoreBand::Below5
        } else if score < 6.0 {
            ScoreBand::From5
        } else if score < 7.0 {
            ScoreBand::From6
        } else if score < 8.0 {
            ScoreBand::From7
        } else if score < 9.0 {
            ScoreBand::From8
        } else {
            ScoreBand::From9
        }
    }
}

/// Student counts per band, in fixed band order, zero-filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub counts: [usize; 6],
}

impl Distribution {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Count students per band over their grand totals.
pub fn summarize(totals: impl Iterator<Item = f64>) -> Distribution {
    let mut counts = [0usize; 6];
    for total in totals {
        counts[ScoreBand::for_score(total) as usize] += 1;
    }
    Distribution { counts }
}

#[cfg(test)]
#[path = "distribution_test.rs"]
mod tests;
