use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Score threshold below which an area counts as needing support.
pub const SUPPORT_THRESHOLD: f64 = 70.0;

/// The three assessed dimensions, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreArea {
    Reading,
    Math,
    Focus,
}

impl ScoreArea {
    /// Canonical evaluation order. Weak areas are always reported in this
    /// order, never by score magnitude.
    pub const ALL: [ScoreArea; 3] = [ScoreArea::Reading, ScoreArea::Math, ScoreArea::Focus];
}

impl fmt::Display for ScoreArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreArea::Reading => write!(f, "Reading"),
            ScoreArea::Math => write!(f, "Math"),
            ScoreArea::Focus => write!(f, "Focus"),
        }
    }
}

/// Overall support need, from the averaged scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportTier {
    Intensive,
    Moderate,
    LightTouch,
}

impl fmt::Display for SupportTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportTier::Intensive => write!(f, "Intensive"),
            SupportTier::Moderate => write!(f, "Moderate"),
            SupportTier::LightTouch => write!(f, "Light Touch"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown support tier label: {0}")]
pub struct ParseTierError(String);

impl FromStr for SupportTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Intensive" => Ok(SupportTier::Intensive),
            "Moderate" => Ok(SupportTier::Moderate),
            "Light Touch" => Ok(SupportTier::LightTouch),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}

/// Derived assessment for one record. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportAssessment {
    pub tier: SupportTier,
    pub weak_areas: Vec<ScoreArea>,
}

impl SupportAssessment {
    /// Render as `"{tier}: {comma-joined weak areas}"`. An empty weak-area
    /// set renders as "General Support".
    pub fn label(&self) -> String {
        if self.weak_areas.is_empty() {
            format!("{}: General Support", self.tier)
        } else {
            let areas: Vec<String> = self.weak_areas.iter().map(|a| a.to_string()).collect();
            format!("{}: {}", self.tier, areas.join(", "))
        }
    }
}

impl fmt::Display for SupportAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Categorize the support level for one set of intake scores.
///
/// An area is weak iff its score is strictly below [`SUPPORT_THRESHOLD`].
/// The tier comes from the plain average: `< 50` Intensive, `< 70` Moderate,
/// otherwise Light Touch. Both comparisons are strict, so an average of
/// exactly 50 is Moderate and exactly 70 is Light Touch.
///
/// Total over all inputs. Out-of-range values go through the same
/// arithmetic; NaN compares false everywhere, so NaN scores read as
/// not-weak and a NaN average falls through to Light Touch.
pub fn classify(reading: f64, math: f64, focus: f64) -> SupportAssessment {
    let mut weak_areas = Vec::new();
    for (area, score) in ScoreArea::ALL.iter().zip([reading, math, focus]) {
        if score < SUPPORT_THRESHOLD {
            weak_areas.push(*area);
        }
    }

    let avg = (reading + math + focus) / 3.0;
    let tier = if avg < 50.0 {
        SupportTier::Intensive
    } else if avg < 70.0 {
        SupportTier::Moderate
    } else {
        SupportTier::LightTouch
    };

    SupportAssessment { tier, weak_areas }
}
