use serde::{Deserialize, Serialize};

use crate::classify::{classify, SupportAssessment};

/// One family intake record. Immutable per run; supplied externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyRecord {
    pub family_id: u32,
    pub family_name: String,
    pub child_age: u8,
    pub reading_score: f64,
    pub math_score: f64,
    pub focus_score: f64,
}

impl FamilyRecord {
    pub fn assess(&self) -> SupportAssessment {
        classify(self.reading_score, self.math_score, self.focus_score)
    }
}

/// The fixed demo roster awaiting intake processing.
pub fn sample_roster() -> Vec<FamilyRecord> {
    vec![
        FamilyRecord {
            family_id: 1,
            family_name: "Johnson Family".to_string(),
            child_age: 8,
            reading_score: 65.0,
            math_score: 80.0,
            focus_score: 55.0,
        },
        FamilyRecord {
            family_id: 2,
            family_name: "Chen Family".to_string(),
            child_age: 10,
            reading_score: 45.0,
            math_score: 50.0,
            focus_score: 60.0,
        },
        FamilyRecord {
            family_id: 3,
            family_name: "Garcia Family".to_string(),
            child_age: 7,
            reading_score: 85.0,
            math_score: 90.0,
            focus_score: 88.0,
        },
        FamilyRecord {
            family_id: 4,
            family_name: "Wilson Family".to_string(),
            child_age: 9,
            reading_score: 40.0,
            math_score: 35.0,
            focus_score: 45.0,
        },
        FamilyRecord {
            family_id: 5,
            family_name: "Brown Family".to_string(),
            child_age: 11,
            reading_score: 70.0,
            math_score: 65.0,
            focus_score: 72.0,
        },
    ]
}
