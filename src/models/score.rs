use serde::{Deserialize, Serialize};

use crate::models::skill::SkillSet;

/// Caller supplied weights for the final score.
///
/// The weights are applied literally and are not required to sum to 1. A pair
/// summing above 1 can push the final score above 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill_weight: f64,
    pub text_weight: f64,
}

impl ScoringWeights {
    pub fn new(skill_weight: f64, text_weight: f64) -> Self {
        Self {
            skill_weight,
            text_weight,
        }
    }

    pub fn sum(&self) -> f64 {
        self.skill_weight + self.text_weight
    }

    /// True when the pair keeps the final score inside [0, 100].
    pub fn is_normalized(&self) -> bool {
        self.skill_weight >= 0.0
            && self.text_weight >= 0.0
            && (self.sum() - 1.0).abs() < 1e-9
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_weight: 0.7,
            text_weight: 0.3,
        }
    }
}

/// Result of comparing one resume against one job description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBundle {
    pub skill_match_score: f64,
    pub text_similarity_score: f64,
    pub final_score: f64,
    pub matched_skills: SkillSet,
    pub job_skills: Vec<String>,
    pub resume_skills: Vec<String>,
}

impl ScoreBundle {
    /// Zero-valued bundle returned when either document is blank.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Job skills not found in the resume, sorted.
    pub fn missing_skills(&self) -> Vec<String> {
        self.job_skills
            .iter()
            .filter(|skill| !self.matched_skills.contains(*skill))
            .cloned()
            .collect()
    }

    pub fn verdict(&self) -> MatchVerdict {
        MatchVerdict::from_score(self.final_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchVerdict {
    Strong,
    Moderate,
    Weak,
}

impl MatchVerdict {
    pub fn from_score(final_score: f64) -> Self {
        if final_score >= 70.0 {
            MatchVerdict::Strong
        } else if final_score >= 50.0 {
            MatchVerdict::Moderate
        } else {
            MatchVerdict::Weak
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MatchVerdict::Strong => "Your resume is a strong match for this position!",
            MatchVerdict::Moderate => {
                "Your resume is a moderate match for this position but could be improved."
            }
            MatchVerdict::Weak => {
                "Your resume needs significant improvement to match this job description."
            }
        }
    }
}

impl std::fmt::Display for MatchVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchVerdict::Strong => write!(f, "Strong"),
            MatchVerdict::Moderate => write!(f, "Moderate"),
            MatchVerdict::Weak => write!(f, "Weak"),
        }
    }
}
