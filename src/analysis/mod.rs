pub mod normalizer;
pub mod skill_extractor;
pub mod skill_scorer;
pub mod similarity;
pub mod aggregator;

pub use aggregator::{aggregate, combine, ResumeMatcher};
pub use normalizer::{normalize, Document};
pub use similarity::{score_by_similarity, TfIdfVectorizer};
pub use skill_extractor::{extract, SkillExtractor};
pub use skill_scorer::score_by_skills;

/// Rounds to 2 decimal places, the precision of every reported score.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(200.0 / 3.0), 66.67);
        assert_eq!(round2(100.0 / 3.0), 33.33);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(99.999_999), 100.0);
    }
}
