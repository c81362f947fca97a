use regex::Regex;

use crate::analysis::normalizer::Document;
use crate::analysis::round2;
use crate::analysis::skill_extractor::word_pattern;
use crate::models::skill::SkillSet;

/// Percentage of `required_skills` found in `candidate_text`, plus the hits.
///
/// Each required skill is lowercased and tested as a whole word or phrase
/// against the normalized candidate. An empty requirement list scores `0.0`.
pub fn score_by_skills<S: AsRef<str>>(candidate_text: &str, required_skills: &[S]) -> (f64, SkillSet) {
    if required_skills.is_empty() {
        return (0.0, SkillSet::new());
    }

    let required: SkillSet = required_skills
        .iter()
        .map(|skill| skill.as_ref().to_lowercase())
        .collect();

    let candidate = Document::new(candidate_text).match_text();

    let matched: SkillSet = required
        .iter()
        .filter(|skill| contains_skill(&candidate, skill))
        .cloned()
        .collect();

    let score = round2(100.0 * matched.len() as f64 / required.len() as f64);

    tracing::debug!(
        "Matched {}/{} required skills ({}%)",
        matched.len(),
        required.len(),
        score
    );

    (score, matched)
}

fn contains_skill(haystack: &str, skill: &str) -> bool {
    match Regex::new(&word_pattern(skill)) {
        Ok(re) => re.is_match(haystack),
        Err(e) => {
            tracing::warn!("Skipping unmatchable skill '{}': {}", skill, e);
            false
        }
    }
}
