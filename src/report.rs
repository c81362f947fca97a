use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::score::{MatchVerdict, ScoreBundle, ScoringWeights};
use crate::taxonomy::SkillTaxonomy;

/// Heuristic tokens have no dictionary category.
pub const OTHER_CATEGORY: &str = "other";

const TERMINOLOGY_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Text,
        }
    }
}

/// A score bundle plus everything the presentation layer derives from it.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    #[serde(flatten)]
    pub bundle: ScoreBundle,
    pub missing_skills: Vec<String>,
    pub job_skills_by_category: BTreeMap<String, Vec<String>>,
    pub verdict: MatchVerdict,
    pub tips: Vec<String>,
    pub weights: ScoringWeights,
    pub analyzed_at: DateTime<Utc>,
}

impl MatchReport {
    pub fn new(bundle: ScoreBundle, weights: ScoringWeights, taxonomy: &SkillTaxonomy) -> Self {
        let missing_skills = bundle.missing_skills();
        let job_skills_by_category = group_by_category(&bundle.job_skills, taxonomy);
        let verdict = bundle.verdict();
        let tips = improvement_tips(&bundle);

        Self {
            bundle,
            missing_skills,
            job_skills_by_category,
            verdict,
            tips,
            weights,
            analyzed_at: Utc::now(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
            OutputFormat::Markdown => format_markdown(self),
            OutputFormat::Text => format_text(self),
        })
    }
}

pub fn group_by_category(skills: &[String], taxonomy: &SkillTaxonomy) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for skill in skills {
        let category = taxonomy
            .category_of(skill)
            .map(|c| c.to_string())
            .unwrap_or_else(|| OTHER_CATEGORY.to_string());
        groups.entry(category).or_default().push(skill.clone());
    }
    groups
}

pub fn improvement_tips(bundle: &ScoreBundle) -> Vec<String> {
    let mut tips = Vec::new();

    let missing = bundle.missing_skills();
    if !missing.is_empty() {
        tips.push(format!(
            "Add these missing keywords to your resume: {}",
            missing.join(", ")
        ));
    }

    if bundle.text_similarity_score < TERMINOLOGY_THRESHOLD {
        tips.push("Align your resume's terminology with the job description".to_string());
        tips.push("Use similar phrasing and industry terminology".to_string());
    }

    tips.push("Quantify your achievements with specific metrics".to_string());
    tips.push("Tailor your professional summary to specifically address this role".to_string());

    tips
}

fn format_text(report: &MatchReport) -> String {
    let bundle = &report.bundle;
    let mut output = String::new();

    output.push_str("\n=== Resume Match Analysis ===\n\n");
    output.push_str(&format!("Skill Match: {}%\n", bundle.skill_match_score));
    output.push_str(&format!(
        "Content Similarity: {}%\n",
        bundle.text_similarity_score
    ));
    output.push_str(&format!(
        "Overall Match: {}% ({})\n",
        bundle.final_score, report.verdict
    ));
    output.push_str(&format!(
        "Weights: skills {} / text {}\n\n",
        report.weights.skill_weight, report.weights.text_weight
    ));

    output.push_str("Matched Skills:\n");
    if bundle.matched_skills.is_empty() {
        output.push_str("  (none) Try updating your resume with keywords from the job description.\n");
    }
    for skill in &bundle.matched_skills {
        output.push_str(&format!("  + {}\n", skill));
    }

    output.push_str("\nMissing Skills:\n");
    if report.missing_skills.is_empty() {
        output.push_str("  (none) Your resume covers every skill in the job description.\n");
    }
    for skill in &report.missing_skills {
        output.push_str(&format!("  - {}\n", skill));
    }

    output.push_str("\nJob Description Skills:\n");
    for (category, skills) in &report.job_skills_by_category {
        output.push_str(&format!("  {}: {}\n", category, skills.join(", ")));
    }

    if !bundle.resume_skills.is_empty() {
        output.push_str(&format!(
            "\nYour Resume Skills: {}\n",
            bundle.resume_skills.join(", ")
        ));
    }

    output.push_str(&format!("\n{}\n", report.verdict.message()));
    output.push_str("How to improve your match:\n");
    for (idx, tip) in report.tips.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", idx + 1, tip));
    }

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(report: &MatchReport) -> String {
    let bundle = &report.bundle;
    let mut output = String::new();

    output.push_str("# Resume Match Analysis\n\n");
    output.push_str("| Metric | Score |\n|--------|-------|\n");
    output.push_str(&format!("| Skill Match | {}% |\n", bundle.skill_match_score));
    output.push_str(&format!(
        "| Content Similarity | {}% |\n",
        bundle.text_similarity_score
    ));
    output.push_str(&format!("| Overall Match | {}% |\n", bundle.final_score));
    output.push_str(&format!("| Verdict | {} |\n", report.verdict));

    output.push_str("\n## Matched Skills\n\n");
    if bundle.matched_skills.is_empty() {
        output.push_str("_No skills matched._\n");
    }
    for skill in &bundle.matched_skills {
        output.push_str(&format!("- {}\n", skill));
    }

    output.push_str("\n## Missing Skills\n\n");
    if report.missing_skills.is_empty() {
        output.push_str("_None, every job skill is covered._\n");
    }
    for skill in &report.missing_skills {
        output.push_str(&format!("- {}\n", skill));
    }

    output.push_str("\n## Skills Breakdown\n\n");
    output.push_str("| Category | Job Skills |\n|----------|------------|\n");
    for (category, skills) in &report.job_skills_by_category {
        output.push_str(&format!("| {} | {} |\n", category, skills.join(", ")));
    }

    output.push_str("\n## Improvement Tips\n\n");
    output.push_str(&format!("> {}\n\n", report.verdict.message()));
    for (idx, tip) in report.tips.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", idx + 1, tip));
    }

    output.push_str(&format!(
        "\n---\n*Analyzed on {}*\n",
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
