use crate::analysis::normalizer::Document;
use crate::analysis::round2;
use crate::analysis::similarity::TfIdfVectorizer;
use crate::analysis::skill_extractor::{default_extractor, SkillExtractor};
use crate::analysis::skill_scorer::score_by_skills;
use crate::models::score::{ScoreBundle, ScoringWeights};

/// Scores resumes against job descriptions.
///
/// Holds only read-only state, so one matcher can serve concurrent callers.
pub struct ResumeMatcher<'a> {
    extractor: &'a SkillExtractor,
    vectorizer: TfIdfVectorizer,
}

impl<'a> ResumeMatcher<'a> {
    pub fn new(extractor: &'a SkillExtractor) -> Self {
        Self {
            extractor,
            vectorizer: TfIdfVectorizer::new(),
        }
    }

    pub fn with_vectorizer(mut self, vectorizer: TfIdfVectorizer) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    pub fn extractor(&self) -> &SkillExtractor {
        self.extractor
    }

    /// Compares one resume with one job description.
    ///
    /// Skills extracted from the job are the required set; resume skills are
    /// reported for display only. Weights are applied as given, so a pair
    /// summing above 1 can yield a final score above 100.
    pub fn aggregate(&self, resume_text: &str, job_text: &str, weights: ScoringWeights) -> ScoreBundle {
        let resume = Document::new(resume_text);
        let job = Document::new(job_text);

        if resume.is_blank() || job.is_blank() {
            tracing::debug!("Blank resume or job description, returning empty scores");
            return ScoreBundle::empty();
        }

        let job_skills = self.extractor.extract_sorted(job.raw());
        let resume_skills = self.extractor.extract_sorted(resume.raw());

        let (skill_match_score, matched_skills) = score_by_skills(resume.raw(), &job_skills);
        let text_similarity_score = self.vectorizer.score(resume.raw(), job.raw());
        let final_score = combine(skill_match_score, text_similarity_score, weights);

        tracing::debug!(
            "Scored resume: skills={} text={} final={} ({} job skills, {} matched)",
            skill_match_score,
            text_similarity_score,
            final_score,
            job_skills.len(),
            matched_skills.len()
        );

        ScoreBundle {
            skill_match_score,
            text_similarity_score,
            final_score,
            matched_skills,
            job_skills,
            resume_skills,
        }
    }
}

impl Default for ResumeMatcher<'static> {
    fn default() -> Self {
        Self::new(default_extractor())
    }
}

/// Weighted sum of the two sub-scores, rounded to 2 decimals.
pub fn combine(skill_score: f64, text_score: f64, weights: ScoringWeights) -> f64 {
    round2(skill_score * weights.skill_weight + text_score * weights.text_weight)
}

pub fn aggregate(resume_text: &str, job_text: &str, skill_weight: f64, text_weight: f64) -> ScoreBundle {
    ResumeMatcher::default().aggregate(
        resume_text,
        job_text,
        ScoringWeights::new(skill_weight, text_weight),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skill::SkillSet;
    use crate::taxonomy::SkillTaxonomy;

    const RESUME: &str = "Built dashboards using Python and Pandas for data analysis";
    const JOB: &str = "Looking for a candidate skilled in Python, Pandas, and SQL";

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_blank_inputs_short_circuit() {
        assert_eq!(aggregate("", JOB, 0.7, 0.3), ScoreBundle::empty());
        assert_eq!(aggregate(RESUME, "", 0.7, 0.3), ScoreBundle::empty());
        assert_eq!(aggregate("  \n", "\t", 0.7, 0.3), ScoreBundle::empty());
    }

    #[test]
    fn test_combine_weights() {
        let weights = ScoringWeights::new(0.7, 0.3);
        assert_eq!(combine(50.0, 80.0, weights), 59.0);
        assert_eq!(combine(66.67, 33.33, ScoringWeights::new(0.5, 0.5)), 50.0);
        assert_eq!(combine(100.0, 100.0, ScoringWeights::new(1.0, 0.0)), 100.0);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let bundle = aggregate(RESUME, JOB, 0.7, 0.3);

        let job_skills: SkillSet = bundle.job_skills.iter().cloned().collect();
        assert!(job_skills.is_superset(&set(&["python", "pandas", "sql"])));
        assert_eq!(
            bundle.job_skills,
            vec!["candidate", "looking", "pandas", "python", "skilled", "sql"]
        );
        assert_eq!(bundle.matched_skills, set(&["pandas", "python"]));
        assert_eq!(bundle.skill_match_score, 33.33);

        assert!(bundle.resume_skills.contains(&"data analysis".to_string()));
        assert!(bundle.text_similarity_score > 0.0 && bundle.text_similarity_score < 100.0);
        assert_eq!(
            bundle.final_score,
            combine(
                bundle.skill_match_score,
                bundle.text_similarity_score,
                ScoringWeights::new(0.7, 0.3)
            )
        );
        for score in [bundle.skill_match_score, bundle.text_similarity_score, bundle.final_score] {
            assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn test_matched_skills_subset_of_job_skills() {
        let pairs = [
            (RESUME, JOB),
            ("Rust, Tokio, Kubernetes on AWS", "Platform engineer: Rust, Go, AWS, Terraform"),
            ("Leadership and communication", "Team leadership, communication, SQL"),
        ];
        for (resume, job) in pairs {
            let bundle = aggregate(resume, job, 0.7, 0.3);
            for skill in &bundle.matched_skills {
                assert!(bundle.job_skills.contains(skill), "{} not in job skills", skill);
            }
        }
    }

    #[test]
    fn test_identical_documents_score_full() {
        let text = "Senior data engineer with Python, SQL, Airflow and Spark";
        let bundle = aggregate(text, text, 0.7, 0.3);
        assert_eq!(bundle.skill_match_score, 100.0);
        assert_eq!(bundle.text_similarity_score, 100.0);
        assert_eq!(bundle.final_score, 100.0);
    }

    #[test]
    fn test_weights_summing_above_one_exceed_hundred() {
        let text = "Senior data engineer with Python, SQL, Airflow and Spark";
        let bundle = aggregate(text, text, 1.0, 1.0);
        assert_eq!(bundle.final_score, 200.0);
        assert!(bundle.skill_match_score <= 100.0);
        assert!(bundle.text_similarity_score <= 100.0);
    }

    #[test]
    fn test_matcher_with_own_extractor() {
        let extractor = SkillExtractor::new(SkillTaxonomy::new()).unwrap();
        let matcher = ResumeMatcher::new(&extractor);
        let bundle = matcher.aggregate("Docker and Kubernetes", "Docker, Kubernetes, Helm", ScoringWeights::default());
        assert_eq!(bundle.matched_skills, set(&["docker", "kubernetes"]));
        assert!(bundle.missing_skills().contains(&"helm".to_string()));
    }
}
