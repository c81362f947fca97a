use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use crate::analysis::normalizer::normalize;
use crate::error::Result;
use crate::models::skill::SkillSet;
use crate::taxonomy::{is_heuristic_stopword, SkillTaxonomy};

// Letter first, then at least two of word chars, '+', '#', '.', '-'.
static TECHNICAL_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z][\w+#.\-]{2,}\b").unwrap());

static DEFAULT_EXTRACTOR: Lazy<SkillExtractor> = Lazy::new(|| {
    SkillExtractor::new(SkillTaxonomy::new()).expect("built-in skill dictionary compiles")
});

/// Whole-word, whole-phrase pattern for a lowercase skill term.
pub fn word_pattern(term: &str) -> String {
    format!(r"\b{}\b", regex::escape(term))
}

/// Finds skills in free text using the dictionary plus a technical-token heuristic.
///
/// Every dictionary term is compiled once into a single [`RegexSet`], so
/// extraction is one pass over the text regardless of dictionary size.
pub struct SkillExtractor {
    taxonomy: SkillTaxonomy,
    dictionary: RegexSet,
}

impl SkillExtractor {
    pub fn new(taxonomy: SkillTaxonomy) -> Result<Self> {
        let patterns: Vec<String> = taxonomy.terms().iter().map(|t| word_pattern(t)).collect();
        let dictionary = RegexSet::new(&patterns)?;

        tracing::debug!("Compiled {} dictionary patterns", patterns.len());

        Ok(Self {
            taxonomy,
            dictionary,
        })
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return SkillSet::new();
        }

        let mut skills = self.dictionary_skills(&normalized);
        let dictionary_hits = skills.len();
        skills.extend(technical_tokens(&normalized));

        tracing::debug!(
            "Extracted {} skills ({} from dictionary)",
            skills.len(),
            dictionary_hits
        );

        skills
    }

    pub fn extract_sorted(&self, text: &str) -> Vec<String> {
        self.extract(text).into_iter().collect()
    }

    /// Dictionary terms present in already normalized text.
    pub fn dictionary_skills(&self, normalized: &str) -> SkillSet {
        let lower = normalized.to_lowercase();
        let terms = self.taxonomy.terms();

        self.dictionary
            .matches(&lower)
            .into_iter()
            .map(|idx| terms[idx].clone())
            .collect()
    }
}

/// Technical-looking tokens such as `Node.js` or `Kafka`, lowercased.
///
/// Captures unlisted tools and acronyms at the cost of also reporting ordinary
/// words of three or more letters.
pub fn technical_tokens(normalized: &str) -> SkillSet {
    TECHNICAL_TOKEN
        .find_iter(normalized)
        .map(|m| m.as_str())
        .filter(|token| !is_heuristic_stopword(token))
        .filter(|token| !token.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_lowercase)
        .collect()
}

pub fn default_extractor() -> &'static SkillExtractor {
    &DEFAULT_EXTRACTOR
}

/// Extracts skills with the shared built-in dictionary.
pub fn extract(text: &str) -> SkillSet {
    DEFAULT_EXTRACTOR.extract(text)
}

pub fn extract_opt(text: Option<&str>) -> SkillSet {
    text.map(extract).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract("").is_empty());
        assert!(extract("   \n").is_empty());
        assert!(extract_opt(None).is_empty());
    }

    #[test]
    fn test_extract_dictionary_hits_case_insensitive() {
        let skills = extract("I know Python and React and Docker");
        for expected in ["python", "react", "docker"] {
            assert!(skills.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_extract_respects_word_boundaries() {
        let skills = extract("javascriptx");
        assert!(!skills.contains("javascript"));
        assert!(skills.contains("javascriptx"));

        let extractor = default_extractor();
        assert!(extractor.dictionary_skills("postgresqlish githubber").is_empty());
    }

    #[test]
    fn test_extract_multi_word_phrases() {
        let skills = extract("Strong Machine Learning background, some Power BI, GitHub Actions.");
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("power bi"));
        assert!(skills.contains("github actions"));
        // Phrase members are also picked up as individual tokens.
        assert!(skills.contains("machine"));
        assert!(!skills.contains("git"));
    }

    #[test]
    fn test_extract_dotted_and_dashed_terms() {
        let skills = extract("Built APIs in Node.js with scikit-learn models");
        assert!(skills.contains("node.js"));
        assert!(skills.contains("scikit-learn"));
        assert!(skills.contains("apis"));
    }

    #[test]
    fn test_symbol_terms_lost_to_normalization() {
        // '+', '#' and '/' are stripped before matching.
        let skills = extract("Expert in C++ and CI/CD");
        assert!(!skills.contains("c++"));
        assert!(!skills.contains("ci/cd"));
        assert!(skills.contains("expert"));
    }

    #[test]
    fn test_single_letter_dictionary_term() {
        let skills = extract("Statistics in R and SAS");
        assert!(skills.contains("r"));
        assert!(skills.contains("sas"));
        assert!(skills.contains("statistics"));
    }

    #[test]
    fn test_technical_tokens_filters() {
        let tokens = technical_tokens("The API for this team and that Go 2024 v3 Kafka");
        assert_eq!(tokens, set(&["api", "kafka", "team"]));
    }

    #[test]
    fn test_technical_tokens_keep_inner_punctuation() {
        let tokens = technical_tokens("Vue.js front-end dev");
        assert_eq!(tokens, set(&["dev", "front-end", "vue.js"]));
    }

    #[test]
    fn test_extract_is_deterministic_and_sorted() {
        let text = "Kubernetes, AWS, Terraform and Redis for the platform team";
        let first = default_extractor().extract_sorted(text);
        let second = default_extractor().extract_sorted(text);
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(first, sorted);
        assert!(first.contains(&"kubernetes".to_string()));
        assert!(first.contains(&"aws".to_string()));
    }

    #[test]
    fn test_custom_taxonomy_extractor() {
        let extractor = SkillExtractor::new(SkillTaxonomy::default()).unwrap();
        assert_eq!(
            extractor.dictionary_skills("SQL and MySQL and NoSQL"),
            set(&["mysql", "sql"])
        );
    }
}
