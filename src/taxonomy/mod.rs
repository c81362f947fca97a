pub mod stopwords;

use std::collections::HashSet;

use crate::models::skill::SkillCategory;

pub use stopwords::{is_english_stopword, is_heuristic_stopword};

/// Static categorized skill dictionary.
///
/// Built once and never mutated afterwards, so a single instance can be
/// shared by reference across threads.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: Vec<(SkillCategory, Vec<String>)>,
    terms: Vec<String>,
}

impl SkillTaxonomy {
    pub fn new() -> Self {
        let mut taxonomy = Self {
            categories: Vec::new(),
            terms: Vec::new(),
        };

        taxonomy.init_programming();
        taxonomy.init_web_dev();
        taxonomy.init_databases();
        taxonomy.init_devops();
        taxonomy.init_data_science();
        taxonomy.init_soft_skills();

        taxonomy.flatten();
        taxonomy
    }

    fn init_programming(&mut self) {
        let skills = [
            "python", "java", "javascript", "c++", "ruby", "php", "swift", "typescript",
            "kotlin", "golang", "rust",
        ];
        self.add_category(SkillCategory::Programming, &skills);
    }

    fn init_web_dev(&mut self) {
        let skills = [
            "html", "css", "react", "angular", "vue", "node.js", "django", "flask", "express",
            "bootstrap", "jquery",
        ];
        self.add_category(SkillCategory::WebDev, &skills);
    }

    fn init_databases(&mut self) {
        let skills = [
            "sql", "mongodb", "postgresql", "mysql", "oracle", "redis", "elasticsearch",
            "dynamodb", "firebase",
        ];
        self.add_category(SkillCategory::Databases, &skills);
    }

    fn init_devops(&mut self) {
        let skills = [
            "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "terraform", "git",
            "ci/cd", "github actions",
        ];
        self.add_category(SkillCategory::DevOps, &skills);
    }

    fn init_data_science(&mut self) {
        let skills = [
            "machine learning", "data analysis", "pandas", "numpy", "scikit-learn",
            "tensorflow", "pytorch", "r", "tableau", "power bi",
        ];
        self.add_category(SkillCategory::DataScience, &skills);
    }

    fn init_soft_skills(&mut self) {
        let skills = [
            "teamwork", "leadership", "communication", "problem solving",
            "critical thinking", "time management",
        ];
        self.add_category(SkillCategory::SoftSkills, &skills);
    }

    fn add_category(&mut self, category: SkillCategory, skills: &[&str]) {
        let skills = skills.iter().map(|s| s.to_lowercase()).collect();
        self.categories.push((category, skills));
    }

    // Category order first, then term order; a term listed twice keeps its first slot.
    fn flatten(&mut self) {
        let mut seen = HashSet::new();
        self.terms = self
            .categories
            .iter()
            .flat_map(|(_, skills)| skills.iter())
            .filter(|skill| seen.insert(*skill))
            .cloned()
            .collect();
    }

    /// Unique lookup list of every dictionary term.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn categories(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        self.categories
            .iter()
            .map(|(category, skills)| (*category, skills.as_slice()))
    }

    pub fn skills_in(&self, category: SkillCategory) -> &[String] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, skills)| skills.as_slice())
            .unwrap_or(&[])
    }

    pub fn category_of(&self, skill: &str) -> Option<SkillCategory> {
        let lower = skill.to_lowercase();
        self.categories
            .iter()
            .find(|(_, skills)| skills.iter().any(|s| *s == lower))
            .map(|(category, _)| *category)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.category_of(skill).is_some()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}
