use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lowercase skill terms, duplicate free and iterated in sorted order.
pub type SkillSet = BTreeSet<String>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    WebDev,
    Databases,
    #[serde(rename = "devops")]
    DevOps,
    DataScience,
    SoftSkills,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Programming,
        SkillCategory::WebDev,
        SkillCategory::Databases,
        SkillCategory::DevOps,
        SkillCategory::DataScience,
        SkillCategory::SoftSkills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::WebDev => "web_dev",
            SkillCategory::Databases => "databases",
            SkillCategory::DevOps => "devops",
            SkillCategory::DataScience => "data_science",
            SkillCategory::SoftSkills => "soft_skills",
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
