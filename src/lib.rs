pub mod config;
pub mod error;
pub mod models;
pub mod taxonomy;
pub mod analysis;
pub mod document;
pub mod report;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{MatchVerdict, ScoreBundle, ScoringWeights, SkillCategory, SkillSet};
pub use taxonomy::SkillTaxonomy;
pub use analysis::{
    aggregate, extract, normalize, score_by_similarity, score_by_skills, ResumeMatcher,
    SkillExtractor, TfIdfVectorizer,
};
pub use report::{MatchReport, OutputFormat};
