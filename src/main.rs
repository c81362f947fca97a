use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use resumematch::config::parse_weight_arg;
use resumematch::document::load_text;
use resumematch::{Config, MatchReport, OutputFormat, ResumeMatcher, ScoringWeights};

#[derive(Parser, Debug)]
#[command(name = "resumematch")]
#[command(version = "0.1.0")]
#[command(about = "Score how well a resume matches a job description")]
struct Args {
    /// Resume file (plain text or markdown)
    #[arg(short, long)]
    resume: PathBuf,

    /// Job description file
    #[arg(short, long, required_unless_present = "job_text", conflicts_with = "job_text")]
    job: Option<PathBuf>,

    /// Job description passed inline
    #[arg(long)]
    job_text: Option<String>,

    /// Weight of the skill match score (overrides RESUMEMATCH_SKILL_WEIGHT)
    #[arg(long, value_parser = parse_weight_arg)]
    skill_weight: Option<f64>,

    /// Weight of the text similarity score (overrides RESUMEMATCH_TEXT_WEIGHT)
    #[arg(long, value_parser = parse_weight_arg)]
    text_weight: Option<f64>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("resumematch=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let mut weights = ScoringWeights::from(&config);
    if let Some(skill_weight) = args.skill_weight {
        weights.skill_weight = skill_weight;
    }
    if let Some(text_weight) = args.text_weight {
        weights.text_weight = text_weight;
    }
    if !weights.is_normalized() {
        tracing::warn!(
            "Weights sum to {}, final score is not bounded to 0-100",
            weights.sum()
        );
    }

    let resume_text = load_text(&args.resume);
    if resume_text.is_empty() {
        tracing::warn!("Could not extract text from {}", args.resume.display());
    }

    let job_text = match (&args.job, &args.job_text) {
        (Some(path), _) => load_text(path),
        (None, Some(text)) => text.clone(),
        (None, None) => String::new(),
    };
    if job_text.trim().is_empty() {
        tracing::warn!("Job description is empty");
    }

    tracing::info!("Analyzing resume {}", args.resume.display());
    let matcher = ResumeMatcher::default();
    let bundle = matcher.aggregate(&resume_text, &job_text, weights);

    let report = MatchReport::new(bundle, weights, matcher.extractor().taxonomy());
    let output = report.render(OutputFormat::from(args.format.as_str()))?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_accepts_finite_weights() {
        let args = Args::try_parse_from([
            "resumematch", "--resume", "r.txt", "--job-text", "Rust", "--skill-weight", "0.6",
            "--text-weight", "0.4",
        ])
        .unwrap();
        assert_eq!(args.skill_weight, Some(0.6));
        assert_eq!(args.text_weight, Some(0.4));
    }

    #[test]
    fn test_cli_rejects_non_finite_weights() {
        for bad in ["NaN", "inf", "heavy"] {
            let result = Args::try_parse_from([
                "resumematch", "--resume", "r.txt", "--job-text", "Rust", "--skill-weight", bad,
            ]);
            assert!(result.is_err(), "accepted --skill-weight {}", bad);
        }
        assert!(Args::try_parse_from([
            "resumematch", "--resume", "r.txt", "--job-text", "Rust", "--text-weight", "NaN",
        ])
        .is_err());
    }
}
