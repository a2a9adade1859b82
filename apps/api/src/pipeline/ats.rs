//! ATS analysis — skill extraction via the model, matching and scoring in
//! pure Rust.
//!
//! Two model calls return comma-separated skill lists (resume, JD). The
//! match itself is a case-insensitive set intersection; the score is the
//! matched share of JD skills on a 0–100 scale. Deterministic and fully
//! testable without a model.

use std::collections::HashSet;

use crate::errors::AppError;
use crate::llm_client::{CompletionBackend, LlmError};
use crate::pipeline::prompts::{
    JD_SKILLS_PROMPT_TEMPLATE, RESUME_SKILLS_PROMPT_TEMPLATE, SKILL_EXTRACT_SYSTEM,
};
use crate::pipeline::state::AtsAnalysis;

/// Extracts explicit technical skills from the resume.
pub async fn extract_resume_skills(
    llm: &dyn CompletionBackend,
    resume: &str,
) -> Result<Vec<String>, LlmError> {
    let prompt = RESUME_SKILLS_PROMPT_TEMPLATE.replace("{resume}", resume);
    let completion = llm.complete(&prompt, SKILL_EXTRACT_SYSTEM).await?;
    Ok(parse_skill_list(&completion))
}

/// Extracts required and nice-to-have skills from the job description.
pub async fn extract_jd_skills(
    llm: &dyn CompletionBackend,
    jd: &str,
) -> Result<Vec<String>, LlmError> {
    let prompt = JD_SKILLS_PROMPT_TEMPLATE.replace("{jd}", jd);
    let completion = llm.complete(&prompt, SKILL_EXTRACT_SYSTEM).await?;
    Ok(parse_skill_list(&completion))
}

/// Splits a comma-separated model completion into trimmed, non-empty skills.
pub fn parse_skill_list(completion: &str) -> Vec<String> {
    completion
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Matches resume skills against JD skills and computes the ATS score.
///
/// Matching is case-insensitive; matched/missing lists carry the JD's
/// original casing. An empty JD skill list means the input is unscoreable —
/// that is a hard validation error, never a defaulted score.
pub fn score_match(resume_skills: &[String], jd_skills: &[String]) -> Result<AtsAnalysis, AppError> {
    if jd_skills.is_empty() {
        return Err(AppError::Validation(
            "No skills could be extracted from the job description; the match is unscoreable"
                .to_string(),
        ));
    }

    let resume_lower: HashSet<String> =
        resume_skills.iter().map(|s| s.to_lowercase()).collect();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = jd_skills
        .iter()
        .cloned()
        .partition(|skill| resume_lower.contains(&skill.to_lowercase()));

    let score = ((matched_skills.len() as f64 / jd_skills.len() as f64) * 100.0).round();
    let score = score.clamp(0.0, 100.0) as u8;

    Ok(AtsAnalysis {
        score,
        matched_skills,
        missing_skills,
    })
}
