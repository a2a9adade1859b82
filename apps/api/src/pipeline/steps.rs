//! Generation steps — one function per model-backed stage.
//!
//! Each step is pure text-in/text-out against the `CompletionBackend`; the
//! sequencer in `pipeline::mod` owns ordering, the draft record, and mapping
//! failures to the step that raised them.

use serde::Deserialize;

use crate::llm_client::{complete_json, CompletionBackend, LlmError};
use crate::pipeline::prompts::{
    BULLETS_PROMPT_TEMPLATE, COVER_LETTER_PROMPT_TEMPLATE, IMPROVEMENTS_DEEP_PROMPT_TEMPLATE,
    IMPROVEMENTS_STANDARD_PROMPT_TEMPLATE, INTERVIEW_QUESTIONS_PROMPT_TEMPLATE,
    LEARNING_PLAN_PROMPT_TEMPLATE, REVISE_PROMPT_TEMPLATE, REVISE_SYSTEM,
    ROLE_RESEARCH_PROMPT_TEMPLATE, SELF_REVIEW_PROMPT_TEMPLATE, WRITER_SYSTEM,
};
use crate::pipeline::router::ImprovementPath;
use crate::pipeline::state::AtsAnalysis;

/// Skill lists are capped before interpolation to keep prompts bounded.
const MAX_PROMPT_SKILLS: usize = 10;
const MAX_PLAN_SKILLS: usize = 15;

fn join_skills(skills: &[String], cap: usize) -> String {
    skills
        .iter()
        .take(cap)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Improvement suggestions for the Standard and Deep paths.
/// The caller handles `Skip`; calling this with `Skip` is a programming error,
/// so it degrades to the Standard prompt rather than panicking.
pub async fn improvements(
    llm: &dyn CompletionBackend,
    resume: &str,
    jd: &str,
    ats: &AtsAnalysis,
    path: ImprovementPath,
) -> Result<String, LlmError> {
    let template = match path {
        ImprovementPath::Deep => IMPROVEMENTS_DEEP_PROMPT_TEMPLATE,
        _ => IMPROVEMENTS_STANDARD_PROMPT_TEMPLATE,
    };

    let prompt = template
        .replace("{resume}", resume)
        .replace("{jd}", jd)
        .replace("{matched}", &join_skills(&ats.matched_skills, MAX_PROMPT_SKILLS))
        .replace("{missing}", &join_skills(&ats.missing_skills, MAX_PROMPT_SKILLS));

    llm.complete(&prompt, WRITER_SYSTEM).await
}

pub async fn cover_letter(
    llm: &dyn CompletionBackend,
    resume: &str,
    jd: &str,
    company: &str,
) -> Result<String, LlmError> {
    let prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{resume}", resume)
        .replace("{jd}", jd)
        .replace("{company}", company);
    llm.complete(&prompt, WRITER_SYSTEM).await
}

pub async fn optimized_bullets(
    llm: &dyn CompletionBackend,
    resume: &str,
    jd: &str,
) -> Result<String, LlmError> {
    let prompt = BULLETS_PROMPT_TEMPLATE
        .replace("{resume}", resume)
        .replace("{jd}", jd);
    llm.complete(&prompt, WRITER_SYSTEM).await
}

pub async fn interview_questions(
    llm: &dyn CompletionBackend,
    resume: &str,
    jd: &str,
) -> Result<String, LlmError> {
    let prompt = INTERVIEW_QUESTIONS_PROMPT_TEMPLATE
        .replace("{jd}", jd)
        .replace("{resume}", resume);
    llm.complete(&prompt, WRITER_SYSTEM).await
}

pub async fn role_expectations(
    llm: &dyn CompletionBackend,
    jd: &str,
    company: &str,
) -> Result<String, LlmError> {
    let prompt = ROLE_RESEARCH_PROMPT_TEMPLATE
        .replace("{jd}", jd)
        .replace("{company}", company);
    llm.complete(&prompt, WRITER_SYSTEM).await
}

pub async fn learning_plan(
    llm: &dyn CompletionBackend,
    ats: &AtsAnalysis,
) -> Result<String, LlmError> {
    let matched = if ats.matched_skills.is_empty() {
        "None specified".to_string()
    } else {
        join_skills(&ats.matched_skills, MAX_PROMPT_SKILLS)
    };
    let prompt = LEARNING_PLAN_PROMPT_TEMPLATE
        .replace("{missing}", &join_skills(&ats.missing_skills, MAX_PLAN_SKILLS))
        .replace("{matched}", &matched);
    llm.complete(&prompt, WRITER_SYSTEM).await
}

/// Critique of the compiled package, fed into the revise step and surfaced
/// in the final report as review notes.
pub async fn self_review(
    llm: &dyn CompletionBackend,
    package: &str,
    resume: &str,
    jd: &str,
) -> Result<String, LlmError> {
    let prompt = SELF_REVIEW_PROMPT_TEMPLATE
        .replace("{package}", package)
        .replace("{resume}", resume)
        .replace("{jd}", jd);
    llm.complete(&prompt, WRITER_SYSTEM).await
}

/// The revise step's structured output.
#[derive(Debug, Clone, Deserialize)]
pub struct Revision {
    pub revised_cover_letter: String,
    pub revised_bullets: String,
}

/// Applies the critique to the cover letter and bullets in one call.
pub async fn revise(
    llm: &dyn CompletionBackend,
    cover_letter: &str,
    bullets: &str,
    critique: &str,
    resume: &str,
    jd: &str,
) -> Result<Revision, LlmError> {
    let prompt = REVISE_PROMPT_TEMPLATE
        .replace("{cover_letter}", cover_letter)
        .replace("{bullets}", bullets)
        .replace("{critique}", critique)
        .replace("{resume}", resume)
        .replace("{jd}", jd);
    complete_json(llm, &prompt, REVISE_SYSTEM).await
}
