//! Application pipeline — sequences the model-backed stages over one draft.
//!
//! Flow: ats_analysis → route on score (skip / standard / deep improvements) →
//!       cover_letter → resume_optimizer → interview_prep → learning_plan →
//!       compile → self_review → revise → final report.
//!
//! Stages run strictly sequentially; the first failure aborts the run with an
//! error naming the step. Artifacts completed before the failure are never
//! touched again, so nothing is corrupted by a mid-run abort.

pub mod ats;
pub mod handlers;
pub mod prompts;
pub mod refine;
pub mod report;
pub mod router;
pub mod state;
pub mod steps;

use std::fmt;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{CompletionBackend, LlmError};
use crate::pipeline::report::ReportSections;
use crate::pipeline::router::{route_improvement, ImprovementPath};
use crate::pipeline::state::ApplicationDraft;

/// Identifies one pipeline stage. Used in logs and in step-failure errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    AtsAnalysis,
    Improvements,
    CoverLetter,
    ResumeOptimizer,
    InterviewPrep,
    LearningPlan,
    SelfReview,
    Revise,
    Refine,
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStep::AtsAnalysis => "ats_analysis",
            PipelineStep::Improvements => "improvements",
            PipelineStep::CoverLetter => "cover_letter",
            PipelineStep::ResumeOptimizer => "resume_optimizer",
            PipelineStep::InterviewPrep => "interview_prep",
            PipelineStep::LearningPlan => "learning_plan",
            PipelineStep::SelfReview => "self_review",
            PipelineStep::Revise => "revise",
            PipelineStep::Refine => "refine",
        };
        write!(f, "{name}")
    }
}

/// Maps a model failure to an error naming the step that raised it.
fn step_failure(step: PipelineStep) -> impl FnOnce(LlmError) -> AppError {
    move |e| AppError::Pipeline {
        step,
        message: e.to_string(),
    }
}

/// Everything a run produces: the final draft, its sections, and the
/// assembled text report.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub draft: ApplicationDraft,
    pub sections: ReportSections,
    pub full_report: String,
}

/// Runs the full pipeline against one draft.
pub async fn run_pipeline(
    llm: &dyn CompletionBackend,
    draft: ApplicationDraft,
) -> Result<PipelineOutcome, AppError> {
    // Step 1: ATS analysis — two extraction calls, then pure-Rust scoring
    let resume_skills = ats::extract_resume_skills(llm, &draft.resume)
        .await
        .map_err(step_failure(PipelineStep::AtsAnalysis))?;
    let jd_skills = ats::extract_jd_skills(llm, &draft.jd)
        .await
        .map_err(step_failure(PipelineStep::AtsAnalysis))?;
    let analysis = ats::score_match(&resume_skills, &jd_skills)?;
    info!("ATS score: {}/100", analysis.score);

    // Step 2: route on the score
    let path = route_improvement(analysis.score)?;
    info!("Improvement path: {path:?}");

    // Step 3: improvements (skipped entirely for high scores)
    let improvements = match path {
        ImprovementPath::Skip => None,
        _ => Some(
            steps::improvements(llm, &draft.resume, &draft.jd, &analysis, path)
                .await
                .map_err(step_failure(PipelineStep::Improvements))?,
        ),
    };

    // Step 4: cover letter
    let cover_letter = steps::cover_letter(llm, &draft.resume, &draft.jd, draft.company())
        .await
        .map_err(step_failure(PipelineStep::CoverLetter))?;
    info!("Cover letter generated");

    // Step 5: resume optimizer
    let bullets = steps::optimized_bullets(llm, &draft.resume, &draft.jd)
        .await
        .map_err(step_failure(PipelineStep::ResumeOptimizer))?;
    info!("Resume bullets optimized");

    // Step 6: interview prep — questions, then role research
    let questions = steps::interview_questions(llm, &draft.resume, &draft.jd)
        .await
        .map_err(step_failure(PipelineStep::InterviewPrep))?;
    let research = steps::role_expectations(llm, &draft.jd, draft.company())
        .await
        .map_err(step_failure(PipelineStep::InterviewPrep))?;
    info!("Interview prep and role research completed");

    // Step 7: learning plan from the skill gap
    let plan = steps::learning_plan(llm, &analysis)
        .await
        .map_err(step_failure(PipelineStep::LearningPlan))?;
    info!("Learning plan generated");

    let draft = draft
        .with_ats(analysis)
        .with_improvements(improvements)
        .with_cover_letter(cover_letter)
        .with_optimized_bullets(bullets)
        .with_interview_questions(questions)
        .with_role_expectations(research)
        .with_learning_plan(plan);

    // Step 8: self-review critiques the preliminary compile
    let preliminary = ReportSections::from_draft(&draft).compile();
    let critique = steps::self_review(llm, &preliminary, &draft.resume, &draft.jd)
        .await
        .map_err(step_failure(PipelineStep::SelfReview))?;
    info!("Self-review completed");

    // Step 9: revise the cover letter and bullets against the critique
    let revision = steps::revise(
        llm,
        draft.cover_letter.as_deref().unwrap_or_default(),
        draft.optimized_bullets.as_deref().unwrap_or_default(),
        &critique,
        &draft.resume,
        &draft.jd,
    )
    .await
    .map_err(step_failure(PipelineStep::Revise))?;
    info!("Content revised");

    let draft = draft
        .with_cover_letter(revision.revised_cover_letter)
        .with_optimized_bullets(revision.revised_bullets)
        .with_critique(critique);

    let sections = ReportSections::from_draft(&draft);
    let full_report = sections.compile();

    Ok(PipelineOutcome {
        draft,
        sections,
        full_report,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// End-to-end pipeline tests against scripted backends
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::{FailingBackend, ScriptedBackend};

    const REVISION_JSON: &str =
        r#"{"revised_cover_letter": "Revised letter", "revised_bullets": "• Revised bullet"}"#;

    fn draft_fixture() -> ApplicationDraft {
        ApplicationDraft::new(
            "Experienced engineer. Skills: listed below.".to_string(),
            "We need an engineer.".to_string(),
            Some("Acme".to_string()),
        )
    }

    fn csv(prefix: &str, n: usize) -> String {
        (0..n)
            .map(|i| format!("{prefix}{i}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Responses in call order for a low-score run:
    /// resume skills, jd skills, improvements, cover letter, bullets,
    /// questions, research, plan, review, revision.
    fn low_score_script(resume_skills: &str, jd_skills: &str) -> Vec<String> {
        vec![
            resume_skills.to_string(),
            jd_skills.to_string(),
            "1. Surface your Kafka work.".to_string(),
            "Original letter".to_string(),
            "• Original bullet".to_string(),
            "1. Why Rust?".to_string(),
            "Senior role, high autonomy.".to_string(),
            "Learn the missing stack.".to_string(),
            "The letter buries the lede.".to_string(),
            REVISION_JSON.to_string(),
        ]
    }

    #[tokio::test]
    async fn test_high_score_run_skips_improvements() {
        // 20/21 matched → score 95 → Skip: no improvements call, 9 total
        let resume = csv("skill", 20);
        let jd = csv("skill", 21);
        let script: Vec<String> = vec![
            resume,
            jd,
            "letter".to_string(),
            "• bullet".to_string(),
            "1. question".to_string(),
            "research".to_string(),
            "plan".to_string(),
            "critique".to_string(),
            REVISION_JSON.to_string(),
        ];
        let backend = ScriptedBackend::new(script.iter().map(String::as_str).collect());

        let outcome = run_pipeline(&backend, draft_fixture()).await.unwrap();

        assert_eq!(outcome.draft.ats.as_ref().unwrap().score, 95);
        assert!(outcome.sections.improvements.is_none());
        assert!(!outcome.full_report.contains("RESUME IMPROVEMENT SUGGESTIONS"));
        assert_eq!(backend.remaining(), 0);
    }

    #[tokio::test]
    async fn test_low_score_run_takes_deep_path() {
        // 6/10 matched → score 60 → Deep
        let resume = csv("skill", 6);
        let jd = csv("skill", 10);
        let script = low_score_script(&resume, &jd);
        let backend = ScriptedBackend::new(script.iter().map(String::as_str).collect());

        let outcome = run_pipeline(&backend, draft_fixture()).await.unwrap();

        let ats = outcome.draft.ats.as_ref().unwrap();
        assert_eq!(ats.score, 60);
        assert_eq!(ats.missing_skills.len(), 4);

        // The improvements prompt is the deep variant and carries the gap
        let improvements_prompt = backend.prompt(2);
        assert!(improvements_prompt.contains("scored poorly"));
        assert!(improvements_prompt.contains("skill6"));

        assert!(outcome.sections.improvements.is_some());
        assert!(outcome.full_report.contains("RESUME IMPROVEMENT SUGGESTIONS"));
    }

    #[tokio::test]
    async fn test_pipeline_is_deterministic_with_a_fixed_backend() {
        let resume = csv("skill", 6);
        let jd = csv("skill", 10);
        let script = low_score_script(&resume, &jd);

        let backend_a = ScriptedBackend::new(script.iter().map(String::as_str).collect());
        let backend_b = ScriptedBackend::new(script.iter().map(String::as_str).collect());

        let a = run_pipeline(&backend_a, draft_fixture()).await.unwrap();
        let b = run_pipeline(&backend_b, draft_fixture()).await.unwrap();

        assert_eq!(a.full_report, b.full_report);
        assert_eq!(a.sections, b.sections);
    }

    #[tokio::test]
    async fn test_revision_replaces_letter_and_bullets_only() {
        let resume = csv("skill", 6);
        let jd = csv("skill", 10);
        let script = low_score_script(&resume, &jd);
        let backend = ScriptedBackend::new(script.iter().map(String::as_str).collect());

        let outcome = run_pipeline(&backend, draft_fixture()).await.unwrap();

        assert_eq!(outcome.sections.cover_letter, "Revised letter");
        assert_eq!(outcome.sections.optimized_bullets, "• Revised bullet");
        assert_eq!(outcome.sections.interview_questions, "1. Why Rust?");
        assert_eq!(
            outcome.sections.review_notes.as_deref(),
            Some("The letter buries the lede.")
        );
    }

    #[tokio::test]
    async fn test_failure_names_the_failing_step() {
        // Two skill extractions succeed (full match → Skip), cover letter fails
        let backend = FailingBackend::new(2);
        let err = run_pipeline(&backend, draft_fixture()).await.unwrap_err();
        match err {
            AppError::Pipeline { step, .. } => assert_eq!(step, PipelineStep::CoverLetter),
            other => panic!("expected pipeline error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_on_first_call_names_ats_analysis() {
        let backend = FailingBackend::new(0);
        let err = run_pipeline(&backend, draft_fixture()).await.unwrap_err();
        match err {
            AppError::Pipeline { step, .. } => assert_eq!(step, PipelineStep::AtsAnalysis),
            other => panic!("expected pipeline error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unscoreable_jd_aborts_with_validation_error() {
        // JD skill extraction returns nothing usable
        let backend = ScriptedBackend::new(vec!["Rust, Tokio", "  "]);
        let err = run_pipeline(&backend, draft_fixture()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
