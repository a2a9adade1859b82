//! Refinement — user-directed rewrite of one section of an existing report.
//!
//! Stateless: the caller sends back the documents and the prior sections.
//! Exactly one model call rewrites the chosen section; every other section is
//! returned byte-identical.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::CompletionBackend;
use crate::pipeline::prompts::{REFINE_PROMPT_TEMPLATE, WRITER_SYSTEM};
use crate::pipeline::report::ReportSections;
use crate::pipeline::PipelineStep;

/// The user's refinement focus — the dropdown on the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementFocus {
    CoverLetter,
    ResumeBullets,
    InterviewPrep,
    LearningPlan,
}

impl RefinementFocus {
    fn instruction(self) -> &'static str {
        match self {
            RefinementFocus::CoverLetter => {
                "Focus: the COVER LETTER. Make it more personal and more tightly \
                 aligned with the job requirements, staying at 250-300 words."
            }
            RefinementFocus::ResumeBullets => {
                "Focus: the OPTIMIZED RESUME BULLETS. Strengthen action verbs and \
                 quantification; keep each bullet starting with \"•\"."
            }
            RefinementFocus::InterviewPrep => {
                "Focus: the INTERVIEW PREPARATION questions. Raise their difficulty \
                 and specificity to this exact role; keep them numbered."
            }
            RefinementFocus::LearningPlan => {
                "Focus: the SKILL GROWTH PLAN. Make resources and milestones more \
                 concrete and the timeline more realistic."
            }
        }
    }

    fn target<'a>(self, sections: &'a ReportSections) -> &'a str {
        match self {
            RefinementFocus::CoverLetter => &sections.cover_letter,
            RefinementFocus::ResumeBullets => &sections.optimized_bullets,
            RefinementFocus::InterviewPrep => &sections.interview_questions,
            RefinementFocus::LearningPlan => &sections.learning_plan,
        }
    }

    fn replace(self, sections: &mut ReportSections, rewritten: String) {
        match self {
            RefinementFocus::CoverLetter => sections.cover_letter = rewritten,
            RefinementFocus::ResumeBullets => sections.optimized_bullets = rewritten,
            RefinementFocus::InterviewPrep => sections.interview_questions = rewritten,
            RefinementFocus::LearningPlan => sections.learning_plan = rewritten,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub resume: String,
    pub jd: String,
    pub focus: RefinementFocus,
    pub sections: ReportSections,
}

#[derive(Debug, Serialize)]
pub struct RefineResponse {
    pub focus: RefinementFocus,
    pub sections: ReportSections,
    pub full_report: String,
}

/// Rewrites the focused section with one model call and recompiles the report.
pub async fn refine(
    llm: &dyn CompletionBackend,
    request: RefineRequest,
) -> Result<RefineResponse, AppError> {
    let target = request.focus.target(&request.sections);
    if target.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "The {:?} section is empty; generate a package before refining it",
            request.focus
        )));
    }

    let prompt = REFINE_PROMPT_TEMPLATE
        .replace("{focus_instruction}", request.focus.instruction())
        .replace("{section}", target)
        .replace("{resume}", &request.resume)
        .replace("{jd}", &request.jd);

    let rewritten = llm
        .complete(&prompt, WRITER_SYSTEM)
        .await
        .map_err(|e| AppError::Pipeline {
            step: PipelineStep::Refine,
            message: e.to_string(),
        })?;

    let mut sections = request.sections;
    request.focus.replace(&mut sections, rewritten.trim().to_string());
    let full_report = sections.compile();

    Ok(RefineResponse {
        focus: request.focus,
        sections,
        full_report,
    })
}
