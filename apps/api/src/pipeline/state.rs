//! Application state — the one record threaded through every pipeline stage.
//!
//! The draft is passed BY VALUE between stages: each stage consumes the
//! previous record and returns a new one via the `with_*` builders. No stage
//! mutates shared state, which keeps step ordering and partial failure
//! explicit.

/// Result of the ATS analysis stage.
#[derive(Debug, Clone)]
pub struct AtsAnalysis {
    /// 0–100 skill-match score.
    pub score: u8,
    /// JD skills present in the resume, in the JD's original casing.
    pub matched_skills: Vec<String>,
    /// JD skills absent from the resume, in the JD's original casing.
    pub missing_skills: Vec<String>,
}

/// The application draft. Created from the parsed documents, filled
/// field-by-field by successive stages, discarded once the report is rendered.
#[derive(Debug, Clone, Default)]
pub struct ApplicationDraft {
    pub resume: String,
    pub jd: String,
    pub company_name: Option<String>,
    pub ats: Option<AtsAnalysis>,
    /// `None` means the improvement step was skipped (score ≥ 90).
    pub improvements: Option<String>,
    pub cover_letter: Option<String>,
    pub optimized_bullets: Option<String>,
    pub interview_questions: Option<String>,
    pub role_expectations: Option<String>,
    pub learning_plan: Option<String>,
    pub critique: Option<String>,
}

impl ApplicationDraft {
    pub fn new(resume: String, jd: String, company_name: Option<String>) -> Self {
        Self {
            resume,
            jd,
            company_name,
            ..Default::default()
        }
    }

    /// Company name for prompt personalization, with the generic fallback.
    pub fn company(&self) -> &str {
        self.company_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("the company")
    }

    pub fn with_ats(mut self, ats: AtsAnalysis) -> Self {
        self.ats = Some(ats);
        self
    }

    pub fn with_improvements(mut self, improvements: Option<String>) -> Self {
        self.improvements = improvements;
        self
    }

    pub fn with_cover_letter(mut self, cover_letter: String) -> Self {
        self.cover_letter = Some(cover_letter);
        self
    }

    pub fn with_optimized_bullets(mut self, bullets: String) -> Self {
        self.optimized_bullets = Some(bullets);
        self
    }

    pub fn with_interview_questions(mut self, questions: String) -> Self {
        self.interview_questions = Some(questions);
        self
    }

    pub fn with_role_expectations(mut self, research: String) -> Self {
        self.role_expectations = Some(research);
        self
    }

    pub fn with_learning_plan(mut self, plan: String) -> Self {
        self.learning_plan = Some(plan);
        self
    }

    pub fn with_critique(mut self, critique: String) -> Self {
        self.critique = Some(critique);
        self
    }
}
