//! Report compiler — pure string assembly of the final package.
//!
//! Section order is fixed regardless of which branch the pipeline took.
//! Optional sections (improvements, review notes) are omitted entirely when
//! the producing step did not run.

use serde::{Deserialize, Serialize};

use crate::pipeline::state::{ApplicationDraft, AtsAnalysis};

const DIVIDER: &str =
    "================================================================================";

/// Skills rendered per list in the ATS section; anything beyond is noise.
const MAX_REPORT_SKILLS: usize = 15;

/// The named sections of a compiled report, in pipeline order.
/// Serialized as-is in API responses and accepted back by the refine endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSections {
    pub ats: String,
    /// Absent when the improvement step was skipped (score ≥ 90).
    pub improvements: Option<String>,
    pub cover_letter: String,
    pub optimized_bullets: String,
    pub interview_questions: String,
    pub role_expectations: String,
    pub learning_plan: String,
    /// Absent only in the preliminary compile that feeds self-review.
    pub review_notes: Option<String>,
}

impl ReportSections {
    /// Collects the artifacts out of a pipeline draft. Fields for steps that
    /// have not run yet render as empty strings.
    pub fn from_draft(draft: &ApplicationDraft) -> Self {
        Self {
            ats: draft
                .ats
                .as_ref()
                .map(render_ats_section)
                .unwrap_or_default(),
            improvements: draft.improvements.clone(),
            cover_letter: draft.cover_letter.clone().unwrap_or_default(),
            optimized_bullets: draft.optimized_bullets.clone().unwrap_or_default(),
            interview_questions: draft.interview_questions.clone().unwrap_or_default(),
            role_expectations: draft.role_expectations.clone().unwrap_or_default(),
            learning_plan: draft.learning_plan.clone().unwrap_or_default(),
            review_notes: draft.critique.clone(),
        }
    }

    /// Assembles the downloadable plain-text report.
    pub fn compile(&self) -> String {
        let mut labeled: Vec<(&str, &str)> = vec![("COMPLETE JOB APPLICATION PACKAGE", "")];
        labeled.push(("ATS MATCH SCORE", &self.ats));
        if let Some(improvements) = &self.improvements {
            labeled.push(("RESUME IMPROVEMENT SUGGESTIONS", improvements));
        }
        labeled.push(("COVER LETTER", &self.cover_letter));
        labeled.push(("OPTIMIZED RESUME BULLETS", &self.optimized_bullets));
        labeled.push(("INTERVIEW PREPARATION", &self.interview_questions));
        labeled.push(("ROLE EXPECTATIONS & RESEARCH", &self.role_expectations));
        labeled.push(("SKILL GROWTH PLAN", &self.learning_plan));
        if let Some(notes) = &self.review_notes {
            labeled.push(("REVIEW NOTES", notes));
        }

        let mut report = String::new();
        for (label, body) in labeled {
            report.push_str(DIVIDER);
            report.push('\n');
            report.push_str(label);
            report.push('\n');
            report.push_str(DIVIDER);
            report.push('\n');
            if !body.is_empty() {
                report.push('\n');
                report.push_str(body.trim_end());
                report.push('\n');
            }
            report.push('\n');
        }
        report.push_str(DIVIDER);
        report.push_str("\nEND OF REPORT\n");
        report.push_str(DIVIDER);
        report.push('\n');
        report
    }
}

/// Renders the ATS block: score plus bulleted matched/missing skill lists.
pub fn render_ats_section(ats: &AtsAnalysis) -> String {
    let bullet_list = |skills: &[String]| -> String {
        skills
            .iter()
            .take(MAX_REPORT_SKILLS)
            .map(|s| format!("  • {s}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "ATS MATCH SCORE: {}/100\n\nMATCHED SKILLS:\n{}\n\nMISSING SKILLS:\n{}",
        ats.score,
        bullet_list(&ats.matched_skills),
        bullet_list(&ats.missing_skills),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections_fixture(improvements: Option<&str>) -> ReportSections {
        ReportSections {
            ats: "ATS MATCH SCORE: 75/100".to_string(),
            improvements: improvements.map(String::from),
            cover_letter: "Dear team".to_string(),
            optimized_bullets: "• Did things".to_string(),
            interview_questions: "1. Why Rust?".to_string(),
            role_expectations: "Senior role".to_string(),
            learning_plan: "Learn Kafka".to_string(),
            review_notes: Some("Tighten the opener".to_string()),
        }
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let report = sections_fixture(Some("1. Add metrics")).compile();
        let labels = [
            "ATS MATCH SCORE",
            "RESUME IMPROVEMENT SUGGESTIONS",
            "COVER LETTER",
            "OPTIMIZED RESUME BULLETS",
            "INTERVIEW PREPARATION",
            "ROLE EXPECTATIONS & RESEARCH",
            "SKILL GROWTH PLAN",
            "REVIEW NOTES",
        ];
        let mut last = 0;
        for label in labels {
            let pos = report.find(label).unwrap_or_else(|| panic!("missing {label}"));
            assert!(pos > last, "{label} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_skipped_improvements_section_is_absent() {
        let report = sections_fixture(None).compile();
        assert!(!report.contains("RESUME IMPROVEMENT SUGGESTIONS"));
        assert!(report.contains("COVER LETTER"));
    }

    #[test]
    fn test_preliminary_compile_has_no_review_notes() {
        let mut sections = sections_fixture(None);
        sections.review_notes = None;
        let report = sections.compile();
        assert!(!report.contains("REVIEW NOTES"));
        assert!(report.contains("END OF REPORT"));
    }

    #[test]
    fn test_ats_section_caps_skill_lists_at_15() {
        let ats = AtsAnalysis {
            score: 10,
            matched_skills: vec![],
            missing_skills: (0..30).map(|i| format!("skill{i}")).collect(),
        };
        let section = render_ats_section(&ats);
        assert_eq!(section.matches("  • ").count(), 15);
        assert!(section.contains("ATS MATCH SCORE: 10/100"));
    }

    #[test]
    fn test_from_draft_carries_artifacts_over() {
        let draft = ApplicationDraft::new("r".into(), "j".into(), None)
            .with_cover_letter("letter".into())
            .with_learning_plan("plan".into());
        let sections = ReportSections::from_draft(&draft);
        assert_eq!(sections.cover_letter, "letter");
        assert_eq!(sections.learning_plan, "plan");
        assert!(sections.improvements.is_none());
        assert!(sections.review_notes.is_none());
    }
}
