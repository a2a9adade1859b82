//! Improvement routing — the one conditional branch in the pipeline.
//!
//! A plain decision function over the ATS score; all three paths converge on
//! the cover-letter step. A score outside 0–100 is a validation error, never
//! silently defaulted.

use crate::errors::AppError;

/// Which improvement path to take after ATS analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImprovementPath {
    /// score ≥ 90 — resume already aligns, no suggestions generated.
    Skip,
    /// 70 ≤ score < 90 — a few short, high-impact suggestions.
    Standard,
    /// score < 70 — detailed suggestions keyed to the missing skills.
    Deep,
}

/// Selects the improvement path for a given ATS score.
pub fn route_improvement(score: u8) -> Result<ImprovementPath, AppError> {
    if score > 100 {
        return Err(AppError::Validation(format!(
            "ATS score {score} is outside the valid 0-100 range"
        )));
    }

    Ok(match score {
        90..=100 => ImprovementPath::Skip,
        70..=89 => ImprovementPath::Standard,
        _ => ImprovementPath::Deep,
    })
}
