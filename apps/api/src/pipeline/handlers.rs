use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::{extract_text, UploadedDocument};
use crate::pipeline::refine::{refine, RefineRequest, RefineResponse};
use crate::pipeline::report::ReportSections;
use crate::pipeline::state::ApplicationDraft;
use crate::pipeline::{run_pipeline, PipelineOutcome};
use crate::state::AppState;

/// Response for a full pipeline run.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub application_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub ats_score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub sections: ReportSections,
    /// The assembled plain-text document, ready for download.
    pub full_report: String,
}

/// POST /api/v1/applications
///
/// Multipart form: `resume` file, `job_description` file, optional
/// `company_name` text field. Both documents are parsed before any model call.
pub async fn handle_generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<GenerateResponse>, AppError> {
    let mut resume_doc: Option<UploadedDocument> = None;
    let mut jd_doc: Option<UploadedDocument> = None;
    let mut company_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" | "job_description" => {
                let file_name = field.file_name().unwrap_or("upload.pdf").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read '{name}': {e}")))?;
                let doc = UploadedDocument {
                    file_name,
                    bytes: bytes.to_vec(),
                };
                if name == "resume" {
                    resume_doc = Some(doc);
                } else {
                    jd_doc = Some(doc);
                }
            }
            "company_name" => {
                company_name = field.text().await.ok().filter(|t| !t.trim().is_empty());
            }
            _ => {} // unknown fields are ignored
        }
    }

    let resume_doc = resume_doc
        .ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;
    let jd_doc = jd_doc
        .ok_or_else(|| AppError::Validation("Missing 'job_description' file field".to_string()))?;

    let resume = extract_text(&resume_doc)?;
    let jd = extract_text(&jd_doc)?;

    let draft = ApplicationDraft::new(resume, jd, company_name);
    let PipelineOutcome {
        draft,
        sections,
        full_report,
    } = run_pipeline(state.llm.as_ref(), draft).await?;

    let ats = draft
        .ats
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("pipeline finished without ATS data")))?;

    Ok(Json(GenerateResponse {
        application_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        ats_score: ats.score,
        matched_skills: ats.matched_skills,
        missing_skills: ats.missing_skills,
        sections,
        full_report,
    }))
}

/// POST /api/v1/applications/refine
pub async fn handle_refine(
    State(state): State<AppState>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<RefineResponse>, AppError> {
    let response = refine(state.llm.as_ref(), request).await?;
    Ok(Json(response))
}
