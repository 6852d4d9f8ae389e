//! Axum route handlers for the session form and the analyze action.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::analysis::{extract, feedback};
use crate::errors::AppError;
use crate::session::{Session, UploadedResume, DESCRIPTION_WIDGET, RESUME_WIDGET};
use crate::state::AppState;

/// Warning returned when the analyze preconditions are not met. This is the
/// only input validation in the system — no size, page-count or length checks.
pub const ANALYZE_PRECONDITION_WARNING: &str =
    "Upload a resume and enter a job description before analyzing.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeSummary {
    pub file_name: String,
    pub size_bytes: usize,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct WidgetKeys {
    pub resume: String,
    pub description: String,
}

/// What the presentation layer renders: the current inputs plus the widget
/// identities it must key its clearable controls by. Raw resume bytes are
/// never echoed back.
#[derive(Debug, Serialize)]
pub struct FormView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume: Option<ResumeSummary>,
    pub job_description: String,
    pub generation: u64,
    pub widget_keys: WidgetKeys,
}

impl FormView {
    fn from_session(session: &Session) -> Self {
        let form = &session.form;
        Self {
            session_id: session.id,
            created_at: session.created_at,
            resume: form.resume().map(|r| ResumeSummary {
                file_name: r.file_name.clone(),
                size_bytes: r.bytes.len(),
                uploaded_at: r.uploaded_at,
            }),
            job_description: form.job_description().to_string(),
            generation: form.generation(),
            widget_keys: WidgetKeys {
                resume: form.widget_key(RESUME_WIDGET),
                description: form.widget_key(DESCRIPTION_WIDGET),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub feedback: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> (StatusCode, Json<FormView>) {
    let handle = state.sessions.create().await;
    let session = handle.lock().await;
    info!("session {} created", session.id);
    (StatusCode::CREATED, Json(FormView::from_session(&session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormView>, AppError> {
    let handle = lookup(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(FormView::from_session(&session)))
}

/// POST /api/v1/sessions/:id/resume
///
/// Accepts one file per upload event; the file must be a PDF. That is the
/// whole contract of the upload boundary — no size or page-count limit.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<FormView>, AppError> {
    let handle = lookup(&state, id).await?;

    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?
        .ok_or_else(|| AppError::Validation("Upload one PDF file".to_string()))?;

    let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
    let content_type = field.content_type().map(str::to_string);
    if !is_pdf(&file_name, content_type.as_deref()) {
        return Err(AppError::Validation(
            "Resume must be a PDF document".to_string(),
        ));
    }

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?;
    let size = bytes.len();

    let mut session = handle.lock().await;
    session.form.set_resume(UploadedResume {
        file_name,
        bytes,
        uploaded_at: Utc::now(),
    });
    info!("session {}: resume stored ({size} bytes)", session.id);
    Ok(Json(FormView::from_session(&session)))
}

/// PUT /api/v1/sessions/:id/job
pub async fn handle_set_job_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<JobDescriptionRequest>,
) -> Result<Json<FormView>, AppError> {
    let handle = lookup(&state, id).await?;
    let mut session = handle.lock().await;
    session.form.set_job_description(req.text);
    Ok(Json(FormView::from_session(&session)))
}

/// POST /api/v1/sessions/:id/analyze
///
/// Runs the whole action under the session lock: precondition guard, PDF text
/// extraction, then the single remote call. Other requests for this session
/// wait until the call completes or fails; there is no cancellation. Every
/// failure aborts the action and leaves the form exactly as it was.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let handle = lookup(&state, id).await?;
    let session = handle.lock().await;

    let form = &session.form;
    let resume = match form.resume() {
        Some(resume) if !form.job_description().trim().is_empty() => resume,
        _ => {
            return Err(AppError::Validation(
                ANALYZE_PRECONDITION_WARNING.to_string(),
            ))
        }
    };

    let resume_text =
        extract::extract_text(&resume.bytes).map_err(|e| AppError::PdfParse(e.to_string()))?;

    // The prompt embeds the job description untrimmed; trimming is for the
    // emptiness check only.
    let feedback_text =
        feedback::analyze(&resume_text, form.job_description(), state.llm.as_ref()).await?;

    info!(
        "session {}: analysis completed ({} feedback chars)",
        session.id,
        feedback_text.len()
    );
    Ok(Json(AnalyzeResponse {
        feedback: feedback_text,
    }))
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormView>, AppError> {
    let handle = lookup(&state, id).await?;
    let mut session = handle.lock().await;
    session.form.reset();
    info!(
        "session {}: form reset (generation {})",
        session.id,
        session.form.generation()
    );
    Ok(Json(FormView::from_session(&session)))
}

async fn lookup(state: &AppState, id: Uuid) -> Result<Arc<Mutex<Session>>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

fn is_pdf(file_name: &str, content_type: Option<&str>) -> bool {
    file_name.to_ascii_lowercase().ends_with(".pdf") || content_type == Some("application/pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FormState;
    use bytes::Bytes;

    #[test]
    fn test_is_pdf_accepts_pdf_extension_case_insensitively() {
        assert!(is_pdf("resume.pdf", None));
        assert!(is_pdf("RESUME.PDF", None));
    }

    #[test]
    fn test_is_pdf_accepts_pdf_content_type_regardless_of_name() {
        assert!(is_pdf("resume", Some("application/pdf")));
    }

    #[test]
    fn test_is_pdf_rejects_other_documents() {
        assert!(!is_pdf("resume.docx", None));
        assert!(!is_pdf("resume.txt", Some("text/plain")));
    }

    #[test]
    fn test_form_view_projects_resume_summary_without_bytes() {
        let mut session = Session {
            id: Uuid::new_v4(),
            form: FormState::new(),
            created_at: Utc::now(),
        };
        session.form.set_resume(UploadedResume {
            file_name: "cv.pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF-1.4"),
            uploaded_at: Utc::now(),
        });
        session.form.set_job_description("Senior role".to_string());

        let view = FormView::from_session(&session);
        let resume = view.resume.as_ref().expect("resume summary present");
        assert_eq!(resume.file_name, "cv.pdf");
        assert_eq!(resume.size_bytes, 8);
        assert_eq!(view.job_description, "Senior role");
        assert_eq!(view.widget_keys.resume, "resume_0");
        assert_eq!(view.widget_keys.description, "desc_0");

        let serialized = serde_json::to_string(&view).unwrap();
        assert!(!serialized.contains("%PDF"), "raw bytes must not be echoed");
    }

    #[test]
    fn test_form_view_of_empty_form_has_no_resume() {
        let session = Session {
            id: Uuid::new_v4(),
            form: FormState::new(),
            created_at: Utc::now(),
        };
        let view = FormView::from_session(&session);
        assert!(view.resume.is_none());
        assert_eq!(view.generation, 0);
    }
}
