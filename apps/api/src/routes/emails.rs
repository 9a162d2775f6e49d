//! Axum route handlers for the email pipeline and its individual stages.

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::JobPosting;
use crate::pipeline::{self, EmailRequest, PipelineOutput};
use crate::resume::Resume;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Deserialize)]
pub struct ExtractJobRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractJobResponse {
    pub job_postings: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResumeResponse {
    pub resume_text: String,
    pub resume: Resume,
}

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /api/v1/emails/generate
///
/// Multipart form with `job_url` and `resume` (PDF). Runs the whole pipeline.
pub async fn handle_generate_email(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PipelineOutput>, AppError> {
    let form = read_email_form(multipart).await?;
    let request = form.request.validate()?;
    ensure_pdf(form.resume_is_pdf)?;
    let output = pipeline::run(request, state.loader.as_ref(), state.llm.as_ref()).await?;
    Ok(Json(output))
}

/// POST /api/v1/jobs/extract
///
/// Runs only the job-description stage and returns every posting found on the page.
pub async fn handle_extract_job(
    State(state): State<AppState>,
    Json(request): Json<ExtractJobRequest>,
) -> Result<Json<ExtractJobResponse>, AppError> {
    if request.url.trim().is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    let postings =
        pipeline::extract_job_postings(&request.url, state.loader.as_ref(), state.llm.as_ref())
            .await?;

    Ok(Json(ExtractJobResponse {
        job_postings: postings.into_vec(),
    }))
}

/// POST /api/v1/resumes/extract
///
/// Multipart form with `resume` (PDF). Returns the first-page text and the structured résumé.
pub async fn handle_extract_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractResumeResponse>, AppError> {
    let form = read_email_form(multipart).await?;
    let pdf = form
        .request
        .resume_pdf
        .ok_or_else(|| AppError::Validation("resume cannot be empty".to_string()))?;
    ensure_pdf(form.resume_is_pdf)?;

    let (resume_text, resume) = pipeline::extract_resume(pdf, state.llm.as_ref()).await?;

    Ok(Json(ExtractResumeResponse {
        resume_text,
        resume,
    }))
}

/// A submitted form. The upload's declared type is kept aside so that missing inputs
/// are reported before a wrong file type.
struct EmailForm {
    request: EmailRequest,
    resume_is_pdf: bool,
}

fn ensure_pdf(resume_is_pdf: bool) -> Result<(), AppError> {
    if resume_is_pdf {
        Ok(())
    } else {
        Err(AppError::Validation("resume must be a PDF file".to_string()))
    }
}

/// Reads `job_url` and `resume` from a multipart form. Unknown fields are ignored and
/// an empty file part counts as no file.
async fn read_email_form(mut multipart: Multipart) -> Result<EmailForm, AppError> {
    let mut form = EmailForm {
        request: EmailRequest::default(),
        resume_is_pdf: false,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid form data: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("job_url") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid job_url: {e}")))?;
                form.request.job_url = Some(text);
            }
            Some("resume") => {
                let declared_pdf = field.content_type() == Some("application/pdf")
                    || field
                        .file_name()
                        .is_some_and(|f| f.to_ascii_lowercase().ends_with(".pdf"));
                let data: Bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid resume upload: {e}")))?;
                if data.is_empty() {
                    continue;
                }
                form.resume_is_pdf = declared_pdf;
                form.request.resume_pdf = Some(data);
            }
            _ => {}
        }
    }

    Ok(form)
}
