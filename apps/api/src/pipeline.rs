//! The email pipeline — strictly sequential:
//! job page → job JSON → normalize → PDF text → résumé JSON → normalize → email.

use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::email::{generate_email, GeneratedEmail};
use crate::errors::AppError;
use crate::jobs::{get_job_description, JobPosting, JobPostings};
use crate::llm_client::LanguageModel;
use crate::normalize::parse_json;
use crate::resume::{extract_first_page_text, get_json_resume, Resume};
use crate::scrape::PageLoader;

pub const MISSING_INPUTS_MESSAGE: &str = "Please provide both the job URL and your resume.";

/// What the user submitted. Either part may be absent.
#[derive(Debug, Clone, Default)]
pub struct EmailRequest {
    pub job_url: Option<String>,
    pub resume_pdf: Option<Bytes>,
}

/// Inputs that passed validation: a non-blank URL and a non-empty upload.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub job_url: String,
    pub resume_pdf: Bytes,
}

impl EmailRequest {
    pub fn validate(self) -> Result<ValidatedRequest, AppError> {
        let job_url = self
            .job_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        let resume_pdf = self.resume_pdf.filter(|b| !b.is_empty());

        match (job_url, resume_pdf) {
            (Some(job_url), Some(resume_pdf)) => Ok(ValidatedRequest {
                job_url,
                resume_pdf,
            }),
            _ => Err(AppError::Validation(MISSING_INPUTS_MESSAGE.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub run_id: Uuid,
    pub job_posting: JobPosting,
    pub resume: Resume,
    pub email: GeneratedEmail,
}

/// Stage 1 + 2: careers page to validated job postings.
pub async fn extract_job_postings(
    url: &str,
    loader: &dyn PageLoader,
    llm: &dyn LanguageModel,
) -> Result<JobPostings, AppError> {
    let raw = get_job_description(url, loader, llm).await?;
    Ok(JobPostings::from_value(parse_json(&raw)?)?)
}

/// Stage 3 + 4: PDF upload to first-page text and validated résumé.
pub async fn extract_resume(
    pdf: Bytes,
    llm: &dyn LanguageModel,
) -> Result<(String, Resume), AppError> {
    let text = extract_first_page_text(pdf).await?;
    let raw = get_json_resume(&text, llm).await?;
    let resume = Resume::from_value(parse_json(&raw)?)?;
    Ok((text, resume))
}

/// Runs every stage in order. Taking a `ValidatedRequest` means no page fetch or model
/// call can happen before `EmailRequest::validate` succeeds.
pub async fn run(
    request: ValidatedRequest,
    loader: &dyn PageLoader,
    llm: &dyn LanguageModel,
) -> Result<PipelineOutput, AppError> {
    let run_id = Uuid::new_v4();

    info!("[{run_id}] extracting job description from {}", request.job_url);
    let postings = extract_job_postings(&request.job_url, loader, llm).await?;
    info!(
        "[{run_id}] found {} job posting(s); using '{}'",
        postings.count(),
        postings.primary().role
    );

    info!(
        "[{run_id}] extracting resume ({} bytes)",
        request.resume_pdf.len()
    );
    let (_, resume) = extract_resume(request.resume_pdf, llm).await?;

    info!("[{run_id}] composing email");
    let job_posting = postings.primary().clone();
    let email = generate_email(&job_posting, &resume, llm).await?;
    info!("[{run_id}] email generated ({} chars)", email.text.len());

    Ok(PipelineOutput {
        run_id,
        job_posting,
        resume,
        email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::FakeModel;
    use crate::resume::pdf::testing::pdf_with_pages;
    use crate::scrape::testing::FakeLoader;

    const PAGE: &str = "Engineer\n3 years\nPython, SQL\nBuild pipelines";
    const JOB_JSON: &str = r#"[{"role":"Engineer","experience":"3 years","skills":["Python","SQL"],"description":"Build pipelines"}]"#;
    const RESUME_JSON: &str =
        r#"{"personal_information":{"name":"Ada"}, "technical_skills":["Python"]}"#;

    fn full_request() -> ValidatedRequest {
        EmailRequest {
            job_url: Some("https://acme.test/careers".to_string()),
            resume_pdf: Some(Bytes::from(pdf_with_pages(&["Ada Lovelace, Engineer"]))),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_validate_requires_both_inputs() {
        let cases = [
            EmailRequest::default(),
            EmailRequest {
                job_url: Some("https://acme.test".to_string()),
                resume_pdf: None,
            },
            EmailRequest {
                job_url: Some("   ".to_string()),
                resume_pdf: Some(Bytes::from_static(b"%PDF")),
            },
            EmailRequest {
                job_url: Some("https://acme.test".to_string()),
                resume_pdf: Some(Bytes::new()),
            },
        ];
        for request in cases {
            match request.validate() {
                Err(AppError::Validation(msg)) => assert_eq!(msg, MISSING_INPUTS_MESSAGE),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_trims_url() {
        let valid = EmailRequest {
            job_url: Some("  https://acme.test/jobs \n".to_string()),
            resume_pdf: Some(Bytes::from_static(b"%PDF")),
        }
        .validate()
        .unwrap();
        assert_eq!(valid.job_url, "https://acme.test/jobs");
    }

    #[tokio::test]
    async fn test_full_run_calls_each_stage_in_order() {
        let loader = FakeLoader::serving(PAGE);
        let llm = FakeModel::with_replies([JOB_JSON, RESUME_JSON, "Dear hiring team, ..."]);

        let output = run(full_request(), &loader, &llm).await.unwrap();

        assert_eq!(output.email.text, "Dear hiring team, ...");
        assert_eq!(output.job_posting.role, "Engineer");
        assert_eq!(
            output.resume.personal_information.name.as_deref(),
            Some("Ada")
        );

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].contains(PAGE));
        assert!(prompts[1].contains("### Resume text:\nAda Lovelace, Engineer\n"));
        assert!(prompts[2].contains("Python, SQL"));
        assert!(prompts[2].contains("- Name: Ada"));
        assert!(prompts[2].contains("- Email: email@example.com"));
    }

    #[tokio::test]
    async fn test_fetch_failure_stops_before_parsing() {
        let loader = FakeLoader::unreachable();
        let llm = FakeModel::with_replies([JOB_JSON, RESUME_JSON, "email"]);

        let err = run(full_request(), &loader, &llm).await.unwrap_err();

        match err {
            AppError::JobDescription(e) => {
                assert!(e.to_string().starts_with("Error fetching job description:"))
            }
            other => panic!("expected fetch failure, got {other:?}"),
        }
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_prose_job_output_is_model_output_error() {
        let loader = FakeLoader::serving(PAGE);
        let llm = FakeModel::with_replies([
            "Sure! Here are the postings: [{\"role\": \"Engineer\"}]",
            RESUME_JSON,
            "email",
        ]);

        let err = run(full_request(), &loader, &llm).await.unwrap_err();

        assert!(matches!(err, AppError::ModelOutput(_)));
        assert_eq!(llm.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_job_posting_missing_field_is_schema_error() {
        let loader = FakeLoader::serving(PAGE);
        let llm = FakeModel::with_replies([
            r#"[{"role":"Engineer","skills":["Python"],"description":"x"}]"#,
            RESUME_JSON,
            "email",
        ]);

        let err = run(full_request(), &loader, &llm).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::ModelOutput(crate::normalize::NormalizeError::Schema { .. })
        ));
    }
}
