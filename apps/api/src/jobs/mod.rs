//! Job-Description Extractor — careers page URL in, job posting JSON text out.

pub mod models;
pub mod prompts;

use thiserror::Error;
use tracing::{debug, info};

use crate::llm_client::prompts::render;
use crate::llm_client::{LanguageModel, LlmError};
use crate::scrape::{FetchError, PageLoader};
use prompts::JOB_EXTRACT_PROMPT_TEMPLATE;

pub use models::{JobPosting, JobPostings};

/// Anything that stopped the job description from being produced.
/// Every variant renders with the same `Error fetching job description:` prefix.
#[derive(Debug, Error)]
pub enum JobDescriptionError {
    #[error("Error fetching job description: no URL was provided")]
    MissingUrl,

    #[error("Error fetching job description: {0}")]
    Page(#[from] FetchError),

    #[error("Error fetching job description: {0}")]
    Model(#[from] LlmError),
}

/// Renders the extraction prompt with the scraped page text embedded verbatim.
pub fn build_job_prompt(page_data: &str) -> String {
    render(JOB_EXTRACT_PROMPT_TEMPLATE, &[("page_data", page_data)])
}

/// Loads the careers page, keeps the first document's text, and asks the model for
/// job posting JSON. Returns the raw model text; it is not parsed here.
pub async fn get_job_description(
    url: &str,
    loader: &dyn PageLoader,
    llm: &dyn LanguageModel,
) -> Result<String, JobDescriptionError> {
    if url.trim().is_empty() {
        return Err(JobDescriptionError::MissingUrl);
    }

    let page = loader.load(url.trim()).await?;
    info!(
        "Loaded careers page {} ({} chars)",
        page.source_url,
        page.content.len()
    );
    debug!("Scraped page text:\n{}", page.content);

    let prompt = build_job_prompt(&page.content);
    let content = llm.complete(&prompt).await?;
    debug!("Job extraction output:\n{}", content);

    Ok(content)
}
