//! Résumé Extractor — first-page PDF text in, résumé JSON text out.

pub mod models;
pub mod pdf;
pub mod prompts;

use tracing::debug;

use crate::llm_client::prompts::render;
use crate::llm_client::{LanguageModel, LlmError};
use prompts::RESUME_EXTRACT_PROMPT_TEMPLATE;

pub use models::Resume;
pub use pdf::{extract_first_page_text, PdfError};

pub fn build_resume_prompt(resume_text: &str) -> String {
    render(RESUME_EXTRACT_PROMPT_TEMPLATE, &[("resume_text", resume_text)])
}

/// Asks the model to restructure résumé text as JSON. Returns the raw model text.
pub async fn get_json_resume(resume_text: &str, llm: &dyn LanguageModel) -> Result<String, LlmError> {
    let prompt = build_resume_prompt(resume_text);
    let content = llm.complete(&prompt).await?;
    debug!("Resume extraction output:\n{}", content);
    Ok(content)
}
