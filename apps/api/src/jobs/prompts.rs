// Prompt for turning scraped careers-page text into job posting JSON.

/// Job extraction prompt template. Render with `{page_data}`.
pub const JOB_EXTRACT_PROMPT_TEMPLATE: &str = r#"### SCRAPED TEXT FROM WEBSITE:
{page_data}
### INSTRUCTION:
The scraped text is from the career's page of a website.
Your job is to extract the job postings and return them in JSON format containing the following keys: `role`, `experience`, `skills`, and `description`.
Only return the valid JSON which has all the 4 fields.

### VALID JSON (NO PREAMBLE):
"#;
