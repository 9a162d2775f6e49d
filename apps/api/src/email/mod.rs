//! Email Composer — flattens a job posting and a résumé into the cold email prompt
//! and returns whatever the model writes.

pub mod prompts;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::jobs::JobPosting;
use crate::llm_client::prompts::render;
use crate::llm_client::{LanguageModel, LlmError};
use crate::resume::models::{
    Achievement, EducationEntry, ExperienceEntry, ProjectEntry, Resume,
};
use prompts::EMAIL_PROMPT_TEMPLATE;

/// Stand-in for a missing sub-field of an experience, project or education entry.
const NOT_AVAILABLE: &str = "N/A";

/// The model's email, verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedEmail {
    pub text: String,
    pub generated_at: DateTime<Utc>,
}

/// Every value the email template needs, already flattened to text.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailFields {
    pub job_role: String,
    pub job_experience: String,
    pub job_skills: String,
    pub job_description: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub resume_experience: String,
    pub resume_projects: String,
    pub resume_education: String,
    pub resume_skills: String,
    pub extra_sections: String,
}

impl EmailFields {
    /// Missing personal details fall back to the same placeholders the résumé template uses.
    pub fn new(job: &JobPosting, resume: &Resume) -> Self {
        let info = &resume.personal_information;
        Self {
            job_role: job.role.clone(),
            job_experience: job.experience.clone(),
            job_skills: job.skills.join(", "),
            job_description: job.description.clone(),
            name: or_placeholder(&info.name, "Name"),
            email: or_placeholder(&info.email, "email@example.com"),
            phone: or_placeholder(&info.phone, "Phone Number"),
            linkedin: or_placeholder(&info.linkedin, "LinkedIn URL"),
            github: or_placeholder(&info.github, "GitHub URL"),
            resume_experience: format_experience(&resume.experience),
            resume_projects: format_projects(&resume.projects),
            resume_education: format_education(&resume.education),
            resume_skills: resume.technical_skills.join(", "),
            extra_sections: format_extra_sections(resume),
        }
    }

    pub fn render(&self) -> String {
        render(
            EMAIL_PROMPT_TEMPLATE,
            &[
                ("job_role", self.job_role.as_str()),
                ("job_experience", self.job_experience.as_str()),
                ("job_skills", self.job_skills.as_str()),
                ("job_description", self.job_description.as_str()),
                ("name", self.name.as_str()),
                ("email", self.email.as_str()),
                ("phone", self.phone.as_str()),
                ("linkedin", self.linkedin.as_str()),
                ("github", self.github.as_str()),
                ("resume_experience", self.resume_experience.as_str()),
                ("resume_projects", self.resume_projects.as_str()),
                ("resume_education", self.resume_education.as_str()),
                ("resume_skills", self.resume_skills.as_str()),
                ("extra_sections", self.extra_sections.as_str()),
            ],
        )
    }
}

pub fn build_email_prompt(job: &JobPosting, resume: &Resume) -> String {
    let fields = EmailFields::new(job, resume);
    debug!("Resume experience:\n{}", fields.resume_experience);
    debug!("Resume projects:\n{}", fields.resume_projects);
    debug!("Resume education:\n{}", fields.resume_education);
    debug!("Resume skills: {}", fields.resume_skills);
    fields.render()
}

/// Composes the prompt and returns the model's email text unchanged.
/// The output is not checked against the requested five-part structure.
pub async fn generate_email(
    job: &JobPosting,
    resume: &Resume,
    llm: &dyn LanguageModel,
) -> Result<GeneratedEmail, LlmError> {
    let text = llm.complete(&build_email_prompt(job, resume)).await?;
    Ok(GeneratedEmail {
        text,
        generated_at: Utc::now(),
    })
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    value.as_deref().unwrap_or(placeholder).to_string()
}

fn na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn format_experience(entries: &[ExperienceEntry]) -> String {
    entries
        .iter()
        .map(|exp| {
            format!(
                "- {} at {} ({} to {}): {}",
                na(&exp.title),
                na(&exp.company),
                na(&exp.start_date),
                na(&exp.end_date),
                exp.responsibilities.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_projects(entries: &[ProjectEntry]) -> String {
    entries
        .iter()
        .map(|proj| {
            format!(
                "- {} ({}): {} [GitHub: {}]",
                na(&proj.title),
                proj.technologies.join(", "),
                na(&proj.description),
                na(&proj.github)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_education(entries: &[EducationEntry]) -> String {
    entries
        .iter()
        .map(|edu| {
            format!(
                "- {} from {} ({} to {}) - CGPA: {}",
                na(&edu.degree),
                na(&edu.institution),
                na(&edu.start_date),
                na(&edu.end_date),
                na(&edu.cgpa)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_achievements(entries: &[Achievement]) -> String {
    entries
        .iter()
        .filter_map(|a| match (a.name.as_deref(), a.value.as_deref()) {
            (Some(name), Some(value)) => Some(format!("- {name}: {value}")),
            (Some(only), None) | (None, Some(only)) => Some(format!("- {only}")),
            (None, None) => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary and achievements sections, present only when the résumé has them.
/// Each section is surrounded by blank lines so an empty result leaves the template intact.
fn format_extra_sections(resume: &Resume) -> String {
    let mut sections = Vec::new();
    if let Some(summary) = &resume.summary {
        sections.push(format!("Summary:\n{summary}"));
    }
    let achievements = format_achievements(&resume.achievements);
    if !achievements.is_empty() {
        sections.push(format!("Achievements:\n{achievements}"));
    }
    sections.iter().map(|s| format!("\n{s}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobPostings;
    use crate::llm_client::testing::FakeModel;
    use crate::normalize::parse_json;

    fn engineer() -> JobPosting {
        let value = parse_json(
            r#"[{"role":"Engineer","experience":"3 years","skills":["Python","SQL"],"description":"Build pipelines"}]"#,
        )
        .unwrap();
        JobPostings::from_value(value).unwrap().primary().clone()
    }

    fn ada() -> Resume {
        let value =
            parse_json(r#"{"personal_information":{"name":"Ada"}, "technical_skills":["Python"]}"#)
                .unwrap();
        Resume::from_value(value).unwrap()
    }

    #[test]
    fn test_prompt_contains_job_and_resume_fields() {
        let prompt = build_email_prompt(&engineer(), &ada());
        assert!(prompt.contains("Engineer"));
        assert!(prompt.contains("Python, SQL"));
        assert!(prompt.contains("Ada"));
        assert!(prompt.contains("- Email: email@example.com"));
        assert!(prompt.contains("- Phone: Phone Number"));
        assert!(prompt.contains("- LinkedIn: LinkedIn URL"));
        assert!(prompt.contains("- GitHub: GitHub URL"));
        assert!(prompt.contains("Technical Skills:\nPython\n\n### Email Structure:"));
    }

    #[test]
    fn test_empty_resume_uses_all_placeholders() {
        let fields = EmailFields::new(&engineer(), &Resume::default());
        assert_eq!(fields.name, "Name");
        assert_eq!(fields.email, "email@example.com");
        assert_eq!(fields.resume_experience, "");
        assert_eq!(fields.resume_skills, "");
        assert_eq!(fields.extra_sections, "");
    }

    #[test]
    fn test_entry_lines_match_expected_shape() {
        let value = parse_json(
            r#"{
                "experience": [
                    {"title": "Data Engineer", "company": "Acme", "start_date": "2021", "end_date": "Present",
                     "responsibilities": ["Built ETL", "Cut costs 30%"]},
                    {"title": "Intern", "company": "Initech", "start_date": "2020", "end_date": "2020",
                     "responsibilities": []}
                ],
                "projects": [
                    {"title": "Pipeliner", "technologies": ["Rust", "Kafka"], "description": "Stream joins", "github": "gh/p"}
                ],
                "education": [
                    {"degree": "BSc CS", "institution": "MIT", "start_date": "2016", "end_date": "2020"}
                ]
            }"#,
        )
        .unwrap();
        let fields = EmailFields::new(&engineer(), &Resume::from_value(value).unwrap());

        assert_eq!(
            fields.resume_experience,
            "- Data Engineer at Acme (2021 to Present): Built ETL, Cut costs 30%\n\
             - Intern at Initech (2020 to 2020): "
        );
        assert_eq!(
            fields.resume_projects,
            "- Pipeliner (Rust, Kafka): Stream joins [GitHub: gh/p]"
        );
        assert_eq!(
            fields.resume_education,
            "- BSc CS from MIT (2016 to 2020) - CGPA: N/A"
        );
    }

    #[test]
    fn test_missing_entry_fields_render_not_available() {
        let resume = Resume {
            projects: vec![ProjectEntry::default()],
            ..Resume::default()
        };
        let fields = EmailFields::new(&engineer(), &resume);
        assert_eq!(fields.resume_projects, "- N/A (): N/A [GitHub: N/A]");
    }

    #[test]
    fn test_summary_and_achievements_sections() {
        let resume = Resume {
            summary: Some("Backend engineer.".to_string()),
            achievements: vec![
                Achievement {
                    name: Some("ICPC".to_string()),
                    value: Some("Rank 12".to_string()),
                },
                Achievement {
                    name: None,
                    value: None,
                },
                Achievement {
                    name: Some("Hackathon winner".to_string()),
                    value: None,
                },
            ],
            ..Resume::default()
        };
        let prompt = build_email_prompt(&engineer(), &resume);
        assert!(prompt.contains(
            "Summary:\nBackend engineer.\n\nAchievements:\n- ICPC: Rank 12\n- Hackathon winner\n\n### Email Structure:"
        ));
    }

    #[test]
    fn test_job_values_are_not_rescanned() {
        let mut job = engineer();
        job.description = "Own the {name} service".to_string();
        let prompt = build_email_prompt(&job, &ada());
        assert!(prompt.contains("- Job Description: Own the {name} service"));
    }

    #[tokio::test]
    async fn test_generate_email_returns_model_text_verbatim() {
        let reply = "Subject: Engineer role\n\nHi team,\n...\nBest,\nAda";
        let llm = FakeModel::with_replies([reply]);

        let email = generate_email(&engineer(), &ada(), &llm).await.unwrap();

        assert_eq!(email.text, reply);
        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with(
            "Write a compelling and professional cold email applying for the Engineer position."
        ));
    }
}
