use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{kind_of, lenient, NormalizeError};

/// Structured résumé as produced by the extraction prompt.
/// Every field is optional; an explicit `null` reads the same as a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub personal_information: PersonalInformation,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub technical_skills: Vec<String>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub achievements: Vec<Achievement>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub extracurriculars: Vec<Extracurricular>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInformation {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub cgpa: Option<String>,
}

/// An achievement. Models sometimes emit a bare string instead of `{name, value}`;
/// that string becomes the name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "AchievementRepr")]
pub struct Achievement {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AchievementRepr {
    Text(String),
    Detailed {
        #[serde(default, deserialize_with = "lenient::optional_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient::optional_string")]
        value: Option<String>,
    },
}

impl From<AchievementRepr> for Achievement {
    fn from(repr: AchievementRepr) -> Self {
        match repr {
            AchievementRepr::Text(name) => Achievement {
                name: Some(name),
                value: None,
            },
            AchievementRepr::Detailed { name, value } => Achievement { name, value },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extracurricular {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub organization: Option<String>,
}

impl Resume {
    /// Validates model output against the résumé schema. Only the top level must be an object.
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        if !value.is_object() {
            return Err(NormalizeError::Schema {
                what: "resume",
                reason: format!("expected an object, got {}", kind_of(&value)),
            });
        }
        serde_json::from_value(value).map_err(|e| NormalizeError::Schema {
            what: "resume",
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_resume_deserializes() {
        let value = json!({
            "personal_information": {
                "name": "Ada Lovelace",
                "email": "ada@example.org",
                "phone": "+44 20 0000 0000",
                "linkedin": "linkedin.com/in/ada",
                "github": "github.com/ada"
            },
            "summary": "Mathematician and first programmer.",
            "experience": [{
                "title": "Analyst",
                "company": "Analytical Engine Co",
                "location": "London",
                "start_date": "1842",
                "end_date": "1843",
                "responsibilities": ["Wrote Note G", "Translated Menabrea"]
            }],
            "projects": [{
                "title": "Bernoulli numbers",
                "technologies": ["Punched cards"],
                "description": "First published algorithm.",
                "github": "github.com/ada/note-g"
            }],
            "education": [{
                "degree": "Private tutoring",
                "institution": "Home",
                "start_date": "1828",
                "end_date": "1835",
                "cgpa": 9.5
            }],
            "technical_skills": ["Mathematics", "Algorithms"],
            "achievements": [{"name": "Note G", "value": "First program"}],
            "extracurriculars": [{"role": "Member", "organization": "Royal Society circles"}],
            "coursework": ["Calculus", "Logic"]
        });

        let resume = Resume::from_value(value).unwrap();
        assert_eq!(resume.personal_information.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(resume.experience[0].responsibilities.len(), 2);
        assert_eq!(resume.projects[0].technologies, vec!["Punched cards"]);
        assert_eq!(resume.education[0].cgpa.as_deref(), Some("9.5"));
        assert_eq!(resume.achievements[0].value.as_deref(), Some("First program"));
        assert_eq!(resume.extracurriculars[0].role.as_deref(), Some("Member"));
        assert_eq!(resume.coursework, vec!["Calculus", "Logic"]);
    }

    #[test]
    fn test_sparse_resume_uses_defaults() {
        let value = json!({"personal_information": {"name": "Ada"}, "technical_skills": ["Python"]});
        let resume = Resume::from_value(value).unwrap();
        assert_eq!(resume.personal_information.name.as_deref(), Some("Ada"));
        assert!(resume.personal_information.email.is_none());
        assert!(resume.experience.is_empty());
        assert_eq!(resume.technical_skills, vec!["Python"]);
    }

    #[test]
    fn test_nulls_read_as_missing() {
        let value = json!({
            "personal_information": null,
            "summary": null,
            "experience": null,
            "projects": [{"title": "X", "technologies": null, "github": ""}],
            "technical_skills": null
        });
        let resume = Resume::from_value(value).unwrap();
        assert_eq!(resume.personal_information, PersonalInformation::default());
        assert!(resume.summary.is_none());
        assert!(resume.experience.is_empty());
        assert!(resume.projects[0].technologies.is_empty());
        assert!(resume.projects[0].github.is_none());
    }

    #[test]
    fn test_string_achievement_becomes_name() {
        let value = json!({"achievements": ["Top 1% on Kaggle", {"name": "ICPC", "value": "Rank 12"}]});
        let resume = Resume::from_value(value).unwrap();
        assert_eq!(resume.achievements[0].name.as_deref(), Some("Top 1% on Kaggle"));
        assert!(resume.achievements[0].value.is_none());
        assert_eq!(resume.achievements[1].value.as_deref(), Some("Rank 12"));
    }

    #[test]
    fn test_non_object_is_schema_error() {
        let err = Resume::from_value(json!(["not", "a", "resume"])).unwrap_err();
        match err {
            NormalizeError::Schema { what, reason } => {
                assert_eq!(what, "resume");
                assert!(reason.contains("an array"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_nested_type_is_schema_error() {
        let err = Resume::from_value(json!({"experience": "lots"})).unwrap_err();
        assert!(matches!(err, NormalizeError::Schema { what: "resume", .. }));
    }
}
