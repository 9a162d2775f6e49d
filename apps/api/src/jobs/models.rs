use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{kind_of, lenient, NormalizeError};

/// One job posting as extracted from a careers page. All four fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(deserialize_with = "lenient::required_string")]
    pub role: String,
    #[serde(deserialize_with = "lenient::required_string")]
    pub experience: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::required_string")]
    pub description: String,
}

/// The validated, non-empty list of postings found on a page.
/// The composer works from the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPostings {
    primary: JobPosting,
    others: Vec<JobPosting>,
}

impl JobPostings {
    /// Validates model output against the job posting schema.
    ///
    /// Accepts a single posting object, an array of postings, or an object whose only
    /// member is such an array (e.g. `{"job_postings": [...]}`).
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(map) if !map.contains_key("role") && map.len() == 1 => {
                match map.into_iter().next() {
                    Some((_, Value::Array(items))) => items,
                    Some((key, other)) => {
                        return Err(schema(format!(
                            "expected `{key}` to hold an array of postings, got {}",
                            kind_of(&other)
                        )))
                    }
                    None => Vec::new(),
                }
            }
            obj @ Value::Object(_) => vec![obj],
            other => {
                return Err(schema(format!(
                    "expected an object or an array of objects, got {}",
                    kind_of(&other)
                )))
            }
        };

        let mut postings = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value::<JobPosting>(item)
                    .map_err(|e| schema(format!("posting {i}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();

        let primary = postings
            .next()
            .ok_or_else(|| schema("no job postings found".to_string()))?;

        Ok(Self {
            primary,
            others: postings.collect(),
        })
    }

    pub fn primary(&self) -> &JobPosting {
        &self.primary
    }

    pub fn count(&self) -> usize {
        1 + self.others.len()
    }

    pub fn into_vec(self) -> Vec<JobPosting> {
        let mut all = Vec::with_capacity(1 + self.others.len());
        all.push(self.primary);
        all.extend(self.others);
        all
    }
}

fn schema(reason: String) -> NormalizeError {
    NormalizeError::Schema {
        what: "job posting",
        reason,
    }
}
