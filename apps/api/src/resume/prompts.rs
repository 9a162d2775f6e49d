// Prompt for converting résumé text into the structured JSON the email composer reads.
// The embedded template's field names are the contract with `resume::models::Resume`.

/// Résumé extraction prompt template. Render with `{resume_text}`.
/// `{{` / `}}` render as literal braces.
pub const RESUME_EXTRACT_PROMPT_TEMPLATE: &str = r#"### Task:
Convert the following resume text into a structured JSON format. Ensure that all relevant information is correctly categorized according to the provided JSON structure template.

### Resume text:
{resume_text}

### Instructions :
1. Extract 'personal information', 'experience', 'projects', 'education', 'technical skills', 'achievements', 'extracurriculars', and 'coursework' from the resume text.
2. Format the output into the JSON template below.
3. Ensure that each field is accurately filled based on the resume content.

### VALID JSON (NO PREAMBLE):

### JSON Template
{{
    "personal_information": {{
        "name": "Full Name",
        "email": "email@example.com",
        "phone": "Phone Number",
        "linkedin": "LinkedIn URL",
        "github": "GitHub URL"
    }},
    "summary": "A brief summary or objective (optional)",
    "experience": [
        {{
        "title": "Job Title",
        "company": "Company Name",
        "location": "Location",
        "start_date": "Start Date",
        "end_date": "End Date (or 'Present')",
        "responsibilities": [
            "Responsibility 1",
            "Responsibility 2",
            "Responsibility 3"
        ]
        }}
    ],
    "projects": [
        {{
        "title": "Project Title",
        "technologies": ["Technology 1", "Technology 2"],
        "description": "Brief description of the project.",
        "github": "GitHub URL"
        }}
    ],
    "education": [
        {{
        "degree": "Degree",
        "institution": "Institution Name",
        "start_date": "Start Date",
        "end_date": "End Date",
        "cgpa": "CGPA or Percentage"
        }}
    ],
    "technical_skills": [
        "Skill 1", "Skill 2", "Skill 3", "Skill 4"
    ],
    "achievements": [
        {{
        "name": "Achievement Name",
        "value": "Achievement Details (Score, Rank, etc.)"
        }}
    ],
    "extracurriculars": [
        {{
        "role": "Role or Position",
        "organization": "Organization or Club Name"
        }}
    ],
    "coursework": [
        "Course 1", "Course 2", "Course 3", "Course 4"
    ]
}}
"#;
