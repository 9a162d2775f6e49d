// Prompt for the final cold email.

/// Cold email prompt template.
/// Render with: {job_role}, {job_experience}, {job_skills}, {job_description}, {name}, {email},
/// {phone}, {linkedin}, {github}, {resume_experience}, {resume_projects}, {resume_education},
/// {resume_skills}, {extra_sections}
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"Write a compelling and professional cold email applying for the {job_role} position. The email should highlight my qualifications based on the job description and my resume. Use the following details:

### Job Description:
- Role: {job_role}
- Required Experience: {job_experience}
- Key Skills: {job_skills}
- Job Description: {job_description}

### My Resume:
Personal Information:
- Name: {name}
- Email: {email}
- Phone: {phone}
- LinkedIn: {linkedin}
- GitHub: {github}

Professional Experience:
{resume_experience}

Projects:
{resume_projects}

Education:
{resume_education}

Technical Skills:
{resume_skills}
{extra_sections}
### Email Structure:
1. **Opening**: Start with a warm greeting and briefly introduce myself, specifying the position I'm applying for.
2. **Job Alignment**: Mention why I'm interested in the role and the company. Clearly link the required skills and experience from the job description with my background, highlighting key strengths.
3. **Achievements & Fit**: Elaborate on specific achievements or projects from my resume that demonstrate my ability to meet the job requirements. Include quantifiable results or key impacts where possible.
4. **Company-Specific Enthusiasm**: Show genuine interest in the company and its work, and explain why I want to contribute to their team.
5. **Closing & Call to Action**: Politely express my desire to discuss further, request an interview, and provide my contact details. Thank them for considering my application.

### Style Guidelines:
- Keep the tone professional yet friendly, showing confidence without being overly formal.
- Use concise sentences and avoid unnecessary repetition.
- Focus on how my experience, skills, and projects solve problems relevant to the job description.
- Ensure that the email feels personalized and tailored to this specific job and company.

Generate the email text without any preamble.
"#;
