// All LLM prompt constants for the application pipeline.
// Templates use `{placeholder}` tokens filled with `.replace` before sending.

/// System prompt for both skill-extraction calls — enforces the bare
/// comma-separated list the matcher parses.
pub const SKILL_EXTRACT_SYSTEM: &str =
    "You are an applicant tracking system that extracts technical skills from documents. \
    Respond with ONLY a comma-separated list of skills. \
    Do NOT add explanations, numbering, or markdown. \
    Do NOT infer or hallucinate skills that are not explicitly stated.";

/// Resume skill extraction. Replace `{resume}`.
/// Only explicit skills from the skills/projects/experience sections count —
/// summaries and education are excluded to keep the match honest.
pub const RESUME_SKILLS_PROMPT_TEMPLATE: &str = r#"Extract ONLY explicit technical skills/tools from the following resume sections:
- Skills / Technical Skills section
- Projects section (tools/tech used)
- Experience section (tools/tech used)

DO NOT extract from:
- Profile summary or objective
- General descriptive text
- Education section

Resume:
{resume}

Return ONLY a comma-separated list of technical skills/tools explicitly mentioned.

Skills:"#;

/// JD required-skill extraction. Replace `{jd}`.
pub const JD_SKILLS_PROMPT_TEMPLATE: &str = r#"Extract all required technical skills and tools from this job description.
Include both must-have and nice-to-have skills.

Job Description:
{jd}

Return ONLY a comma-separated list of technical skills/tools.

Skills:"#;

pub const WRITER_SYSTEM: &str =
    "You are a professional career writer producing job-application material. \
    Use PLAIN TEXT only. Do NOT use markdown syntax like **bold** or ### headers.";

/// Cover letter generation. Replace `{resume}`, `{jd}`, `{company}`.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Based on this resume and job description, write a compelling cover letter.

Resume:
{resume}

Job Description:
{jd}

Company: {company}

Write a professional, tailored cover letter (250-300 words) that:
- Highlights relevant experience from the resume
- Addresses key requirements from the job description
- Shows enthusiasm for the role
- Is personalized and compelling

Cover Letter:"#;

/// Resume bullet optimization. Replace `{resume}`, `{jd}`.
pub const BULLETS_PROMPT_TEMPLATE: &str = r#"You are optimizing a resume for a target role.

Current Resume:
{resume}

Target Job Description:
{jd}

Provide 5-7 improved bullet points that:
- Use action verbs
- Include quantifiable achievements
- Align with the job requirements
- Follow the STAR method (Situation, Task, Action, Result)

Format each bullet point starting with "•"

Improved Bullet Points:"#;

/// Standard improvement path (score 70-89): a few crisp suggestions only.
/// Replace `{resume}`, `{jd}`, `{matched}`, `{missing}`.
pub const IMPROVEMENTS_STANDARD_PROMPT_TEMPLATE: &str = r#"You are a resume improvement expert.

Current Resume:
{resume}

Target Job Description:
{jd}

Matched Skills: {matched}
Missing Skills: {missing}

Provide ONLY 2-3 short, crisp, actionable suggestions to improve the resume.
Each suggestion should be 1-2 sentences maximum.
Focus on the most impactful changes.

Format as a numbered list (1., 2., 3.).
NO long paragraphs. NO essays. Be concise.

Suggestions:"#;

/// Deep improvement path (score < 70): detailed suggestions keyed to the gaps.
/// Replace `{resume}`, `{jd}`, `{matched}`, `{missing}`.
pub const IMPROVEMENTS_DEEP_PROMPT_TEMPLATE: &str = r#"You are a resume improvement expert working with a resume that scored poorly against its target role.

Current Resume:
{resume}

Target Job Description:
{jd}

Matched Skills: {matched}
Missing Skills: {missing}

The skill gap is significant. Provide 5-7 detailed, actionable suggestions to close it:
- For each missing skill, say where and how to surface related experience if any exists
- Suggest restructuring sections that bury relevant work
- Call out vague bullets that should be quantified
- Flag keywords from the job description the resume should use verbatim

Format as a numbered list (1., 2., 3., ...), each item 2-4 sentences.

Suggestions:"#;

/// Interview question generation. Replace `{jd}`, `{resume}`.
pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str = r#"You are an interview preparation coach.

Job Description:
{jd}

Candidate Resume:
{resume}

Generate 8-10 likely interview questions for this role, including:
- Technical questions based on required skills
- Behavioral questions
- Questions about gaps or concerns in the resume
- Company/role-specific questions

Format each question numbered (1., 2., etc.)

Interview Questions:"#;

/// Role-expectations research. Replace `{jd}`, `{company}`.
pub const ROLE_RESEARCH_PROMPT_TEMPLATE: &str = r#"You are a career research expert analyzing role expectations.

Job Description:
{jd}

Company: {company}

Research and provide detailed insights about this role:

1. Common Skills: Industry-standard skills for this position
2. Key Responsibilities: Typical day-to-day duties and expectations
3. Career Level: Junior/Mid/Senior level indicators
4. Industry Trends: Current trends affecting this role
5. Success Metrics: How performance is typically measured
6. Growth Path: Common career progression from this role

Format with numbered sections and bullet points (•).

Role Expectations Research:"#;

/// Learning plan from the skill gap. Replace `{missing}`, `{matched}`.
pub const LEARNING_PLAN_PROMPT_TEMPLATE: &str = r#"You are a career development coach creating a skill improvement roadmap.

Skills to Acquire: {missing}
Current Skills: {matched}

Create a comprehensive learning plan to bridge the skills gap:

1. Priority Skills (Learn First): Top 3-5 most critical skills with rationale
2. Learning Resources: online courses, books and documentation, practice projects, certifications worth pursuing
3. Timeline: Realistic 3-6 month learning roadmap
4. Practice Projects: Hands-on projects to build each skill
5. Milestones: Checkpoints to track progress

Format with numbered sections and bullet points (•).
Be specific with course names, book titles, and project ideas.

Skill Growth Plan:"#;

/// Self-review critique of the compiled package.
/// Replace `{package}`, `{resume}`, `{jd}`.
pub const SELF_REVIEW_PROMPT_TEMPLATE: &str = r#"You are a senior career advisor reviewing a job application package.

Original Resume:
{resume}

Job Description:
{jd}

Generated Job Application Package:
{package}

Critically review this package and provide specific improvement suggestions for:

1. Cover Letter Quality: tone, personalization, impact, alignment with the JD
2. Resume Bullets: clarity, quantification, action verbs, relevance
3. Interview Questions: completeness, difficulty level, relevance
4. Overall Coherence: consistency across all sections

Be constructive but critical. Identify real weaknesses, not cosmetic ones.
Format with numbered sections and bullet points (•).

Review Notes:"#;

/// System prompt for the revise step — enforces JSON-only output.
pub const REVISE_SYSTEM: &str =
    "You are an expert editor applying review feedback to job-application material. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Revision applying the critique to the cover letter and bullets.
/// Replace `{cover_letter}`, `{bullets}`, `{critique}`, `{resume}`, `{jd}`.
pub const REVISE_PROMPT_TEMPLATE: &str = r#"Rewrite the cover letter and resume bullets below, addressing the review feedback.

Original Cover Letter:
{cover_letter}

Original Bullets:
{bullets}

Review Feedback:
{critique}

Original Resume:
{resume}

Job Description:
{jd}

Rules:
- The cover letter stays 250-300 words, more compelling and better aligned with the role
- Bullets stay quantified, use stronger action verbs, each starting with "•"
- Do not invent facts absent from the original resume

Return a JSON object with this EXACT schema (no extra fields):
{
  "revised_cover_letter": "...",
  "revised_bullets": "..."
}"#;

/// User-directed refinement of a single report section.
/// Replace `{focus_instruction}`, `{section}`, `{resume}`, `{jd}`.
pub const REFINE_PROMPT_TEMPLATE: &str = r#"You are refining ONE section of an existing job application package at the user's request.

{focus_instruction}

Current section content:
{section}

Original Resume:
{resume}

Job Description:
{jd}

Rewrite ONLY this section. Keep the same plain-text format the section already uses.
Return the rewritten section text and nothing else.

Rewritten Section:"#;
