// Prompt templates for every generation task.
// Placeholders are filled with llm_client::prompts::fill; {json_only} receives
// JSON_ONLY_INSTRUCTION.

/// Resume vs job description analysis. Replace: {resume_text}, {job_description}, {json_only}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert ATS (Applicant Tracking System) and resume analyst.
Analyze the resume below against the job description.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

Return a JSON object with this EXACT schema:
{
  "ats_score": <number between 0 and 100>,
  "summary": "<brief summary of the candidate's fit>",
  "missing_keywords": ["<keyword>", "<keyword>"],
  "feedback": "<detailed feedback on how to improve the resume>"
}

{json_only}"#;

/// Career roadmap. Replace: {current_role}, {target_role}, {skills}, {json_only}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are an expert career coach and mentor.
Create a detailed, step-by-step career roadmap for someone moving from {current_role} to {target_role}.
Their current skills: {skills}.

Return a JSON object with this EXACT schema:
{
  "roadmap": [
    {
      "step_number": 1,
      "title": "<step title>",
      "description": "<what to learn or do in this step>",
      "resources": ["<resource>", "<resource>"],
      "estimated_time": "<e.g. 2 weeks>"
    }
  ]
}

{json_only}"#;

/// Portfolio field extraction. Replace: {user_data}, {json_only}
pub const PORTFOLIO_PROMPT_TEMPLATE: &str = r#"You are a data extraction specialist.
Extract the details needed to populate a personal portfolio website from the input below.

USER INPUT:
{user_data}

If a field is missing, invent a reasonable placeholder from the context or keep it generic.

Return a JSON object with this EXACT schema (at most 3 projects):
{
  "name": "<candidate name>",
  "tagline": "<catchy professional headline>",
  "about": "<2-3 sentence professional bio>",
  "skills": ["<skill>", "<skill>", "<skill>"],
  "projects": [
    {
      "title": "<project title>",
      "description": "<brief project description>",
      "tech_stack": ["<tech>", "<tech>"]
    }
  ],
  "contact": {
    "email": "<email or placeholder>",
    "linkedin": "<LinkedIn URL or placeholder>",
    "github": "<GitHub URL or placeholder>"
  }
}

{json_only}"#;

/// DSA problem generation. Replace: {difficulty}, {topic}, {json_only}
pub const DSA_QUESTION_PROMPT_TEMPLATE: &str = r#"You are a senior technical interviewer.
Write a {difficulty} level data structures and algorithms problem on the topic: {topic}.

Return a JSON object with this EXACT schema:
{
  "title": "<problem title>",
  "description": "<clear problem statement>",
  "examples": [
    {"input": "<example input>", "output": "<example output>", "explanation": "<optional>"}
  ],
  "constraints": ["<constraint>", "<constraint>"],
  "starter_code": "<starter function signature in {topic}, or Python if the topic is generic>"
}

{json_only}"#;

/// Tutoring hint. Plain prose, no JSON. Replace: {question}, {code}, {user_query}
pub const TUTOR_PROMPT_TEMPLATE: &str = r#"You are 'Yuvi', a friendly and encouraging AI coding tutor.
The learner is working on this problem:
{question}

Their current code:
{code}

Learner's question: "{user_query}"

Give a concise, helpful hint or explanation.
Do NOT give away the full solution unless they explicitly ask for it.
Be encouraging!"#;

/// Trivia battle question. Replace: {topic}, {json_only}
pub const TRIVIA_PROMPT_TEMPLATE: &str = r#"You are the game master of a trivia battle game.
Write one challenging multiple-choice question about: {topic}.

Return a JSON object with this EXACT schema:
{
  "question": "<question text>",
  "options": ["<option A>", "<option B>", "<option C>", "<option D>"],
  "correct_index": <integer 0-3, index of the correct option>,
  "difficulty": "<Easy|Medium|Hard>"
}

{json_only}"#;

/// LinkedIn-style profile. Replace every {field} below plus {json_only}.
pub const PROFILE_PROMPT_TEMPLATE: &str = r#"You are a professional career coach and LinkedIn expert.
Write a high-impact LinkedIn profile from the details below.

FULL NAME: {full_name}
TARGET ROLE: {target_role}
SUMMARY OF EXPERIENCE: {current_summary}
SKILLS: {skills}
PROJECTS: {projects}
EXPERIENCE HISTORY: {experience}
EDUCATION: {education}
CERTIFICATIONS: {certifications}
STRENGTHS: {strengths}
SOFT SKILLS: {soft_skills}
CAREER GOAL: {career_goal}
ACHIEVEMENTS: {achievements}
TOOLS: {tools}
LANGUAGES: {languages}
LOCATION: {location}
TONE: {tone}

Return a JSON object with this EXACT schema:
{
  "headline": "<keyword-rich headline>",
  "about": "<3-4 paragraph About section in the requested tone>",
  "experience_descriptions": [
    {
      "company": "<company name>",
      "role": "<role>",
      "description": "<achievement bullets, STAR method>"
    }
  ],
  "projects_section": "<formatted Projects section>",
  "skills_section": "<formatted list of top skills>",
  "recommendation_draft": "<draft recommendation a colleague could adapt>"
}

{json_only}"#;
