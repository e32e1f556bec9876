// Enhancement LLM prompt templates.
// All prompts for the enhance module are defined here.

pub const ENHANCE_SYSTEM: &str = "\
You are a professional résumé editor. \
Improve the wording and impact of a structured CV without changing its facts. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
NEVER invent employers, schools, dates, or credentials that are not in the input. \
NEVER change which company, school, or time period an entry refers to.";

pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Enhance the following CV. Strengthen phrasing, expand terse entries into polished ones, and normalize capitalization — but keep every claim grounded in the input.

INPUT CV:
{cv_json}

OUTPUT SCHEMA (return exactly this structure — the same shape as the input):
{
  "name": "string",
  "contact": {"email": "string", "linkedin": "string", "phone": "string"},
  "skills": ["string"],
  "technologies": ["string"],
  "experience": [{"title": "string", "company": "string", "years": "string"}],
  "education": [{"degree": "string", "school": "string", "year": "string"}]
}

Rules:
- The output field set is IDENTICAL to the input field set. Do not add, drop, or rename fields.
- Keep every list in its input order. Do not sort, merge, or deduplicate entries.
- Contact values pass through unchanged (email, linkedin, phone are not yours to edit).
- Rewrite titles and degree names for clarity only; the underlying company, school, and years stay as given.
- An empty input field stays empty in the output.
"#;
