//! Prompt templates for resume analysis and interview coaching

pub const RESUME_ADVISOR_SYSTEM: &str = "You are an AI resume advisor.";
pub const JOB_FIT_SYSTEM: &str = "You are an expert in job fit analysis.";
pub const COACH_SYSTEM: &str = "You are an expert interview coach. Respond in English.";
pub const EVALUATOR_SYSTEM: &str =
    "You are a rigorous interview evaluator. Be concise and actionable.";

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub resume_feedback: String,
    pub jd_match: String,
    pub interview_questions: String,
    pub answer_critique: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            resume_feedback: RESUME_FEEDBACK_TEMPLATE.to_string(),
            jd_match: JD_MATCH_TEMPLATE.to_string(),
            interview_questions: INTERVIEW_QUESTIONS_TEMPLATE.to_string(),
            answer_critique: ANSWER_CRITIQUE_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_resume_feedback(&self, resume_text: &str) -> String {
        self.resume_feedback.replace("{resume}", resume_text)
    }

    pub fn render_jd_match(&self, resume_text: &str, jd_text: &str) -> String {
        self.jd_match
            .replace("{resume}", resume_text)
            .replace("{job}", jd_text)
    }

    pub fn render_interview_questions(
        &self,
        job_title: &str,
        jd_text: &str,
        mode: &str,
        level: &str,
        n: usize,
    ) -> String {
        let job_title = if job_title.trim().is_empty() {
            "N/A"
        } else {
            job_title
        };
        let jd_text = if jd_text.trim().is_empty() {
            "N/A"
        } else {
            jd_text
        };

        self.interview_questions
            .replace("{n}", &n.to_string())
            .replace("{mode}", mode)
            .replace("{level}", level)
            .replace("{job_title}", job_title)
            .replace("{job}", jd_text)
    }

    pub fn render_answer_critique(
        &self,
        question: &str,
        answer: &str,
        mode: &str,
        jd_text: Option<&str>,
    ) -> String {
        self.answer_critique
            .replace("{question}", question)
            .replace("{answer}", answer)
            .replace("{mode}", mode)
            .replace("{job}", jd_text.unwrap_or("N/A"))
    }
}

const RESUME_FEEDBACK_TEMPLATE: &str = r#"You are a professional resume reviewer.
Analyze the following resume and return EXACTLY these sections with clear headings:

Strengths:
- (bulleted points)

Weaknesses:
- (bulleted points)

Suggestions for improvement:
- (bulleted points)

Overall score: X/10

Resume:
{resume}"#;

const JD_MATCH_TEMPLATE: &str = r#"You are a professional career advisor.
Compare the Resume with the Job Description and return EXACTLY these sections:

Match score: X/10

Matched skills/Experience:
- (bulleted list of overlaps)

Missing or weak areas:
- (bulleted list of gaps)

Suggestions:
- (bulleted, concrete tailoring suggestions)

Resume:
{resume}

Job Description:
{job}"#;

const INTERVIEW_QUESTIONS_TEMPLATE: &str = r#"Generate {n} {mode} interview questions for a {level}-level candidate.
If a Job Description is provided, align topics and keywords to it.
Return ONLY a JSON list of strings, no extra text or formatting.

Job Title: {job_title}

Job Description:
{job}

Examples of the expected output:
["Question 1...", "Question 2...", "Question 3..."]"#;

const ANSWER_CRITIQUE_TEMPLATE: &str = r#"Return ONLY JSON with this schema:
{
  "scores": {
    "clarity": 1-5,
    "structure": 1-5,
    "technical_depth": 1-5,
    "impact": 1-5,
    "conciseness": 1-5
  },
  "summary": "2-3 sentences overall feedback",
  "suggestions": ["bullet", "bullet", "bullet"],
  "improved_answer": "an improved answer (use STAR if behavioral)"
}
Rules:
- Use STAR (Situation, Task, Action, Result) if behavioral.
- If Job Description hints are present, align suggestions to it.
- Keep 'improved_answer' under 200-250 words.

Question: {question}

Candidate Answer:
{answer}

Mode: {mode}
Job Description (optional):
{job}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_feedback_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_resume_feedback("Python developer at Tech Corp");
        assert!(prompt.contains("Python developer at Tech Corp"));
        assert!(prompt.contains("Strengths:"));
        assert!(prompt.contains("Overall score: X/10"));
    }

    #[test]
    fn test_jd_match_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_jd_match("resume body", "job body");
        assert!(prompt.contains("resume body"));
        assert!(prompt.contains("job body"));
        assert!(prompt.contains("Match score: X/10"));
    }

    #[test]
    fn test_interview_questions_rendering() {
        let templates = PromptTemplates::default();
        let prompt =
            templates.render_interview_questions("Data Engineer", "", "Technical", "Senior", 4);
        assert!(prompt.contains("Generate 4 Technical interview questions"));
        assert!(prompt.contains("Senior-level"));
        assert!(prompt.contains("Data Engineer"));
        // Empty JD degrades to N/A.
        assert!(prompt.contains("Job Description:\nN/A"));
    }

    #[test]
    fn test_answer_critique_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_answer_critique("Q?", "my answer", "Behavioral", None);
        assert!(prompt.contains("Q?"));
        assert!(prompt.contains("my answer"));
        assert!(prompt.contains("\"improved_answer\""));
    }
}
