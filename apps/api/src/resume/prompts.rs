use crate::llm_client::prompts::with_tone;

const FEEDBACK_ROLE: &str = "\
    You are an expert resume reviewer with years of experience in HR and recruiting across \
    multiple industries. Provide detailed, constructive feedback on the resume content. Focus on \
    structure, content, impact statements, skills representation, and overall effectiveness. \
    Suggest specific improvements.";

pub fn feedback_system_prompt() -> String {
    with_tone(FEEDBACK_ROLE)
}

pub fn build_feedback_prompt(resume_text: &str) -> String {
    format!("Please review my resume and provide detailed feedback:\n\n{resume_text}")
}
