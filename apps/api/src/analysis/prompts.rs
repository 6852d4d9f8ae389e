// All LLM prompt constants for the analysis pipeline.

/// System instruction sent with every resume-review call.
pub const RESUME_REVIEW_SYSTEM: &str = "You are a helpful assistant for resume review.";

/// Builds the single user message, embedding both inputs verbatim under the
/// fixed framing. No trimming, no escaping — the model sees exactly what the
/// user provided.
pub fn build_review_prompt(resume_text: &str, job_description: &str) -> String {
    format!("Here's the resume:\n{resume_text}\n\nAnd here's the job description:\n{job_description}")
}
