//! Turns an extracted resume and a job description into review feedback.

use crate::analysis::prompts;
use crate::errors::AppError;
use crate::llm_client::ChatModel;

/// Runs one review round: assembles the prompt pair and makes exactly one
/// chat-completion call. The model's reply is returned verbatim; it is not
/// post-processed, cached, or ranked.
pub async fn analyze(
    resume_text: &str,
    job_description: &str,
    llm: &dyn ChatModel,
) -> Result<String, AppError> {
    let prompt = prompts::build_review_prompt(resume_text, job_description);

    llm.complete(prompts::RESUME_REVIEW_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("resume feedback failed: {e}")))
}
