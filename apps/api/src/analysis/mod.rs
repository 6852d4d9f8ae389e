// Resume/Job Analysis Pipeline.
// Implements: PDF text extraction, prompt assembly, feedback retrieval.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod extract;
pub mod feedback;
pub mod prompts;
