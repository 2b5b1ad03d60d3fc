//! Prompt templates for the two probe paths
//!
//! Both templates carry the Llama-2 chat structure (`[INST]` / `<<SYS>>`)
//! because the probe targets Llama-2 chat artifacts and the generation
//! adapter submits prompts without further templating. Both interpolate the
//! stored query, so the question a prompt asks can never drift from the
//! question the probe was constructed with.

/// Templates for generating the baseline and grounded prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for answering the query directly, without retrieved content.
    pub fn direct_answer(query: &str) -> String {
        format!(
            r#"[INST] <<SYS>>
You are a helpful, respectful and honest assistant. Your answers are always brief.
<</SYS>>
{query}[/INST]"#
        )
    }

    /// Prompt for answering the query grounded in retrieved content.
    ///
    /// `content` may be empty when retrieval failed or found nothing; the
    /// model then sees only the question, and the grounded path degrades to
    /// an ungrounded one.
    pub fn grounded_answer(content: &str, query: &str) -> String {
        format!(
            r#"[INST] <<SYS>>
You are a helpful, respectful and honest assistant. Analyze the content and answer the user question.
<</SYS>>
{content}
Question:"{query}"[/INST]"#
        )
    }
}
