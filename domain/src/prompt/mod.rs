//! Prompt domain
//!
//! Templates for the two generation paths of the probe.

mod template;

pub use template::PromptTemplate;
