//! Run Probe use case
//!
//! Produces a baseline answer and a retrieval-grounded answer to the same
//! fixed query through one shared generation handle, so the two outputs are
//! directly comparable.
//!
//! Callers never see an error value from either operation. Failures are
//! logged to the run log and converted at the operation boundary, and the
//! two operations deliberately convert differently: the baseline returns
//! [`GENERATION_FAILURE_MESSAGE`], the grounded path returns an empty
//! string. Keeping both conventions distinct is part of what this tool
//! demonstrates.

use crate::ports::output_sink::OutputSink;
use crate::ports::run_log::RunLog;
use crate::ports::search_tool::{SearchError, SearchTool, SearchToolFactory};
use crate::ports::text_generator::TextGenerator;
use probe_domain::{PromptTemplate, Query, truncate_str};
use std::sync::Arc;
use tracing::{debug, info};

/// Fixed sentence the baseline operation returns when generation fails.
pub const GENERATION_FAILURE_MESSAGE: &str =
    "An error occurred while generating the response.";

/// Label attached to the grounded answer when it is dumped to the sink.
const GROUNDED_ANSWER_LABEL: &str = "With RAG Approach";

/// Both answers to the fixed query, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub query: String,
    pub baseline: String,
    pub grounded: String,
}

/// Use case for running the hallucination probe
///
/// Holds the fixed [`Query`] and the shared generation handle. The two
/// public operations, [`answer_without_context`](Self::answer_without_context)
/// and [`answer_with_context`](Self::answer_with_context), can be called in
/// any order and any number of times; [`execute`](Self::execute) runs both
/// once and collects the report.
pub struct RunProbeUseCase {
    query: Query,
    generator: Arc<dyn TextGenerator>,
    search_factory: Arc<dyn SearchToolFactory>,
    run_log: Arc<dyn RunLog>,
    sink: Arc<dyn OutputSink>,
}

impl RunProbeUseCase {
    pub fn new(
        query: Query,
        generator: Arc<dyn TextGenerator>,
        search_factory: Arc<dyn SearchToolFactory>,
        run_log: Arc<dyn RunLog>,
        sink: Arc<dyn OutputSink>,
    ) -> Self {
        Self {
            query,
            generator,
            search_factory,
            run_log,
            sink,
        }
    }

    /// The fixed query this probe answers.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Answer the fixed query without retrieved content.
    ///
    /// Formats the direct-answer template and submits it. A generation
    /// failure is logged and converted into [`GENERATION_FAILURE_MESSAGE`];
    /// this method never returns an error value.
    pub async fn answer_without_context(&self) -> String {
        info!(
            "Generating baseline answer: {}",
            truncate_str(self.query.content(), 100)
        );

        let prompt = PromptTemplate::direct_answer(self.query.content());

        match self.generator.complete(&prompt).await {
            Ok(answer) => {
                self.run_log.info("Generated response without RAG approach.");
                answer
            }
            Err(e) => {
                self.run_log.error(&format!(
                    "Error occurred while generating response without RAG approach: {e}"
                ));
                GENERATION_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Answer the fixed query grounded in retrieved web content.
    ///
    /// Retrieval failures degrade to an empty content string rather than
    /// aborting, so the prompt simply carries no retrieved material. A
    /// generation failure is logged and converted into an empty string, a
    /// deliberately different value than the baseline operation returns.
    ///
    /// On success the full answer is also emitted to the sink under a
    /// distinguishing label, after the streamed chunks.
    pub async fn answer_with_context(&self) -> String {
        info!(
            "Generating grounded answer: {}",
            truncate_str(self.query.content(), 100)
        );

        let content = self.retrieve_content().await;
        let prompt = PromptTemplate::grounded_answer(&content, self.query.content());

        match self.generator.complete(&prompt).await {
            Ok(answer) => {
                self.sink.answer(GROUNDED_ANSWER_LABEL, &answer);
                answer
            }
            Err(e) => {
                self.run_log.error(&format!(
                    "Error occurred while generating response with RAG approach: {e}"
                ));
                String::new()
            }
        }
    }

    /// Run both operations, baseline first, and collect the report.
    pub async fn execute(&self) -> ProbeReport {
        let baseline = self.answer_without_context().await;
        let grounded = self.answer_with_context().await;

        ProbeReport {
            query: self.query.content().to_string(),
            baseline,
            grounded,
        }
    }

    /// Construct the search tool for one retrieval.
    ///
    /// A fresh tool is built per call. Construction failures (typically
    /// missing credentials) are logged here and handed back as a typed
    /// error for the caller to handle explicitly.
    fn construct_search_tool(&self) -> Result<Arc<dyn SearchTool>, SearchError> {
        match self.search_factory.build() {
            Ok(tool) => {
                debug!(tool = tool.name(), "search tool ready");
                Ok(tool)
            }
            Err(e) => {
                self.run_log.error(&format!(
                    "Error occurred while setting up the search tool: {e}"
                ));
                Err(e)
            }
        }
    }

    /// Retrieve web content for the fixed query.
    ///
    /// Returns an empty string when the tool cannot be constructed or the
    /// search call fails, which is also what a search that matched nothing
    /// yields. Downstream cannot tell those cases apart; the run log can.
    async fn retrieve_content(&self) -> String {
        let tool = match self.construct_search_tool() {
            Ok(tool) => tool,
            Err(_) => {
                self.run_log.error(
                    "Error occurred while running the search tool: search tool was not constructed",
                );
                return String::new();
            }
        };

        match tool.run(self.query.content()).await {
            Ok(content) => {
                debug!(bytes = content.len(), "retrieved search content");
                content
            }
            Err(e) => {
                self.run_log.error(&format!(
                    "Error occurred while running the search tool: {e}"
                ));
                String::new()
            }
        }
    }
}
