//! Narrative Handler - resolves a request path to a chapter and renders it.
//!
//! The handler is a pure function of an immutable [`Story`] and an immutable
//! [`Template`]: it holds no per-request state and can be shared across any
//! number of concurrent requests.

use std::sync::Arc;

use story_graph::Story;
use tracing::{debug, error};

use crate::routing::chapter_id_for_path;
use crate::template::{render_to_vec, HtmlTemplate, SharedTemplate};

/// Body sent when a path names no chapter.
pub const NOT_FOUND_BODY: &str = "Chapter not found";

/// Body sent when rendering fails. The actual error is only logged.
pub const FAILURE_BODY: &str = "Something went wrong...";

/// Per-handler configuration.
///
/// Options are applied in the order they are set; a later call overrides an
/// earlier one.
#[derive(Clone, Default)]
pub struct HandlerConfig {
    /// Template override. `None` means the factory default.
    pub template: Option<SharedTemplate>,
}

impl HandlerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the template. Passing `None` resets to the default.
    pub fn with_template(mut self, template: Option<SharedTemplate>) -> Self {
        self.template = template;
        self
    }
}

impl std::fmt::Debug for HandlerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerConfig")
            .field("custom_template", &self.template.is_some())
            .finish()
    }
}

/// Builds handlers that share one default template.
///
/// The default is constructed explicitly and captured here once; handlers may
/// override it but never modify it.
#[derive(Clone)]
pub struct HandlerFactory {
    default_template: SharedTemplate,
}

impl HandlerFactory {
    /// Create a factory with the given default template.
    pub fn new(default_template: SharedTemplate) -> Self {
        Self { default_template }
    }

    /// Create a factory whose default is [`HtmlTemplate`].
    pub fn with_defaults() -> Self {
        Self::new(HtmlTemplate::shared())
    }

    pub fn default_template(&self) -> &SharedTemplate {
        &self.default_template
    }

    /// Build a handler over `story`.
    pub fn build(&self, story: Arc<Story>, config: HandlerConfig) -> NarrativeHandler {
        let template = config
            .template
            .unwrap_or_else(|| Arc::clone(&self.default_template));
        NarrativeHandler { story, template }
    }
}

impl Default for HandlerFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Result of handling one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The chapter was found and rendered.
    Rendered(Vec<u8>),
    /// No chapter has the requested identifier.
    NotFound,
    /// The chapter exists but rendering it failed.
    Failed,
}

impl Outcome {
    /// Numeric HTTP status for this outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            Outcome::Rendered(_) => 200,
            Outcome::NotFound => 404,
            Outcome::Failed => 500,
        }
    }

    /// The response body sent to the client.
    pub fn body(&self) -> &[u8] {
        match self {
            Outcome::Rendered(body) => body,
            Outcome::NotFound => NOT_FOUND_BODY.as_bytes(),
            Outcome::Failed => FAILURE_BODY.as_bytes(),
        }
    }
}

/// Serves one story through one template.
#[derive(Clone)]
pub struct NarrativeHandler {
    story: Arc<Story>,
    template: SharedTemplate,
}

impl NarrativeHandler {
    /// Create a handler using the built-in template.
    pub fn new(story: Arc<Story>) -> Self {
        HandlerFactory::with_defaults().build(story, HandlerConfig::default())
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn template(&self) -> &SharedTemplate {
        &self.template
    }

    /// Handle a request for `path`.
    ///
    /// Every request is treated the same regardless of method. Missing
    /// chapters are an ordinary outcome; render failures are logged here and
    /// reported without detail.
    pub fn handle(&self, path: &str) -> Outcome {
        let id = chapter_id_for_path(path);

        let Some(chapter) = self.story.get(id) else {
            debug!(chapter = id, "chapter not found");
            return Outcome::NotFound;
        };

        match render_to_vec(self.template.as_ref(), chapter) {
            Ok(body) => {
                debug!(chapter = id, bytes = body.len(), "chapter rendered");
                Outcome::Rendered(body)
            }
            Err(e) => {
                error!(chapter = id, error = %e, "failed to render chapter");
                Outcome::Failed
            }
        }
    }
}

impl std::fmt::Debug for NarrativeHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrativeHandler")
            .field("chapters", &self.story.len())
            .finish_non_exhaustive()
    }
}
