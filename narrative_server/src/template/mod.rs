//! Rendering templates - turn a chapter into a page.
//!
//! A [`Template`] writes one chapter to a byte sink. Two implementations ship:
//!
//! - [`HtmlTemplate`]: the built-in page layout.
//! - [`TextTemplate`]: a user-supplied Handlebars layout, rendered against the
//!   chapter's serialized fields (`title`, `paragraphs`, `options`, `text`, `chapter`).

mod html;
mod text;

pub use html::*;
pub use text::*;

use std::io;
use std::sync::Arc;

use story_graph::Chapter;
use thiserror::Error;

/// Renders a chapter into a sink.
///
/// Templates are shared across concurrent requests, so they must not hold
/// per-request state.
pub trait Template: Send + Sync {
    fn render(&self, chapter: &Chapter, sink: &mut dyn io::Write) -> Result<(), RenderError>;
}

/// A template shared between handlers.
pub type SharedTemplate = Arc<dyn Template>;

/// Failure while rendering a chapter.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the sink failed.
    #[error("failed to write rendered chapter: {0}")]
    Io(#[from] io::Error),

    /// The template engine could not produce output.
    #[error("template execution failed: {0}")]
    Engine(#[from] handlebars::RenderError),

    /// The template itself refused the chapter.
    #[error("template execution failed: {0}")]
    Template(String),
}

/// Failure to parse template text.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template syntax error: {0}")]
    Syntax(#[source] Box<handlebars::TemplateError>),
}

impl From<handlebars::TemplateError> for TemplateError {
    fn from(e: handlebars::TemplateError) -> Self {
        Self::Syntax(Box::new(e))
    }
}

/// Render a chapter into memory.
pub fn render_to_vec(template: &dyn Template, chapter: &Chapter) -> Result<Vec<u8>, RenderError> {
    let mut body = Vec::new();
    template.render(chapter, &mut body)?;
    Ok(body)
}
