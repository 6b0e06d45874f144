//! User-supplied page layouts, written in Handlebars syntax.
//!
//! The chapter is rendered through its serialized form, so layouts use the
//! story field names:
//!
//! ```text
//! <h1>{{title}}</h1>
//! {{#each paragraphs}}<p>{{this}}</p>{{/each}}
//! <ul>{{#each options}}<li><a href="/{{chapter}}">{{text}}</a></li>{{/each}}</ul>
//! {{#unless options}}<p>The End</p>{{/unless}}
//! ```
//!
//! Layouts are compiled once at startup. Strict mode is on, so a placeholder
//! naming a field chapters do not have fails the request instead of rendering
//! as an empty string.

use std::io;

use handlebars::{no_escape, Handlebars};
use story_graph::Chapter;

use super::{RenderError, Template, TemplateError};

const PAGE: &str = "page";

/// A compiled, reusable page layout.
pub struct TextTemplate {
    registry: Handlebars<'static>,
}

impl TextTemplate {
    /// Compile template text. Interpolated values are HTML-escaped.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(PAGE, source)?;
        Ok(Self { registry })
    }

    /// Emit interpolated values verbatim, for layouts that are not HTML.
    pub fn without_escaping(mut self) -> Self {
        self.registry.register_escape_fn(no_escape);
        self
    }
}

impl Template for TextTemplate {
    fn render(&self, chapter: &Chapter, sink: &mut dyn io::Write) -> Result<(), RenderError> {
        self.registry.render_to_write(PAGE, chapter, sink)?;
        Ok(())
    }
}

impl std::str::FromStr for TextTemplate {
    type Err = TemplateError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

impl std::fmt::Debug for TextTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextTemplate").finish_non_exhaustive()
    }
}
