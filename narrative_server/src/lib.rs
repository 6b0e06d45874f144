//! # Narrative Server
//!
//! Serves a [`story_graph::Story`] over HTTP. Each URL path names a chapter;
//! the response is that chapter rendered through a [`template::Template`].
//!
//! ## Core Components
//!
//! - **routing**: request path to chapter identifier
//! - **handler**: the [`NarrativeHandler`] and its configuration
//! - **template**: the built-in page layout and user-supplied layouts
//! - **http**: axum adapter and server loop
//! - **config** / **logger** / **bootstrap**: host wiring for the `cyoaweb` binary
//!
//! The story and template are read-only after startup, so one handler is
//! shared by every request without locking.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod template;

pub use config::ServerConfig;
pub use error::ServerError;
pub use handler::*;
pub use template::{HtmlTemplate, RenderError, SharedTemplate, Template, TemplateError, TextTemplate};
