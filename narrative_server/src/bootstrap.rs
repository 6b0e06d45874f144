//! Startup wiring: story file → story graph → handler.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use story_graph::Story;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::handler::{HandlerConfig, HandlerFactory, NarrativeHandler};
use crate::template::{SharedTemplate, TextTemplate};

fn open_error(path: &Path) -> impl FnOnce(std::io::Error) -> ServerError + '_ {
    move |source| ServerError::Open {
        path: path.display().to_string(),
        source,
    }
}

/// Open and decode a story file.
pub fn load_story(path: &Path) -> Result<Story, ServerError> {
    let file = File::open(path).map_err(open_error(path))?;
    Story::from_reader(BufReader::new(file)).map_err(|source| ServerError::Story {
        path: path.display().to_string(),
        source,
    })
}

/// Read and parse a page layout file.
pub fn load_template(path: &Path) -> Result<SharedTemplate, ServerError> {
    let source = fs::read_to_string(path).map_err(open_error(path))?;
    let template = TextTemplate::parse(&source).map_err(|source| ServerError::Template {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Arc::new(template))
}

/// Run the structural checks. Findings are warnings unless `strict` is set.
pub fn check_story(story: &Story, strict: bool) -> Result<(), ServerError> {
    let report = story.validate();
    if strict {
        return report.into_result().map_err(ServerError::from);
    }
    for issue in &report.issues {
        warn!(%issue, "story check");
    }
    Ok(())
}

/// Build the handler described by `config`.
pub fn build_handler(config: &ServerConfig) -> Result<NarrativeHandler, ServerError> {
    let story = load_story(&config.story.file)?;
    info!(
        file = %config.story.file.display(),
        chapters = story.len(),
        "story loaded"
    );
    check_story(&story, config.story.strict)?;

    let template = match &config.template.file {
        Some(path) => {
            info!(file = %path.display(), "using custom template");
            Some(load_template(path)?)
        }
        None => None,
    };

    let handler_config = HandlerConfig::new().with_template(template);
    Ok(HandlerFactory::with_defaults().build(Arc::new(story), handler_config))
}
