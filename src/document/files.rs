use crate::document::json::{
    export_json, import_json, json_filename, overview_filename, program_filename, ImportError,
};
use crate::event::model::EventData;
use crate::render::overview::render_overview;
use crate::render::program::render_program;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// Everything the editor can download for one event
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEvent {
    pub overview_html: String,
    pub program_html: String,
    pub json: String,
}

#[instrument(skip_all, fields(event = %event.event_name))]
pub fn render_all(event: &EventData) -> serde_json::Result<RenderedEvent> {
    Ok(RenderedEvent {
        overview_html: render_overview(event),
        program_html: render_program(event),
        json: export_json(event)?,
    })
}

#[derive(Debug)]
pub enum LoadError {
    Read(io::Error),
    Import(ImportError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Read(err) => write!(f, "{}", err),
            LoadError::Import(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoadError {}

#[instrument]
pub async fn load_event(path: &Path) -> Result<EventData, LoadError> {
    let text = fs::read_to_string(path).await.map_err(LoadError::Read)?;

    import_json(&text).map_err(LoadError::Import)
}

/// Writes the downloads into `output_dir` and returns the paths written.
#[instrument(skip(event, rendered), fields(event = %event.event_name))]
pub async fn write_outputs(
    output_dir: &Path,
    event: &EventData,
    rendered: &RenderedEvent,
    include_json: bool,
) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).await?;

    let overview_path = output_dir.join(overview_filename(&event.event_name));
    let program_path = output_dir.join(program_filename(&event.event_name));
    let json_path = output_dir.join(json_filename(&event.event_name));

    futures::try_join!(
        fs::write(&overview_path, &rendered.overview_html),
        fs::write(&program_path, &rendered.program_html),
        async {
            if include_json {
                fs::write(&json_path, &rendered.json).await
            } else {
                Ok(())
            }
        },
    )?;

    let mut written = vec![overview_path, program_path];

    if include_json {
        written.push(json_path);
    }

    for path in &written {
        info!("Wrote {}", path.display());
    }

    Ok(written)
}
