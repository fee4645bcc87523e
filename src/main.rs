use eventgen::config::env_loader::load_config;
use eventgen::document::files::{load_event, render_all, write_outputs};
use eventgen::event::model::EventData;
use eventgen::tracing::setup_tracing;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let config = load_config();

    let event = match &config.input_path {
        None => {
            info!("No input document given, using the example event");
            EventData::example()
        }
        Some(path) => match load_event(path).await {
            Ok(event) => event,
            Err(err) => {
                warn!("Couldn't load '{}': {}", path.display(), err);
                warn!("Continuing with the example event");
                EventData::example()
            }
        },
    };

    let rendered = match render_all(&event) {
        Ok(rendered) => rendered,
        Err(err) => {
            error!("Failed to serialize event: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if config.debug_config.print_html {
        debug!("Overview page:\n{}", rendered.overview_html);
        debug!("Program page:\n{}", rendered.program_html);
    }

    match write_outputs(&config.output_dir, &event, &rendered, !config.skip_json).await {
        Ok(paths) => {
            info!("Generated {} files for '{}'", paths.len(), event.event_name);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed writing output files: {}", err);
            ExitCode::FAILURE
        }
    }
}
