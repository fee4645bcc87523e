use crate::config::model::{Config, DebugConfig};
use std::env;
use std::path::PathBuf;

const DEFAULT_OUTPUT_DIR: &str = ".";

pub fn load_config() -> Config {
    let input_path = load_path_config("EVENTGEN_INPUT");
    let output_dir =
        load_path_config("EVENTGEN_OUTPUT_DIR").unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let skip_json = load_bool_config("EVENTGEN_SKIP_JSON", false);
    let debug_print_html = load_bool_config("DEBUG_PRINT_HTML", false);

    Config {
        debug_config: DebugConfig {
            print_html: debug_print_html,
        },
        input_path,
        output_dir,
        skip_json,
    }
}

fn load_path_config(name: &str) -> Option<PathBuf> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => {
            panic!("Invalid config '{}'. Expected a path, got an empty value.", name)
        }
        Ok(value) => Some(PathBuf::from(value)),
        Err(_) => None,
    }
}

fn load_bool_config(name: &str, default: bool) -> bool {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}
