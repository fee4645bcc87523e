use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub debug_config: DebugConfig,
    pub input_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub skip_json: bool,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub print_html: bool,
}
