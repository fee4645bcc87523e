pub mod config {
    pub mod env_loader;
    pub mod model;
}

pub mod document {
    pub mod files;
    pub mod json;
}

pub mod event {
    pub mod editor;
    pub mod model;
    pub mod time;
}

pub mod render {
    pub mod anchors;
    pub mod overview;
    pub mod program;
}

pub mod tracing;
