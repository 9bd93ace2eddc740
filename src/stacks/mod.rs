pub mod detector;

pub use detector::{
    detect, detect_in_current_dir, filter_by_prefix, has_project_marker, DetectError,
};
