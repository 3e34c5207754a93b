use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenControlError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {}", .path.display(), .source)]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("No components directory in OpenControl workspace {}", .0.display())]
    MissingComponents(PathBuf),
}
