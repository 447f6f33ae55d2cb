use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevToolsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Required directory not found: {path}")]
    MissingDirectoryError { path: String },

    #[error("Version mismatch: {crate_name} has {crate_version}, workspace has {workspace_version}")]
    VersionMismatchError {
        crate_name: String,
        crate_version: String,
        workspace_version: String,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DevToolsError>;
