use thiserror::Error;

/// Errors produced while parsing a semantic version string.
///
/// Each variant carries only a fixed human-readable message; parsing stops
/// at the first field that fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticError {
    #[error("Semantic version is not valid format")]
    VersionIsNotValid,

    #[error("Major version is not int format")]
    MajorVersionIsNotValid,

    #[error("Minor version is not int format")]
    MinorVersionIsNotValid,

    #[error("Patch version is not int format")]
    PatchVersionIsNotValid,
}

/// Convenience type alias for Results in verg
pub type Result<T> = std::result::Result<T, SemanticError>;
