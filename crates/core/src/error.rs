//! Error types for the lowpoly core.

use thiserror::Error;

/// Errors produced by pattern configuration, generation, and encoding.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A config field had a value outside its valid range. Rejected before
    /// any generation begins; no partial buffer is produced.
    #[error("invalid config: {field} must be {requirement}, got {value}")]
    InvalidConfig {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A palette name was not found in the built-in registry.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// The pixel buffer could not be turned into an encodable representation.
    /// The in-memory render path is unaffected by this failure.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// An I/O error while writing an encoded image.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_names_the_field_and_value() {
        let err = PatternError::InvalidConfig {
            field: "cell_size",
            requirement: "positive",
            value: -3.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("cell_size"), "missing field in: {msg}");
        assert!(msg.contains("positive"), "missing requirement in: {msg}");
        assert!(msg.contains("-3"), "missing value in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = PatternError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_palette_includes_name() {
        let err = PatternError::UnknownPalette("sunrise".into());
        let msg = format!("{err}");
        assert!(msg.contains("sunrise"), "missing name in: {msg}");
    }

    #[test]
    fn encoding_error_includes_message() {
        let err = PatternError::Encoding("buffer size mismatch".into());
        let msg = format!("{err}");
        assert!(msg.contains("buffer size mismatch"), "missing message in: {msg}");
    }

    #[test]
    fn pattern_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternError>();
    }

    #[test]
    fn pattern_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<PatternError>();
    }
}
