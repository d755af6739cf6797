//! Testing support for SHML
//!
//! The `docs/samples/` directory holds the verified sample documents used by
//! the integration tests. They are the canonical SHML sources for this crate;
//! tests should load them through [`SampleSources`] instead of copying
//! content inline, so every test exercises the same corpus.

use std::fmt;
use std::fs;

/// Available sample files (canonical sources).
pub const AVAILABLE_SAMPLES: &[&str] = &[
    "000-single-element.shml",
    "010-nested-elements.shml",
    "020-top-level-siblings.shml",
    "030-comments.shml",
    "040-multiline-tag.shml",
    "050-kitchen-sink.shml",
];

/// Errors that can occur while accessing sample sources.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    UnknownSample(String),
    IoError(String),
}

impl std::error::Error for SampleError {}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::UnknownSample(name) => write!(f, "Unknown sample: {}", name),
            SampleError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

/// Main interface for accessing SHML sample files.
pub struct SampleSources;

impl SampleSources {
    /// Path to the samples directory, relative to the crate root.
    fn samples_dir() -> String {
        "docs/samples".to_string()
    }

    /// Full path to a sample file.
    fn sample_path(filename: &str) -> String {
        format!("{}/{}", Self::samples_dir(), filename)
    }

    /// Validate that a sample file is part of the corpus.
    fn validate_sample(filename: &str) -> Result<(), SampleError> {
        if !AVAILABLE_SAMPLES.contains(&filename) {
            return Err(SampleError::UnknownSample(format!(
                "Sample '{}' is not available. Available samples: {:?}",
                filename, AVAILABLE_SAMPLES
            )));
        }
        Ok(())
    }

    /// Get sample content as a raw string.
    pub fn get_string(filename: &str) -> Result<String, SampleError> {
        Self::validate_sample(filename)?;

        let path = Self::sample_path(filename);
        fs::read_to_string(&path)
            .map_err(|e| SampleError::IoError(format!("Failed to read {}: {}", path, e)))
    }

    /// List all available sample files.
    pub fn list_samples() -> Vec<&'static str> {
        AVAILABLE_SAMPLES.to_vec()
    }
}
