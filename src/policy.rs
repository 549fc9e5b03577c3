//! Input validation policy.
//!
//! The underlying hash functions accept empty strings, so rejecting
//! empty seeds is a deployment choice, not an algorithmic requirement.
//! The policy captures that choice explicitly and can be loaded from a
//! TOML file alongside other deployment configuration.

use crate::error::{FairnessError, InputField};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Validation policy applied before either transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Reject empty seed, secret, and salt strings.
    pub reject_empty_inputs: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

impl ValidationPolicy {
    /// Rejects empty inputs. The recommended deployment posture.
    pub fn strict() -> Self {
        Self {
            reject_empty_inputs: true,
        }
    }

    /// Accepts empty inputs, matching deployments that never guarded
    /// against them.
    pub fn permissive() -> Self {
        Self {
            reject_empty_inputs: false,
        }
    }

    /// Checks one input string against the policy.
    pub fn check(&self, field: InputField, value: &str) -> Result<(), FairnessError> {
        if self.reject_empty_inputs && value.is_empty() {
            return Err(FairnessError::EmptyInput { field });
        }
        Ok(())
    }
}

/// Errors while loading a policy file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PolicyFileError {
    #[error("failed to read policy file: {0}")]
    FileReadError(String),
    #[error("failed to parse policy file: {0}")]
    ParseError(String),
}

/// Policy file format.
///
/// ```toml
/// [validation]
/// reject_empty_inputs = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PolicyFile {
    /// The validation table.
    #[serde(default)]
    pub validation: ValidationPolicy,
}

impl PolicyFile {
    /// Loads a policy from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PolicyFileError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PolicyFileError::FileReadError(e.to_string()))?;
        let policy: PolicyFile =
            toml::from_str(&content).map_err(|e| PolicyFileError::ParseError(e.to_string()))?;
        Ok(policy)
    }
}
