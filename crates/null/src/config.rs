//! Configuration for stand-in registries

use std::env;

use crate::error::{NullError, NullResult};

/// Environment variable toggling strict Void overrides
pub const STRICT_OVERRIDES_ENV: &str = "ELIF_NULL_STRICT_OVERRIDES";

/// Environment variable permitting Null/Void redefinition
pub const ALLOW_REDEFINITION_ENV: &str = "ELIF_NULL_ALLOW_REDEFINITION";

/// Registry behaviour switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullConfig {
    /// Reject Void overrides that name neither a model attribute nor an
    /// assignment. When false they are ignored with a warning.
    pub strict_overrides: bool,
    /// Allow a model's Null or Void declaration to be replaced
    pub allow_redefinition: bool,
}

impl NullConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict_overrides(mut self, strict: bool) -> Self {
        self.strict_overrides = strict;
        self
    }

    pub fn with_allow_redefinition(mut self, allow: bool) -> Self {
        self.allow_redefinition = allow;
        self
    }

    /// Load configuration from environment variables; unset variables keep their defaults
    pub fn from_env() -> NullResult<Self> {
        let config = Self {
            strict_overrides: bool_from_env(STRICT_OVERRIDES_ENV)?.unwrap_or(false),
            allow_redefinition: bool_from_env(ALLOW_REDEFINITION_ENV)?.unwrap_or(false),
        };
        tracing::debug!("Loaded stand-in configuration from environment: {:?}", config);
        Ok(config)
    }
}

fn bool_from_env(name: &str) -> NullResult<Option<bool>> {
    match env::var(name) {
        Ok(value) => parse_bool(name, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_bool(field: &str, value: &str) -> NullResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(NullError::Configuration {
            field: field.to_string(),
            value: value.to_string(),
            expected: "true, false, 1, 0, yes or no".to_string(),
        }),
    }
}
