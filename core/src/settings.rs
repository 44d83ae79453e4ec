//! Settings validation and loading
//!
//! Settings come from the front end (or a TOML file) and are validated once,
//! before any resolution call sees them.

use std::path::Path;

use shadowlog_types::{MAX_IMPROVED_MIND_BLAST, Settings};

use crate::error::ConfigError;

/// Reject settings the resolvers cannot interpret.
pub fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    if settings.improved_mind_blast > MAX_IMPROVED_MIND_BLAST {
        return Err(ConfigError::Invalid {
            reason: format!(
                "improved_mind_blast must be 0-{}, got {}",
                MAX_IMPROVED_MIND_BLAST, settings.improved_mind_blast
            ),
        });
    }

    if let Some(rating) = settings.haste_rating {
        if !rating.is_finite() || rating < 0.0 {
            return Err(ConfigError::Invalid {
                reason: format!("haste_rating must be a non-negative number, got {rating}"),
            });
        }
    }

    if settings.auras.contains(&0) {
        return Err(ConfigError::Invalid {
            reason: "aura id 0 is not a valid aura".to_string(),
        });
    }

    Ok(())
}

/// Parse and validate settings from TOML text.
pub fn parse_settings(content: &str, path: &Path) -> Result<Settings, ConfigError> {
    let settings: Settings = toml::from_str(content).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Load and validate settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&content, path)?;
    tracing::debug!(path = %path.display(), "Loaded player settings");
    Ok(settings)
}
