//! Gear bonus loading
//!
//! Set bonuses and similar item effects arrive as a TOML list of spell
//! patches:
//!
//! ```toml
//! [[bonus]]
//! spell = 25375
//! cooldown = 5.5
//! ```
//!
//! Rank ids are folded onto their spell's main id, since resolution looks
//! bonuses up by main id.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::context::ActorInfo;
use crate::error::ConfigError;
use crate::game_data::canonicalize;
use crate::spells::{SpellCatalog, SpellPatch};

#[derive(Debug, Deserialize)]
struct GearFile {
    #[serde(default)]
    bonus: Vec<GearBonus>,
}

#[derive(Debug, Deserialize)]
struct GearBonus {
    /// Raw spell id, pseudo ids allowed
    spell: i64,
    #[serde(flatten)]
    patch: SpellPatch,
}

/// Parse gear bonuses from TOML text.
pub fn parse_gear(content: &str, path: &Path) -> Result<ActorInfo, ConfigError> {
    let file: GearFile = toml::from_str(content).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = SpellCatalog::global();
    let mut bonuses = HashMap::with_capacity(file.bonus.len());
    for GearBonus { spell, patch } in file.bonus {
        let id = canonicalize(spell);
        let main_id = match catalog.baseline(id) {
            Ok(record) => record.main_id,
            Err(_) => {
                // resolution never reaches it, but keep it for other callers
                tracing::warn!(spell_id = id, "Gear bonus for unknown spell");
                id
            }
        };
        if patch.is_empty() {
            tracing::debug!(spell_id = main_id, "Skipping empty gear bonus");
            continue;
        }
        if bonuses.insert(main_id, patch).is_some() {
            return Err(ConfigError::DuplicateId { id: main_id });
        }
    }

    Ok(ActorInfo { bonuses })
}

/// Load gear bonuses from a TOML file.
pub fn load_gear(path: &Path) -> Result<ActorInfo, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let actor = parse_gear(&content, path)?;
    tracing::debug!(path = %path.display(), bonuses = actor.bonuses.len(), "Loaded gear bonuses");
    Ok(actor)
}
