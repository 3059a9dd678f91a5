//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

use map_core::palette::{DEFAULT_SPAWN_SIZE, DEFAULT_SPAWN_TIME};

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub palette: PaletteConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, palette: PaletteConfig) -> Self {
        Self { messages, palette }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAPEDIT_MESSAGE_CAPACITY` - Status log capacity (default: 64)
    /// - `MAPEDIT_SPAWN_TIME` - Initial spawn time in seconds (default: 60)
    /// - `MAPEDIT_SPAWN_SIZE` - Initial spawn radius (default: 3)
    /// - `MAPEDIT_WARN_ON_DELETE` - Log deletions as warnings instead of info (default: false)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading values through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = parse_var::<usize>(&lookup, "MAPEDIT_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(warn) = parse_bool(&lookup, "MAPEDIT_WARN_ON_DELETE") {
            config.messages.warn_on_delete = warn;
        }

        if let Some(seconds) = parse_var::<u32>(&lookup, "MAPEDIT_SPAWN_TIME") {
            config.palette.spawn_time = seconds;
        }
        if let Some(size) = parse_var::<u32>(&lookup, "MAPEDIT_SPAWN_SIZE") {
            config.palette.spawn_size = size;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub warn_on_delete: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            warn_on_delete: false,
        }
    }
}

/// Initial creature palette parameters. Out-of-range values are rejected by
/// the palette when applied and the defaults stay in place.
#[derive(Clone, Debug)]
pub struct PaletteConfig {
    pub spawn_time: u32,
    pub spawn_size: u32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            spawn_time: DEFAULT_SPAWN_TIME,
            spawn_size: DEFAULT_SPAWN_SIZE,
        }
    }
}

impl PaletteConfig {
    /// Applies these defaults to `palette`, logging values it rejects.
    pub fn apply(&self, palette: &mut map_core::CreaturePalette) {
        if let Err(e) = palette.set_spawn_time(self.spawn_time) {
            tracing::warn!("Ignoring configured spawn time: {}", e);
        }
        if let Err(e) = palette.set_spawn_size(self.spawn_size) {
            tracing::warn!("Ignoring configured spawn size: {}", e);
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}

fn parse_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_core::CreaturePalette;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn warn_on_delete_reads_its_own_variable() {
        let config = FrontendConfig::from_vars(vars(&[("MAPEDIT_WARN_ON_DELETE", "yes")]));
        assert!(config.messages.warn_on_delete);

        let config = FrontendConfig::from_vars(vars(&[("MAPEDIT_CONFIRM_DELETE", "yes")]));
        assert!(!config.messages.warn_on_delete);
    }

    #[test]
    fn unset_or_garbled_values_keep_defaults() {
        let config = FrontendConfig::from_vars(vars(&[
            ("MAPEDIT_MESSAGE_CAPACITY", "0"),
            ("MAPEDIT_SPAWN_TIME", "soon"),
        ]));

        assert_eq!(config.messages.capacity, 1);
        assert_eq!(config.palette.spawn_time, DEFAULT_SPAWN_TIME);
        assert_eq!(config.palette.spawn_size, DEFAULT_SPAWN_SIZE);
    }

    #[test]
    fn palette_config_applies_valid_values() {
        let mut palette = CreaturePalette::default();
        PaletteConfig {
            spawn_time: 300,
            spawn_size: 7,
        }
        .apply(&mut palette);

        assert_eq!(palette.spawn_time(), 300);
        assert_eq!(palette.spawn_size(), 7);
    }

    #[test]
    fn palette_config_keeps_defaults_on_invalid_values() {
        let mut palette = CreaturePalette::default();
        PaletteConfig {
            spawn_time: 0,
            spawn_size: 500,
        }
        .apply(&mut palette);

        assert_eq!(palette.spawn_time(), DEFAULT_SPAWN_TIME);
        assert_eq!(palette.spawn_size(), DEFAULT_SPAWN_SIZE);
    }
}
