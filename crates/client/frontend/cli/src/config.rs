//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub folders: CreatureFolders,
    /// Names the log directory of this run. Generated when absent.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 6)
    /// - `CLI_PALETTE_WIDTH` - Palette width in percent of the screen (default: 40)
    /// - `MAPEDIT_NPC_DIR` - Folder loaded by the "load NPCs" key
    /// - `MAPEDIT_MONSTER_DIR` - Folder loaded by the "load monsters" key
    /// - `MAPEDIT_SESSION_ID` - Session name used for the log directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(width) = read_env::<u16>("CLI_PALETTE_WIDTH") {
            config.ui.palette_width_percent = width.clamp(20, 80);
        }

        config.folders.npcs = env::var_os("MAPEDIT_NPC_DIR").map(PathBuf::from);
        config.folders.monsters = env::var_os("MAPEDIT_MONSTER_DIR").map(PathBuf::from);
        config.session_id = env::var("MAPEDIT_SESSION_ID").ok();

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Width of the palette panel as a percentage of the screen.
    pub palette_width_percent: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 6,
            palette_width_percent: 40,
        }
    }
}

/// Folders the creature palette can load creatures from.
#[derive(Clone, Debug, Default)]
pub struct CreatureFolders {
    pub npcs: Option<PathBuf>,
    pub monsters: Option<PathBuf>,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
