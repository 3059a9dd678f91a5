//! Common error infrastructure for map-core.
//!
//! List operations never fail: invalid gestures are no-ops. Errors only exist
//! where a caller hands in a value the editor must reject, such as spawn
//! parameters outside their range or lookups of unknown palette entries.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input; the control should snap back to its previous value.
    Validation,

    /// Requested entry does not exist; usually stale UI state.
    NotFound,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
        }
    }
}

/// Common trait for all map-core errors.
pub trait EditorError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by the creature palette.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("spawn time {value}s is outside {min}..={max}")]
    SpawnTimeOutOfRange { value: u32, min: u32, max: u32 },

    #[error("spawn size {value} is outside {min}..={max}")]
    SpawnSizeOutOfRange { value: u32, min: u32, max: u32 },

    #[error("no tileset at index {0}")]
    UnknownTileset(usize),

    #[error("no creature named {0:?} in the current tileset")]
    UnknownCreature(String),
}

impl EditorError for PaletteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SpawnTimeOutOfRange { .. } | Self::SpawnSizeOutOfRange { .. } => {
                ErrorSeverity::Validation
            }
            Self::UnknownTileset(_) | Self::UnknownCreature(_) => ErrorSeverity::NotFound,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SpawnTimeOutOfRange { .. } => "SPAWN_TIME_OUT_OF_RANGE",
            Self::SpawnSizeOutOfRange { .. } => "SPAWN_SIZE_OUT_OF_RANGE",
            Self::UnknownTileset(_) => "UNKNOWN_TILESET",
            Self::UnknownCreature(_) => "UNKNOWN_CREATURE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_errors_are_validation_failures() {
        let error = PaletteError::SpawnTimeOutOfRange {
            value: 0,
            min: 1,
            max: 86_400,
        };

        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.severity().as_str(), "validation");
        assert_eq!(error.error_code(), "SPAWN_TIME_OUT_OF_RANGE");
        assert_eq!(error.to_string(), "spawn time 0s is outside 1..=86400");
    }

    #[test]
    fn lookup_errors_are_not_found() {
        let tileset = PaletteError::UnknownTileset(4);
        let creature = PaletteError::UnknownCreature("Nobody".into());

        assert_eq!(tileset.severity(), ErrorSeverity::NotFound);
        assert_eq!(creature.severity().as_str(), "not_found");
        assert_eq!(tileset.error_code(), "UNKNOWN_TILESET");
        assert_eq!(creature.error_code(), "UNKNOWN_CREATURE");
    }
}
