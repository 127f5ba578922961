//! Observer position provider
//!
//! The core asks a collaborator for one position when a session starts.
//! Failure means no session start; the core never retries on its own.

use crate::geo::Position;

#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error("position access denied")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the current observer position on demand
pub trait PositionProvider {
    fn current_position(&self) -> Result<Position, PositionError>;
}

/// Fixed position taken from configuration
pub struct ConfiguredPosition {
    position: Option<Position>,
}

impl ConfiguredPosition {
    pub fn new(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        let position = match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Position::new(latitude, longitude)),
            _ => None,
        };
        Self { position }
    }
}

impl PositionProvider for ConfiguredPosition {
    fn current_position(&self) -> Result<Position, PositionError> {
        let position = self
            .position
            .ok_or_else(|| PositionError::Unavailable("no observer configured".to_string()))?;

        if !(-90.0..=90.0).contains(&position.latitude)
            || !(-180.0..=180.0).contains(&position.longitude)
        {
            return Err(PositionError::Unavailable(format!(
                "observer out of range: ({}, {})",
                position.latitude, position.longitude
            )));
        }
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_position_ok() {
        let p = ConfiguredPosition::new(Some(47.42), Some(8.43));
        assert_eq!(p.current_position().unwrap(), Position::new(47.42, 8.43));
    }

    #[test]
    fn test_missing_coordinates_unavailable() {
        assert!(ConfiguredPosition::new(None, Some(8.43)).current_position().is_err());
        assert!(ConfiguredPosition::new(None, None).current_position().is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(ConfiguredPosition::new(Some(91.0), Some(0.0)).current_position().is_err());
        assert!(ConfiguredPosition::new(Some(0.0), Some(181.0)).current_position().is_err());
    }
}
