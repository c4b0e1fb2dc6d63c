use crate::error::{MazeError, Result};

/// Width and height of the maze drawn by the original sketch.
pub const DEFAULT_DIMS: (usize, usize) = (64, 64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,

    /// Fixed seed for a reproducible maze; a fresh one is drawn when unset.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMS.0,
            height: DEFAULT_DIMS.1,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn with_dims(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_config {
    use super::*;

    #[test]
    fn defaults_to_sketch_size() {
        let config = MazeConfig::default();
        assert_eq!((config.width, config.height), (64, 64));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimension_is_invalid() {
        assert_eq!(
            MazeConfig::with_dims(0, 3).validate(),
            Err(MazeError::InvalidDimensions { width: 0, height: 3 })
        );
        assert!(MazeConfig::with_dims(3, 0).seed(1).validate().is_err());
    }
}
