//! Lattice configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};

/// Configuration for the order-5 vertex lattice and its navigation loop.
///
/// # Example
/// ```
/// use hyperlattice_graph::config::LatticeConfig;
///
/// let config = LatticeConfig::default();
/// assert_eq!(config.branch_length, 1.255);
/// assert_eq!(config.frame_radius, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LatticeConfig {
    /// Geodesic length of every lattice edge.
    /// Must be positive and finite. Default: 1.255
    pub branch_length: f64,

    /// Disc-to-screen scale: a disc point `p` lands at `p * scale + scale`.
    /// Must be positive and finite. Default: 400.0
    pub display_scale: f64,

    /// Address length up to which the frame tree is generated around the
    /// walker origin. Default: 3
    pub frame_radius: usize,

    /// Address length up to which vertices are generated at construction,
    /// independent of any frame. Default: 2
    pub vertex_radius: usize,

    /// Upper bound on committed steps in a single rebase loop.
    /// Must be positive. Default: 1024
    pub max_rebase_steps: usize,

    /// Translation length / rotation angle applied per navigation tick.
    /// Must be finite and non-negative. Default: 0.04
    pub navigation_speed: f64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            branch_length: 1.255,
            display_scale: 400.0,
            frame_radius: 3,
            vertex_radius: 2,
            max_rebase_steps: 1024,
            navigation_speed: 0.04,
        }
    }
}

impl LatticeConfig {
    /// Create config with a custom frame radius, other fields default.
    ///
    /// # Example
    /// ```
    /// use hyperlattice_graph::config::LatticeConfig;
    /// let config = LatticeConfig::with_frame_radius(4);
    /// assert_eq!(config.frame_radius, 4);
    /// assert_eq!(config.vertex_radius, 2);
    /// ```
    pub fn with_frame_radius(frame_radius: usize) -> Self {
        Self {
            frame_radius,
            ..Default::default()
        }
    }

    /// Edge length of the order-5 square tessellation,
    /// `2 acosh(cos(pi/4) / sin(pi/5))` (about 1.25374).
    ///
    /// With this length, frames generated around different origins place
    /// shared vertices identically. The default `branch_length` of 1.255 is
    /// a rounded value of it.
    pub fn exact_branch_length() -> f64 {
        use std::f64::consts::{FRAC_PI_4, PI};
        2.0 * (FRAC_PI_4.cos() / (PI / 5.0).sin()).acosh()
    }

    /// Default configuration with [`Self::exact_branch_length`].
    pub fn exact() -> Self {
        Self {
            branch_length: Self::exact_branch_length(),
            ..Default::default()
        }
    }

    /// Validate every parameter.
    ///
    /// # Errors
    /// Returns `LatticeError::InvalidConfig` describing the FIRST violated
    /// rule.
    ///
    /// # Example
    /// ```
    /// use hyperlattice_graph::config::LatticeConfig;
    ///
    /// let mut config = LatticeConfig::default();
    /// config.branch_length = 0.0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> LatticeResult<()> {
        if !self.branch_length.is_finite() || self.branch_length <= 0.0 {
            return Err(LatticeError::InvalidConfig(format!(
                "branch_length must be positive and finite (got {})",
                self.branch_length
            )));
        }

        if !self.display_scale.is_finite() || self.display_scale <= 0.0 {
            return Err(LatticeError::InvalidConfig(format!(
                "display_scale must be positive and finite (got {})",
                self.display_scale
            )));
        }

        if self.max_rebase_steps == 0 {
            return Err(LatticeError::InvalidConfig(
                "max_rebase_steps must be greater than 0".to_string(),
            ));
        }

        if !self.navigation_speed.is_finite() || self.navigation_speed < 0.0 {
            return Err(LatticeError::InvalidConfig(format!(
                "navigation_speed must be finite and non-negative (got {})",
                self.navigation_speed
            )));
        }

        Ok(())
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Example
    /// ```
    /// use hyperlattice_graph::config::LatticeConfig;
    ///
    /// let config = LatticeConfig::from_toml_str("frame_radius = 2").unwrap();
    /// assert_eq!(config.frame_radius, 2);
    /// assert_eq!(config.display_scale, 400.0);
    /// ```
    pub fn from_toml_str(content: &str) -> LatticeResult<Self> {
        let config: LatticeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: &Path) -> LatticeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            LatticeError::ConfigParse(msg) => {
                LatticeError::ConfigParse(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}
