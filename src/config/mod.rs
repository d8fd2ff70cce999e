//! Unified configuration loading.
//!
//! Loads all tunables from a single YAML file; every field has a serde
//! default, so a partial (or missing) file yields a fully usable config.

pub(crate) mod defaults;
mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::map::MapConfig;
use crate::nav::NavConfig;
use crate::vision::ClassifierConfig;

pub use error::ConfigLoadError;

/// Camera-to-ground-plane calibration.
///
/// `src_quad` is the image-pixel outline of a square calibration target
/// laid flat in front of the vehicle; the rectifier maps it to a
/// `2 * dst_half_width` pixel square sitting `bottom_offset` pixels
/// above the bottom edge of the output, centered horizontally.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalibrationConfig {
    /// Expected camera frame width in pixels.
    #[serde(default = "defaults::frame_width")]
    pub frame_width: usize,

    /// Expected camera frame height in pixels.
    #[serde(default = "defaults::frame_height")]
    pub frame_height: usize,

    /// Calibration target corners in image pixels, ordered bottom-left,
    /// bottom-right, top-right, top-left.
    #[serde(default = "defaults::src_quad")]
    pub src_quad: [[f64; 2]; 4],

    /// Half side length of the rectified target square, output pixels.
    #[serde(default = "defaults::dst_half_width")]
    pub dst_half_width: f64,

    /// Gap between the rectified square and the bottom output edge.
    #[serde(default = "defaults::bottom_offset")]
    pub bottom_offset: f64,
}

impl CalibrationConfig {
    /// Destination quad in rectified-image pixels, corner order matching
    /// [`src_quad`](Self::src_quad).
    pub fn dst_quad(&self) -> [[f64; 2]; 4] {
        let cx = self.frame_width as f64 / 2.0;
        let h = self.frame_height as f64;
        let s = self.dst_half_width;
        let b = self.bottom_offset;
        [
            [cx - s, h - b],
            [cx + s, h - b],
            [cx + s, h - 2.0 * s - b],
            [cx - s, h - 2.0 * s - b],
        ]
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            frame_width: defaults::frame_width(),
            frame_height: defaults::frame_height(),
            src_quad: defaults::src_quad(),
            dst_half_width: defaults::dst_half_width(),
            bottom_offset: defaults::bottom_offset(),
        }
    }
}

/// Full rover-core configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RoverConfig {
    /// Camera calibration
    #[serde(default)]
    pub calibration: CalibrationConfig,

    /// Terrain classifier settings
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// World map settings
    #[serde(default)]
    pub map: MapConfig,

    /// Navigation settings
    #[serde(default)]
    pub nav: NavConfig,
}

impl RoverConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}
