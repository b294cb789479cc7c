use serde::{Deserialize, Serialize};

/// Bins a continuous elevation into three flat colors: water, land, peaks.
///
/// The thresholds are presentation parameters with no bearing on mesh
/// construction; shader-side texture blending uses its own ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationPalette {
    pub water_below: f32,
    pub snow_above: f32,
}

impl Default for ElevationPalette {
    fn default() -> Self {
        Self {
            water_below: -0.025,
            snow_above: 0.05,
        }
    }
}

impl ElevationPalette {
    pub fn classify(&self, elevation: f32) -> [f32; 3] {
        if elevation < self.water_below {
            [0.0, 0.0, 1.0]
        } else if elevation < self.snow_above {
            [0.0, 1.0, 0.0]
        } else {
            [1.0, 1.0, 1.0]
        }
    }
}
