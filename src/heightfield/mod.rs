pub mod fractal;
pub mod heightmap;
pub mod palette;

pub use fractal::FractalElevation;
pub use heightmap::HeightmapImage;
pub use palette::ElevationPalette;

use anyhow::Result;

/// Elevation over normalized grid coordinates.
///
/// Implementations must be pure: the mesh builder's determinism guarantee is
/// only as good as the source's. Sampling failures abort mesh construction.
pub trait ElevationSource {
    fn sample(&self, x: f32, y: f32) -> Result<f32>;
}

/// Adapts a pure closure into an elevation source.
pub struct FnSource<F>(F);

pub fn from_fn<F>(f: F) -> FnSource<F>
where
    F: Fn(f32, f32) -> f32,
{
    FnSource(f)
}

impl<F> ElevationSource for FnSource<F>
where
    F: Fn(f32, f32) -> f32,
{
    fn sample(&self, x: f32, y: f32) -> Result<f32> {
        Ok((self.0)(x, y))
    }
}
