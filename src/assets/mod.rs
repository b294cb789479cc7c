pub mod mesh;
pub mod texture;

pub use mesh::{upload_mesh, GpuMesh};
pub use texture::{upload_heightmap, HeightmapTexture};
