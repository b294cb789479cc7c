pub mod builder;
pub mod grid;
pub mod vertex;

pub use builder::{build_grid, TerrainMesh};
pub use grid::GridDescriptor;
pub use vertex::Vertex;

#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    #[error("grid must be at least 2x2 to form a quad, got {columns}x{rows}")]
    InvalidGrid { columns: u32, rows: u32 },
    #[error("height field sampling failed: {0}")]
    HeightField(#[source] Box<dyn std::error::Error + Send + Sync>),
}
