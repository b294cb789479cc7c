use super::TerrainError;

/// Resolution of a rectangular lattice of sample points.
///
/// The lattice always spans [0,1]x[0,1] regardless of resolution, so mesh
/// density stays decoupled from world size; callers scale with a world
/// transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDescriptor {
    columns: u32,
    rows: u32,
}

impl GridDescriptor {
    /// Both dimensions must be at least 2; anything smaller cannot close a quad.
    pub fn new(columns: u32, rows: u32) -> Result<Self, TerrainError> {
        if columns < 2 || rows < 2 {
            return Err(TerrainError::InvalidGrid { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Spacing between adjacent lattice points along x and z.
    pub fn scale(&self) -> (f32, f32) {
        (
            1.0 / (self.columns - 1) as f32,
            1.0 / (self.rows - 1) as f32,
        )
    }

    /// One vertex per lattice point, shared edges included exactly once.
    pub fn vertex_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Two triangles per interior quad, three indices each.
    pub fn index_count(&self) -> usize {
        6 * (self.columns as usize - 1) * (self.rows as usize - 1)
    }

    /// Row-major flat index of lattice point (i, j).
    pub fn index(&self, i: u32, j: u32) -> u32 {
        debug_assert!(i < self.columns && j < self.rows);
        j * self.columns + i
    }
}
