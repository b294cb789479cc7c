use tracing::info;
use wgpu::util::DeviceExt;
use wgpu::{Buffer, BufferUsages};

use crate::mesh::TerrainMesh;

/// GPU-resident copy of a terrain mesh.
pub struct GpuMesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub num_indices: u32,
}

impl GpuMesh {
    pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;
}

/// Uploads the mesh into freshly created vertex/index buffers. The CPU-side
/// mesh is no longer needed afterwards.
pub fn upload_mesh(device: &wgpu::Device, mesh: &TerrainMesh, label: &str) -> GpuMesh {
    info!(
        label,
        vertices = mesh.vertices.len(),
        indices = mesh.indices.len(),
        "uploading terrain mesh"
    );

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{label} Vertex Buffer")),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{label} Index Buffer")),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: BufferUsages::INDEX,
    });

    GpuMesh {
        vertex_buffer,
        index_buffer,
        num_indices: mesh.indices.len() as u32,
    }
}
