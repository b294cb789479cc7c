use tracing::info;
use wgpu::{Device, Queue, TextureFormat};

use crate::heightfield::HeightmapImage;

pub struct HeightmapTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

/// Uploads a heightmap as a single-channel float texture.
///
/// Sampling is nearest-neighbor: `R32Float` is not filterable without the
/// `FLOAT32_FILTERABLE` device feature.
pub fn upload_heightmap(
    device: &Device,
    queue: &Queue,
    heightmap: &HeightmapImage,
    label: Option<&str>,
) -> HeightmapTexture {
    info!(
        width = heightmap.width,
        height = heightmap.height,
        "uploading heightmap texture"
    );

    let size = wgpu::Extent3d {
        width: heightmap.width,
        height: heightmap.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label,
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: TextureFormat::R32Float,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        bytemuck::cast_slice(&heightmap.pixels),
        wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(4 * heightmap.width),
            rows_per_image: Some(heightmap.height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Nearest,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });

    HeightmapTexture {
        texture,
        view,
        sampler,
    }
}
