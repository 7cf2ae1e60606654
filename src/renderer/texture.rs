use crate::error::AssetError;
use image::RgbaImage;
use std::path::Path;

/// Decode a PNG or JPEG into RGBA8, flipped so the bottom row comes first.
pub fn decode_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    let img = image::open(path).map_err(|source| AssetError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(image::imageops::flip_vertical(&img.to_rgba8()))
}

/// Reject images the device can't hold: empty ones, or a side longer than `max`.
pub fn check_size(path: &Path, width: u32, height: u32, max: u32) -> Result<(), AssetError> {
    if width == 0 || height == 0 || width > max || height > max {
        return Err(AssetError::Size {
            path: path.to_path_buf(),
            width,
            height,
            max,
        });
    }
    Ok(())
}

/// Linear filtering with clamp-to-edge wrapping, shared by every texture.
pub fn create_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Texture Sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

/// GPU image plus the bind group that exposes it to the fragment shader.
pub struct Texture {
    // Kept alive for the bind group; dropping the Texture frees the GPU image.
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl Texture {
    // Callers check the size first; wgpu panics on an out-of-limits extent.
    fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        label: &str,
        img: &RgbaImage,
    ) -> Self {
        let (width, height) = img.dimensions();

        let texture_size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: texture_size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
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
            img,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            texture_size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
            label: Some(label),
        });

        Self {
            _texture: texture,
            bind_group,
            width,
            height,
        }
    }

    /// Decode `path` and upload it.
    ///
    /// Fails with [`AssetError::Size`] instead of handing wgpu an image
    /// beyond `max_texture_dimension_2d`.
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        path: &Path,
    ) -> Result<Self, AssetError> {
        let img = decode_rgba(path)?;
        let (width, height) = img.dimensions();
        check_size(path, width, height, device.limits().max_texture_dimension_2d)?;

        let label = path.to_string_lossy();
        let texture = Self::from_rgba(device, queue, layout, sampler, &label, &img);

        log::debug!("loaded texture {} ({}x{})", path.display(), texture.width(), texture.height());
        Ok(texture)
    }

    /// Make this the texture sampled by the next draw.
    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_bind_group(0, &self.bind_group, &[]);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
