use crate::piece::Square;
use std::path::PathBuf;

/// Pipeline stage a shader source belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ShaderError {
    #[error("can't read {stage} shader {}", path.display())]
    Read {
        stage: ShaderStage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to compile {stage} shader {}: {message}", path.display())]
    Compile {
        stage: ShaderStage,
        path: PathBuf,
        message: String,
    },

    #[error("failed to link shader program: {0}")]
    Link(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("failed to load texture {}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("texture {} is {width}x{height}, the device allows 1 to {max} pixels per side", path.display())]
    Size {
        path: PathBuf,
        width: u32,
        height: u32,
        max: u32,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("can't read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("all {0} piece slots are in use")]
    Full(usize),

    #[error("square {0} already holds a piece")]
    Taken(Square),

    #[error("slot {0} holds no piece")]
    NoPiece(usize),
}

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("can't create window surface")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no graphics adapter compatible with the window surface")]
    NoAdapter,

    #[error("window surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("can't open graphics device")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("can't acquire the next frame")]
    Frame(#[from] wgpu::SurfaceError),

    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error(transparent)]
    Asset(#[from] AssetError),
}
