use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnakeError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid board layout: {0}")]
    InvalidLayout(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Window error: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("GPU device error: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("No compatible GPU adapter found")]
    NoAdapter,
}

pub type Result<T> = std::result::Result<T, SnakeError>;
