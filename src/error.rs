use std::fmt;

/// Failures while bringing up the GPU for a window.
#[derive(Debug)]
pub enum RenderError {
    SurfaceCreation(wgpu::CreateSurfaceError),
    NoAdapter(wgpu::RequestAdapterError),
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceCreation(e) => write!(f, "Failed to create surface: {e}"),
            RenderError::NoAdapter(e) => write!(f, "No compatible GPU adapter found: {e}"),
            RenderError::DeviceCreation(e) => write!(f, "Failed to create device: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::SurfaceCreation(e) => Some(e),
            RenderError::NoAdapter(e) => Some(e),
            RenderError::DeviceCreation(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for RenderError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RenderError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for RenderError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        RenderError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::DeviceCreation(e)
    }
}

/// Fatal startup and event loop faults.
#[derive(Debug)]
pub enum AppError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Render(RenderError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "Event loop failed: {e}"),
            AppError::Window(e) => write!(f, "Failed to create window: {e}"),
            AppError::Render(e) => write!(f, "Failed to create renderer: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
            AppError::Window(e) => Some(e),
            AppError::Render(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for AppError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for AppError {
    fn from(e: winit::error::OsError) -> Self {
        AppError::Window(e)
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e)
    }
}
