#[cfg(feature = "window")]
pub mod canvas;
pub mod renderer;
pub mod scene;

#[cfg(feature = "window")]
pub use canvas::CanvasPainter;
pub use renderer::Renderer;
pub use scene::{Fill, Scene, window_title};
