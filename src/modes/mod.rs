pub mod session;
pub mod terminal;
pub mod ticker;
#[cfg(feature = "window")]
pub mod window;

pub use session::Session;
pub use terminal::TerminalMode;
pub use ticker::FixedStep;
#[cfg(feature = "window")]
pub use window::WindowMode;
