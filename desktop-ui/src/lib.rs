pub mod config;
pub mod desktop;
pub mod desktop_window;
pub mod interop;

pub use config::*;
pub use desktop::*;
pub use desktop_window::*;
pub use interop::*;
