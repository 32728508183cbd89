//! Desktop state for the Aurora desktop
//!
//! Everything here is plain data plus transition functions, so the window
//! collection, pointer sessions, popovers, calendar and clock can be driven
//! and tested without a rendering surface. The Dioxus front end holds a
//! [`DesktopState`] in a signal and feeds it [`DesktopAction`]s.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod geometry;
pub mod interaction;
pub mod media;
pub mod popover;
pub mod state;
pub mod window;

pub use calendar::{CalendarCell, CalendarCursor};
pub use clock::{CancelTimer, ClockReading, ScopedTimer};
pub use config::{
    ClockConfig, ConfigError, DesktopConfig, LauncherConfig, LayoutConfig, MusicConfig,
    PopoverConfig, WindowConfig,
};
pub use geometry::{Point, Size};
pub use interaction::{resize_to_pointer, Interaction, PointerTarget, ResizeCorner, WindowUpdate};
pub use media::{MusicPlayer, Track, VoiceAssistant};
pub use popover::{PopoverKind, PopoverPolicy, PopoverSet};
pub use state::{DesktopAction, DesktopState};
pub use window::{AppWindow, WindowCollection, WindowId};
