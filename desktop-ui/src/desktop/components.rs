pub mod calendar;
pub mod dock;
pub mod launcher;
pub mod music;
pub mod popovers;
pub mod top_bar;
pub mod voice;
pub mod workspace_canvas;
