//! Desktop shell: top bar, window canvas, launcher, dock and popovers

use dioxus::prelude::*;

mod components;
mod effects;
mod shell;
pub mod state;

pub use shell::DesktopShell;

#[component]
pub fn Desktop() -> Element {
    rsx! {
        DesktopShell {}
    }
}
