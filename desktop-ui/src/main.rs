use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::{warn, Level};

use desktop_types::DesktopConfig;
use desktop_ui::{install_desktop_config, log_level, parse_builtin_config, Desktop};

fn main() {
    let parsed = parse_builtin_config();
    let level = parsed.as_ref().map(log_level).unwrap_or(Level::INFO);

    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(level).ok();

    let config = parsed.unwrap_or_else(|err| {
        warn!(error = %err, "Built-in desktop config rejected; using defaults");
        DesktopConfig::default()
    });
    install_desktop_config(config);

    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Desktop {}
    }
}
