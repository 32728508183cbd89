use desktop_types::DesktopAction;
use dioxus::prelude::*;

#[component]
pub fn LauncherGrid(tile_count: usize, columns: usize, on_action: Callback<DesktopAction>) -> Element {
    rsx! {
        div {
            class: "launcher-backdrop",
            style: "position: fixed; inset: 0; z-index: 1400; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.25);",
            onclick: move |_| on_action.call(DesktopAction::ToggleLauncher),

            div {
                class: "launcher-grid",
                style: "display: grid; grid-template-columns: repeat({columns}, 96px); gap: 1.5rem; padding: 2rem; background: var(--launcher-bg); border: 1px solid var(--border-color); border-radius: var(--radius-lg); backdrop-filter: blur(20px); box-shadow: var(--shadow-lg);",
                onclick: move |e| e.stop_propagation(),

                for slot in 0..tile_count {
                    LauncherTile { key: "{slot}", slot, on_action }
                }
            }
        }
    }
}

#[component]
fn LauncherTile(slot: usize, on_action: Callback<DesktopAction>) -> Element {
    let label = format!("App {}", slot + 1);

    rsx! {
        button {
            class: "launcher-tile",
            style: "width: 96px; height: 96px; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 0.25rem; background: var(--tile-bg); color: var(--text-primary); border: none; border-radius: var(--radius-lg); cursor: pointer; transition: transform 0.15s; box-shadow: var(--shadow-lg);",
            "aria-label": "Open {label}",
            onclick: move |e| {
                e.stop_propagation();
                on_action.call(DesktopAction::LaunchApp);
            },
            span { style: "font-size: 1.75rem;", "◆" }
            span { style: "font-size: 0.75rem; font-weight: 500;", "{label}" }
        }
    }
}
