use chrono::Local;
use desktop_types::{DesktopAction, DesktopState, PopoverKind};
use dioxus::prelude::*;

use crate::config::desktop_config;
use crate::desktop::components::calendar::CalendarPopover;
use crate::desktop::components::dock::Dock;
use crate::desktop::components::launcher::LauncherGrid;
use crate::desktop::components::music::MusicPopover;
use crate::desktop::components::popovers::{NotificationsPopover, PowerPopover};
use crate::desktop::components::top_bar::TopBar;
use crate::desktop::components::voice::VoicePopover;
use crate::desktop::components::workspace_canvas::WorkspaceCanvas;
use crate::desktop::state::dispatch;

#[component]
pub fn DesktopShell() -> Element {
    let config = desktop_config();
    let mut desktop_state =
        use_signal(|| DesktopState::new(config, Local::now().date_naive()));

    let on_action = use_callback(move |action: DesktopAction| {
        dispatch(&mut desktop_state, action);
    });

    let state = desktop_state.read().clone();
    let today = Local::now().date_naive();
    let top_bar_height = config.layout.top_bar_height;
    let elevated = state.interaction().target();

    rsx! {
        style { {DESKTOP_TOKENS} }

        div {
            class: "desktop-shell",
            style: "position: relative; width: 100vw; height: 100dvh; overflow: hidden; background: var(--desktop-bg);",

            TopBar {
                clock: config.clock.clone(),
                height: top_bar_height,
                notifications_open: state.is_popover_open(PopoverKind::Notifications),
                power_open: state.is_popover_open(PopoverKind::Power),
                on_action,
            }

            WorkspaceCanvas {
                windows: state.canvas_entries().to_vec(),
                elevated,
                top_bar_height,
                on_action,
            }

            if state.launcher_open() {
                LauncherGrid {
                    tile_count: config.launcher.tile_count,
                    columns: config.launcher.columns,
                    on_action,
                }
            }

            Dock {
                windows: state.dock_entries().to_vec(),
                launcher_open: state.launcher_open(),
                music_open: state.is_popover_open(PopoverKind::Music),
                calendar_open: state.is_popover_open(PopoverKind::Calendar),
                voice_open: state.is_popover_open(PopoverKind::VoiceAssistant),
                on_action,
            }

            if state.is_popover_open(PopoverKind::Notifications) {
                NotificationsPopover {}
            }

            if state.is_popover_open(PopoverKind::Power) {
                PowerPopover {}
            }

            if state.is_popover_open(PopoverKind::Calendar) {
                CalendarPopover {
                    cursor: *state.calendar(),
                    today,
                    on_action,
                }
            }

            if state.is_popover_open(PopoverKind::Music) {
                MusicPopover {
                    player: state.music().clone(),
                    album_art: config.music.album_art.clone(),
                    on_action,
                }
            }

            if state.is_popover_open(PopoverKind::VoiceAssistant) {
                VoicePopover {
                    draft: state.voice().draft().to_string(),
                    listening: state.voice().is_listening(),
                    on_action,
                }
            }
        }
    }
}

const DESKTOP_TOKENS: &str = r#"
:root {
    --desktop-bg: linear-gradient(135deg, #3b0764 0%, #000000 50%, #ea580c 100%);
    --bar-bg: rgba(147, 51, 234, 0.33);
    --panel-bg: rgba(59, 7, 100, 0.7);
    --launcher-bg: rgba(59, 7, 100, 0.3);
    --tile-bg: linear-gradient(135deg, #9333ea 0%, #f97316 100%);
    --window-bg: rgba(24, 10, 40, 0.85);
    --titlebar-bg: rgba(88, 28, 135, 0.6);
    --dock-bg: rgba(59, 7, 100, 0.45);
    --text-primary: #ffffff;
    --text-secondary: #d8b4fe;
    --text-muted: #a78bfa;
    --accent-bg: #9333ea;
    --accent-hover: #7e22ce;
    --border-color: rgba(216, 180, 254, 0.25);
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
    --shadow-elevated: 0 24px 60px rgba(147, 51, 234, 0.55);
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    margin: 0;
    padding: 0;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    color: var(--text-primary);
    background: #000000;
}

.bar-button:hover,
.popover-action:hover {
    color: var(--text-secondary);
    background: var(--accent-hover);
}

.dock-button:hover,
.launcher-tile:hover {
    transform: scale(1.1);
}

.dock-button:active,
.launcher-tile:active {
    transform: scale(0.9);
}

.window-controls button:hover {
    background: rgba(255, 255, 255, 0.1);
}
"#;
