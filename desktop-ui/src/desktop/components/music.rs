use desktop_types::{DesktopAction, MusicPlayer, PopoverKind};
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use super::popovers::{popover_anchor, PopoverPanel};

/// Parse a range input value; anything unreadable leaves the volume alone.
fn parse_volume(raw: &str) -> Option<u8> {
    raw.trim().parse::<u8>().ok().map(|volume| volume.min(100))
}

#[component]
pub fn MusicPopover(
    player: MusicPlayer,
    album_art: String,
    on_action: Callback<DesktopAction>,
) -> Element {
    let mut art_failed = use_signal(|| false);
    let (title, artist) = player
        .current_track()
        .map(|track| (track.title.clone(), track.artist.clone()))
        .unwrap_or_else(|| ("Nothing queued".to_string(), String::new()));
    let volume = player.volume();

    rsx! {
        PopoverPanel {
            title: "Music",
            anchor: popover_anchor(PopoverKind::Music),

            div {
                style: "display: flex; gap: 0.75rem; align-items: center;",

                if art_failed() {
                    div {
                        class: "album-art placeholder",
                        style: "width: 64px; height: 64px; display: flex; align-items: center; justify-content: center; background: var(--tile-bg); border-radius: var(--radius-md); font-size: 1.75rem;",
                        "♪"
                    }
                } else {
                    img {
                        class: "album-art",
                        src: "{album_art}",
                        alt: "Album art",
                        style: "width: 64px; height: 64px; object-fit: cover; border-radius: var(--radius-md);",
                        onerror: {
                            let album_art = album_art.clone();
                            move |_| {
                                warn!(path = %album_art, "Album art failed to load");
                                art_failed.set(true);
                            }
                        },
                    }
                }

                div {
                    style: "display: flex; flex-direction: column; min-width: 0;",
                    span { style: "font-weight: 600;", "{title}" }
                    span { style: "color: var(--text-muted); font-size: 0.85rem;", "{artist}" }
                }
            }

            div {
                style: "display: flex; justify-content: center; gap: 0.75rem; margin: 0.75rem 0;",
                button {
                    class: "popover-action",
                    style: "width: 40px; height: 40px; background: var(--accent-bg); color: var(--text-primary); border: none; border-radius: 50%; cursor: pointer; font-size: 1rem;",
                    "aria-label": if player.is_playing() { "Pause" } else { "Play" },
                    onclick: move |_| on_action.call(DesktopAction::TogglePlayback),
                    if player.is_playing() { "⏸" } else { "▶" }
                }
                button {
                    class: "popover-action",
                    style: "width: 40px; height: 40px; background: transparent; color: var(--text-primary); border: 1px solid var(--border-color); border-radius: 50%; cursor: pointer; font-size: 1rem;",
                    "aria-label": "Next track",
                    onclick: move |_| on_action.call(DesktopAction::SkipTrack),
                    "⏭"
                }
            }

            label {
                style: "display: flex; align-items: center; gap: 0.5rem; font-size: 0.85rem; color: var(--text-secondary);",
                "🔊"
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: "{volume}",
                    style: "flex: 1;",
                    oninput: move |e| {
                        if let Some(volume) = parse_volume(&e.value()) {
                            on_action.call(DesktopAction::SetVolume(volume));
                        }
                    },
                }
            }
        }
    }
}
