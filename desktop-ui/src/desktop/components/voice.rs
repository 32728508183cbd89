use desktop_types::{DesktopAction, PopoverKind};
use dioxus::prelude::*;

use super::popovers::{popover_anchor, PopoverPanel};

#[component]
pub fn VoicePopover(draft: String, listening: bool, on_action: Callback<DesktopAction>) -> Element {
    let status = if listening { "Listening…" } else { "Tap the mic or type a request" };

    rsx! {
        PopoverPanel {
            title: "Voice Assistant",
            anchor: popover_anchor(PopoverKind::VoiceAssistant),

            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 0.75rem;",

                button {
                    class: if listening { "popover-action listening" } else { "popover-action" },
                    style: if listening {
                        "width: 56px; height: 56px; background: var(--accent-bg); color: var(--text-primary); border: none; border-radius: 50%; cursor: pointer; font-size: 1.5rem; box-shadow: var(--shadow-elevated);"
                    } else {
                        "width: 56px; height: 56px; background: transparent; color: var(--text-primary); border: 1px solid var(--border-color); border-radius: 50%; cursor: pointer; font-size: 1.5rem;"
                    },
                    "aria-label": "Toggle listening",
                    "aria-pressed": if listening { "true" } else { "false" },
                    onclick: move |_| on_action.call(DesktopAction::ToggleListening),
                    "🎙"
                }

                span { style: "color: var(--text-muted); font-size: 0.85rem;", "{status}" }

                input {
                    r#type: "text",
                    placeholder: "Ask something…",
                    value: "{draft}",
                    style: "width: 100%; padding: 0.5rem 0.75rem; background: rgba(0, 0, 0, 0.3); color: var(--text-primary); border: 1px solid var(--border-color); border-radius: var(--radius-md); outline: none;",
                    oninput: move |e| on_action.call(DesktopAction::SetVoiceDraft(e.value())),
                }
            }
        }
    }
}
