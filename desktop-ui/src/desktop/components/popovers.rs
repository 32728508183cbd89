use desktop_types::PopoverKind;
use dioxus::prelude::*;

/// Fixed-position anchor for each panel, next to the control that opens it.
///
/// Dock panels follow the button order (music, calendar, voice) from left to
/// right, so any combination of them can be open without overlapping.
pub fn popover_anchor(kind: PopoverKind) -> &'static str {
    match kind {
        PopoverKind::Notifications => "top: 4rem; right: 4rem;",
        PopoverKind::Power => "top: 4rem; right: 1rem;",
        PopoverKind::Music => "bottom: 6rem; right: calc(50% + 10rem);",
        PopoverKind::Calendar => "bottom: 6rem; left: 50%; transform: translateX(-50%);",
        PopoverKind::VoiceAssistant => "bottom: 6rem; left: calc(50% + 10rem);",
    }
}

/// Shared chrome for the floating panels anchored to the bars.
#[component]
pub fn PopoverPanel(title: String, anchor: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "popover",
            role: "dialog",
            "aria-label": "{title}",
            style: "position: fixed; {anchor} z-index: 2500; min-width: 240px; padding: 1rem; background: var(--panel-bg); color: var(--text-primary); border: 1px solid var(--border-color); border-radius: var(--radius-lg); backdrop-filter: blur(20px); box-shadow: var(--shadow-lg);",

            div {
                style: "font-weight: 600; margin-bottom: 0.75rem;",
                "{title}"
            }
            {children}
        }
    }
}

#[component]
pub fn NotificationsPopover() -> Element {
    rsx! {
        PopoverPanel {
            title: "Notifications",
            anchor: popover_anchor(PopoverKind::Notifications),
            p {
                style: "margin: 0; color: var(--text-muted); font-size: 0.875rem;",
                "No new notifications."
            }
        }
    }
}

#[component]
pub fn PowerPopover() -> Element {
    rsx! {
        PopoverPanel {
            title: "Power",
            anchor: popover_anchor(PopoverKind::Power),
            div {
                style: "display: flex; flex-direction: column; gap: 0.25rem;",
                for label in ["Sleep", "Restart", "Shut Down"] {
                    button {
                        key: "{label}",
                        class: "popover-action",
                        style: "text-align: left; padding: 0.5rem 0.75rem; background: transparent; color: var(--text-primary); border: none; border-radius: var(--radius-md); cursor: pointer;",
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_panel_has_its_own_anchor() {
        let anchors: HashSet<_> = PopoverKind::ALL
            .iter()
            .map(|kind| popover_anchor(*kind))
            .collect();
        assert_eq!(anchors.len(), PopoverKind::ALL.len());
    }

    #[test]
    fn dock_panels_sit_left_center_right() {
        assert!(popover_anchor(PopoverKind::Music).contains("right: calc(50% +"));
        assert!(popover_anchor(PopoverKind::Calendar).contains("translateX(-50%)"));
        assert!(popover_anchor(PopoverKind::VoiceAssistant).contains("left: calc(50% +"));
    }
}
