use chrono::NaiveDate;
use desktop_types::{CalendarCell, CalendarCursor, DesktopAction, PopoverKind};
use dioxus::prelude::*;

use super::popovers::{popover_anchor, PopoverPanel};

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Flattened month grid: one entry per slot, blanks padded out to whole weeks.
fn month_cells(cursor: &CalendarCursor) -> Vec<(usize, Option<u32>)> {
    cursor
        .weeks()
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(slot, cell)| match cell {
            CalendarCell::Blank => (slot, None),
            CalendarCell::Day(day) => (slot, Some(day)),
        })
        .collect()
}

#[component]
pub fn CalendarPopover(
    cursor: CalendarCursor,
    today: NaiveDate,
    on_action: Callback<DesktopAction>,
) -> Element {
    let label = cursor.label();
    let cells = month_cells(&cursor);

    rsx! {
        PopoverPanel {
            title: "Calendar",
            anchor: popover_anchor(PopoverKind::Calendar),

            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 0.5rem;",
                button {
                    class: "popover-action",
                    style: "background: transparent; color: var(--text-primary); border: none; border-radius: var(--radius-sm); cursor: pointer; font-size: 1.25rem; padding: 0 0.5rem;",
                    "aria-label": "Previous month",
                    onclick: move |_| on_action.call(DesktopAction::PrevMonth),
                    "‹"
                }
                span { style: "font-weight: 500;", "{label}" }
                button {
                    class: "popover-action",
                    style: "background: transparent; color: var(--text-primary); border: none; border-radius: var(--radius-sm); cursor: pointer; font-size: 1.25rem; padding: 0 0.5rem;",
                    "aria-label": "Next month",
                    onclick: move |_| on_action.call(DesktopAction::NextMonth),
                    "›"
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(7, 2rem); gap: 0.25rem; text-align: center; font-size: 0.8rem;",

                for name in WEEKDAYS {
                    span { key: "{name}", style: "color: var(--text-muted);", "{name}" }
                }

                for (slot, day) in cells {
                    span {
                        key: "{slot}",
                        style: if day.is_some_and(|day| cursor.is_today(day, today)) {
                            "padding: 0.25rem 0; border-radius: var(--radius-sm); background: var(--accent-bg); font-weight: 600;"
                        } else {
                            "padding: 0.25rem 0; border-radius: var(--radius-sm);"
                        },
                        if let Some(day) = day {
                            "{day}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_fill_whole_weeks() {
        let cells = month_cells(&CalendarCursor::new(2026, 1));
        assert_eq!(cells.len() % 7, 0);
        assert_eq!(cells.iter().filter(|(_, day)| day.is_some()).count(), 28);
    }

    #[test]
    fn leading_blanks_precede_first_day() {
        // August 2026 starts on a Saturday.
        let cells = month_cells(&CalendarCursor::new(2026, 7));
        assert!(cells[..6].iter().all(|(_, day)| day.is_none()));
        assert_eq!(cells[6].1, Some(1));
    }
}
