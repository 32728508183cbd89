use std::collections::HashSet;

use chrono::NaiveDate;
use desktop_types::{
    DesktopAction, DesktopConfig, DesktopState, Point, PointerTarget, PopoverKind, ResizeCorner,
    Size, WindowId,
};
use proptest::prelude::*;

fn fresh_state() -> DesktopState {
    let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    DesktopState::new(&DesktopConfig::default(), today)
}

fn launch(state: &mut DesktopState, count: usize) {
    for _ in 0..count {
        state.apply(DesktopAction::ToggleLauncher);
        state.apply(DesktopAction::LaunchApp);
    }
}

#[test]
fn opening_n_windows_yields_n_distinct_ids() {
    let mut state = fresh_state();
    launch(&mut state, 5);

    let windows = state.windows();
    assert_eq!(windows.len(), 5);

    let ids: HashSet<_> = windows.iter().map(|w| w.id).collect();
    assert_eq!(ids.len(), 5);

    for (index, window) in windows.iter().enumerate() {
        assert_eq!(window.position, Point::new(100 * index as i32, 100));
        assert_eq!(window.size, Size::new(400, 300));
        assert!(!window.minimized);
    }
}

#[test]
fn first_launch_from_empty_desktop() {
    let mut state = fresh_state();
    launch(&mut state, 1);

    let windows: Vec<_> = state.windows().iter().cloned().collect();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].id, WindowId(1));
    assert_eq!(windows[0].position, Point::new(0, 100));
    assert_eq!(windows[0].size, Size::new(400, 300));
    assert!(!windows[0].minimized);
}

#[test]
fn closing_removes_exactly_that_window() {
    let mut state = fresh_state();
    launch(&mut state, 3);
    let ids = state.windows().ids();

    state.apply(DesktopAction::CloseWindow(ids[1]));
    assert_eq!(state.windows().ids(), vec![ids[0], ids[2]]);
    assert_eq!(
        state.dock_entries().iter().map(|w| w.id).collect::<Vec<_>>(),
        state.windows().ids()
    );

    let before = state.clone();
    state.apply(DesktopAction::CloseWindow(ids[1]));
    assert_eq!(state, before);
}

#[test]
fn dock_and_canvas_list_the_same_windows() {
    let mut state = fresh_state();
    launch(&mut state, 3);
    let ids = state.windows().ids();

    state.apply(DesktopAction::ToggleMinimized(ids[0]));
    state.apply(DesktopAction::ActivateDockIcon(ids[2]));
    state.apply(DesktopAction::CloseWindow(ids[1]));

    let dock: Vec<_> = state.dock_entries().iter().map(|w| w.id).collect();
    let canvas: Vec<_> = state.canvas_entries().iter().map(|w| w.id).collect();
    assert_eq!(dock, canvas);
    assert_eq!(canvas, vec![ids[0], ids[2]]);
}

#[test]
fn popover_double_toggle_is_identity() {
    let start = fresh_state().reduce(DesktopAction::TogglePopover(PopoverKind::Music));
    for kind in PopoverKind::ALL {
        let after = start
            .clone()
            .reduce(DesktopAction::TogglePopover(kind))
            .reduce(DesktopAction::TogglePopover(kind));
        assert_eq!(after.popovers(), start.popovers());
    }
}

#[test]
fn unrelated_popovers_stay_open() {
    let state = fresh_state()
        .reduce(DesktopAction::TogglePopover(PopoverKind::Notifications))
        .reduce(DesktopAction::TogglePopover(PopoverKind::Calendar));

    assert!(state.is_popover_open(PopoverKind::Notifications));
    assert!(state.is_popover_open(PopoverKind::Calendar));
}

#[test]
fn calendar_wraps_across_years() {
    let mut state = fresh_state();
    // October 2026 -> December 2026 -> January 2027.
    state.apply(DesktopAction::NextMonth);
    state.apply(DesktopAction::NextMonth);
    assert_eq!((state.calendar().year(), state.calendar().month0()), (2026, 11));
    state.apply(DesktopAction::NextMonth);
    assert_eq!((state.calendar().year(), state.calendar().month0()), (2027, 0));
    state.apply(DesktopAction::PrevMonth);
    assert_eq!((state.calendar().year(), state.calendar().month0()), (2026, 11));
}

proptest! {
    #[test]
    fn corner_resize_never_goes_below_minimum(
        start_x in -2_000i32..2_000,
        start_y in -2_000i32..2_000,
        moves in prop::collection::vec((-5_000i32..5_000, -5_000i32..5_000), 1..20),
    ) {
        let mut state = fresh_state();
        launch(&mut state, 1);
        let id = state.windows().ids()[0];

        state.apply(DesktopAction::PointerDown {
            target: PointerTarget::ResizeHandle(id, ResizeCorner::BottomRight),
            point: Point::new(start_x, start_y),
        });
        for (x, y) in &moves {
            state.apply(DesktopAction::PointerMove(Point::new(*x, *y)));
            let size = state.windows().get(id).unwrap().size;
            prop_assert!(size.width >= 200);
            prop_assert!(size.height >= 150);
        }
        let (x, y) = moves[moves.len() - 1];
        state.apply(DesktopAction::PointerUp(Point::new(x, y)));

        let size = state.windows().get(id).unwrap().size;
        prop_assert!(size.width >= 200);
        prop_assert!(size.height >= 150);
        prop_assert!(state.interaction().is_idle());
    }

    #[test]
    fn drag_tracks_pointer_delta(dx in -1_000i32..1_000, dy in -1_000i32..1_000) {
        let mut state = fresh_state();
        launch(&mut state, 1);
        let id = state.windows().ids()[0];
        let origin = state.windows().get(id).unwrap().position;

        state.apply(DesktopAction::PointerDown {
            target: PointerTarget::Header(id),
            point: Point::new(origin.x + 20, origin.y + 10),
        });
        state.apply(DesktopAction::PointerUp(Point::new(origin.x + 20 + dx, origin.y + 10 + dy)));

        prop_assert_eq!(
            state.windows().get(id).unwrap().position,
            Point::new(origin.x + dx, origin.y + dy)
        );
    }
}
