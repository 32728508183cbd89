use chrono::NaiveDate;

use crate::calendar::CalendarCursor;
use crate::config::DesktopConfig;
use crate::geometry::{Point, Size};
use crate::interaction::{Interaction, PointerTarget};
use crate::media::{MusicPlayer, VoiceAssistant};
use crate::popover::{PopoverKind, PopoverSet};
use crate::window::{AppWindow, WindowCollection, WindowId};

/// Every input the desktop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopAction {
    ToggleLauncher,
    /// A launcher tile was chosen: open a window and hide the launcher.
    LaunchApp,
    CloseWindow(WindowId),
    MoveWindow { id: WindowId, position: Point },
    ResizeWindow { id: WindowId, size: Size },
    ToggleMinimized(WindowId),
    MaximizeWindow(WindowId),
    /// Click on a window's dock icon.
    ActivateDockIcon(WindowId),
    PointerDown { target: PointerTarget, point: Point },
    PointerMove(Point),
    PointerUp(Point),
    TogglePopover(PopoverKind),
    OpenPopover(PopoverKind),
    ClosePopover(PopoverKind),
    CloseAllPopovers,
    PrevMonth,
    NextMonth,
    TogglePlayback,
    SkipTrack,
    SetVolume(u8),
    SetVoiceDraft(String),
    ToggleListening,
}

/// Whole-desktop state. Mutated only through [`DesktopState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    windows: WindowCollection,
    interaction: Interaction,
    popovers: PopoverSet,
    launcher_open: bool,
    calendar: CalendarCursor,
    music: MusicPlayer,
    voice: VoiceAssistant,
}

impl DesktopState {
    pub fn new(config: &DesktopConfig, today: NaiveDate) -> Self {
        Self {
            windows: WindowCollection::new(config.window.clone()),
            interaction: Interaction::Idle,
            popovers: PopoverSet::new(config.popovers.policy),
            launcher_open: false,
            calendar: CalendarCursor::from_date(today),
            music: MusicPlayer::from_config(&config.music),
            voice: VoiceAssistant::default(),
        }
    }

    /// Consume the state and return the next one.
    pub fn reduce(mut self, action: DesktopAction) -> Self {
        self.apply(action);
        self
    }

    pub fn apply(&mut self, action: DesktopAction) {
        tracing::debug!(?action, "Applying desktop action");
        match action {
            DesktopAction::ToggleLauncher => self.launcher_open = !self.launcher_open,
            DesktopAction::LaunchApp => {
                self.windows.open();
                self.launcher_open = false;
            }
            DesktopAction::CloseWindow(id) => {
                self.interaction.release_window(id);
                self.windows.close(id);
            }
            DesktopAction::MoveWindow { id, position } => {
                self.windows.update_position(id, position.x, position.y)
            }
            DesktopAction::ResizeWindow { id, size } => {
                self.windows.update_size(id, size.width, size.height)
            }
            DesktopAction::ToggleMinimized(id) | DesktopAction::ActivateDockIcon(id) => {
                self.interaction.release_window(id);
                self.windows.toggle_minimized(id);
            }
            DesktopAction::MaximizeWindow(id) => self.windows.maximize(id),
            DesktopAction::PointerDown { target, point } => {
                self.interaction.pointer_down(target, point, &self.windows);
            }
            DesktopAction::PointerMove(point) => {
                if let Some(update) = self.interaction.pointer_move(point, &self.windows) {
                    update.apply(&mut self.windows);
                }
            }
            DesktopAction::PointerUp(point) => {
                if let Some(update) = self.interaction.pointer_up(point, &self.windows) {
                    update.apply(&mut self.windows);
                }
            }
            DesktopAction::TogglePopover(kind) => self.popovers.toggle(kind),
            DesktopAction::OpenPopover(kind) => self.popovers.open(kind),
            DesktopAction::ClosePopover(kind) => self.popovers.close(kind),
            DesktopAction::CloseAllPopovers => self.popovers.close_all(),
            DesktopAction::PrevMonth => self.calendar.prev_month(),
            DesktopAction::NextMonth => self.calendar.next_month(),
            DesktopAction::TogglePlayback => self.music.toggle_playback(),
            DesktopAction::SkipTrack => self.music.skip(),
            DesktopAction::SetVolume(volume) => self.music.set_volume(volume),
            DesktopAction::SetVoiceDraft(draft) => self.voice.set_draft(draft),
            DesktopAction::ToggleListening => self.voice.toggle_listening(),
        }
    }

    pub fn windows(&self) -> &WindowCollection {
        &self.windows
    }

    /// Windows listed in the dock: every open window, minimized or not.
    pub fn dock_entries(&self) -> &[AppWindow] {
        self.windows.as_slice()
    }

    /// Windows drawn on the canvas. Minimized ones stay, collapsed to their
    /// title bar, so the canvas and the dock always list the same ids.
    pub fn canvas_entries(&self) -> &[AppWindow] {
        self.windows.as_slice()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Whether the window should render above its siblings.
    pub fn is_elevated(&self, id: WindowId) -> bool {
        self.interaction.target() == Some(id)
    }

    pub fn popovers(&self) -> &PopoverSet {
        &self.popovers
    }

    pub fn is_popover_open(&self, kind: PopoverKind) -> bool {
        self.popovers.is_open(kind)
    }

    pub fn launcher_open(&self) -> bool {
        self.launcher_open
    }

    pub fn calendar(&self) -> &CalendarCursor {
        &self.calendar
    }

    pub fn music(&self) -> &MusicPlayer {
        &self.music
    }

    pub fn voice(&self) -> &VoiceAssistant {
        &self.voice
    }
}
