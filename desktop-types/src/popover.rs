use serde::{Deserialize, Serialize};

const KIND_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopoverKind {
    Notifications,
    Power,
    Calendar,
    Music,
    VoiceAssistant,
}

impl PopoverKind {
    pub const ALL: [PopoverKind; KIND_COUNT] = [
        PopoverKind::Notifications,
        PopoverKind::Power,
        PopoverKind::Calendar,
        PopoverKind::Music,
        PopoverKind::VoiceAssistant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PopoverKind::Notifications => "notifications",
            PopoverKind::Power => "power",
            PopoverKind::Calendar => "calendar",
            PopoverKind::Music => "music",
            PopoverKind::VoiceAssistant => "voice_assistant",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Whether opening one popover closes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopoverPolicy {
    /// Any number may be open at once.
    #[default]
    Independent,
    /// At most one is open.
    Exclusive,
}

/// One visibility flag per popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopoverSet {
    open: [bool; KIND_COUNT],
    policy: PopoverPolicy,
}

impl PopoverSet {
    pub fn new(policy: PopoverPolicy) -> Self {
        Self {
            open: [false; KIND_COUNT],
            policy,
        }
    }

    pub fn policy(&self) -> PopoverPolicy {
        self.policy
    }

    pub fn is_open(&self, kind: PopoverKind) -> bool {
        self.open[kind.slot()]
    }

    pub fn open(&mut self, kind: PopoverKind) {
        if self.policy == PopoverPolicy::Exclusive {
            self.open = [false; KIND_COUNT];
        }
        self.open[kind.slot()] = true;
    }

    pub fn close(&mut self, kind: PopoverKind) {
        self.open[kind.slot()] = false;
    }

    pub fn toggle(&mut self, kind: PopoverKind) {
        if self.is_open(kind) {
            self.close(kind);
        } else {
            self.open(kind);
        }
    }

    pub fn close_all(&mut self) {
        self.open = [false; KIND_COUNT];
    }

    pub fn open_kinds(&self) -> Vec<PopoverKind> {
        PopoverKind::ALL
            .into_iter()
            .filter(|kind| self.is_open(*kind))
            .collect()
    }
}
