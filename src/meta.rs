//! Static display metadata for priorities and statuses.
//!
//! Glyph values are symbolic references; the renderer decides how a glyph is
//! drawn. Color tokens are likewise abstract so the terminal renderer and the
//! JSON output can both use them.

use serde::Serialize;

use crate::types::TicketStatus;

/// Abstract color token attached to badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Default,
    Dimmed,
    Red,
    Orange,
    Yellow,
    Blue,
    Green,
    Gray,
}

/// Priority bucket derived from the raw priority integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PriorityLevel {
    Urgent,
    High,
    Medium,
    Low,
    NoPriority,
    /// Sentinel for anything outside 0-4
    Unknown,
}

impl PriorityLevel {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            4 => PriorityLevel::Urgent,
            3 => PriorityLevel::High,
            2 => PriorityLevel::Medium,
            1 => PriorityLevel::Low,
            0 => PriorityLevel::NoPriority,
            _ => PriorityLevel::Unknown,
        }
    }

    pub fn meta(&self) -> &'static PriorityMeta {
        match self {
            PriorityLevel::Urgent => &PRIORITY_META[0],
            PriorityLevel::High => &PRIORITY_META[1],
            PriorityLevel::Medium => &PRIORITY_META[2],
            PriorityLevel::Low => &PRIORITY_META[3],
            PriorityLevel::NoPriority => &PRIORITY_META[4],
            PriorityLevel::Unknown => &UNKNOWN_PRIORITY,
        }
    }

    pub fn label(&self) -> &'static str {
        self.meta().label
    }

    /// Sort rank, lower sorts first
    pub fn rank(&self) -> u8 {
        self.meta().rank
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityMeta {
    pub label: &'static str,
    pub rank: u8,
    pub glyph: &'static str,
    pub color: ColorToken,
}

/// Known priorities, most urgent first
pub const PRIORITY_META: [PriorityMeta; 5] = [
    PriorityMeta {
        label: "Urgent",
        rank: 1,
        glyph: "priority-urgent",
        color: ColorToken::Red,
    },
    PriorityMeta {
        label: "High",
        rank: 2,
        glyph: "priority-high",
        color: ColorToken::Default,
    },
    PriorityMeta {
        label: "Medium",
        rank: 3,
        glyph: "priority-medium",
        color: ColorToken::Default,
    },
    PriorityMeta {
        label: "Low",
        rank: 4,
        glyph: "priority-low",
        color: ColorToken::Default,
    },
    PriorityMeta {
        label: "No Priority",
        rank: 5,
        glyph: "priority-none",
        color: ColorToken::Dimmed,
    },
];

pub const UNKNOWN_PRIORITY: PriorityMeta = PriorityMeta {
    label: "Unknown",
    rank: 6,
    glyph: "priority-unknown",
    color: ColorToken::Dimmed,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMeta {
    pub glyph: &'static str,
    pub color: ColorToken,
}

pub fn status_meta(status: TicketStatus) -> StatusMeta {
    match status {
        TicketStatus::Todo => StatusMeta {
            glyph: "status-todo",
            color: ColorToken::Gray,
        },
        TicketStatus::InProgress => StatusMeta {
            glyph: "status-in-progress",
            color: ColorToken::Yellow,
        },
        TicketStatus::Backlog => StatusMeta {
            glyph: "status-backlog",
            color: ColorToken::Orange,
        },
        TicketStatus::Done => StatusMeta {
            glyph: "status-done",
            color: ColorToken::Blue,
        },
        TicketStatus::Cancelled => StatusMeta {
            glyph: "status-cancelled",
            color: ColorToken::Dimmed,
        },
    }
}

/// Metadata for a raw status string; `None` outside the canonical five.
pub fn status_meta_for(status: &str) -> Option<StatusMeta> {
    TicketStatus::from_label(status).map(status_meta)
}
