use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::TrellisError;
use crate::meta::PriorityLevel;

/// Canonical ticket statuses, in board order.
///
/// The remote service sends statuses as free-form strings. Only these five
/// get a column of their own; anything else is kept on the ticket but has no
/// status metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    #[serde(rename = "Todo")]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Backlog")]
    Backlog,
    #[serde(rename = "Done")]
    Done,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

/// The five status columns in display order
pub const STATUS_ORDER: [TicketStatus; 5] = [
    TicketStatus::Todo,
    TicketStatus::InProgress,
    TicketStatus::Backlog,
    TicketStatus::Done,
    TicketStatus::Cancelled,
];

impl TicketStatus {
    /// The exact wire spelling of this status
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Todo => "Todo",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Backlog => "Backlog",
            TicketStatus::Done => "Done",
            TicketStatus::Cancelled => "Cancelled",
        }
    }

    /// Exact, case-sensitive match against the canonical spellings.
    pub fn from_label(label: &str) -> Option<Self> {
        STATUS_ORDER.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Priorities are integers, but some producers emit them as whole-number
/// floats (`2.0`). Those are accepted; a fractional priority is an error.
fn deserialize_priority<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPriority {
        Int(i64),
        Float(f64),
    }

    match Option::<RawPriority>::deserialize(deserializer)? {
        None => Ok(0),
        Some(RawPriority::Int(n)) => Ok(n),
        Some(RawPriority::Float(f)) if f.fract() == 0.0 => Ok(f as i64),
        Some(RawPriority::Float(f)) => Err(serde::de::Error::custom(format!(
            "priority must be a whole number, got {f}"
        ))),
    }
}

/// A ticket as delivered by the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(default, deserialize_with = "deserialize_priority")]
    pub priority: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tag: Vec<String>,
}

impl Ticket {
    /// The canonical status, or `None` for statuses outside the board's five
    pub fn canonical_status(&self) -> Option<TicketStatus> {
        TicketStatus::from_label(&self.status)
    }

    pub fn priority_level(&self) -> PriorityLevel {
        PriorityLevel::from_raw(self.priority)
    }
}

/// A user that tickets can be assigned to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub available: bool,
}

/// Everything one fetch delivers. Missing arrays load as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tickets: Vec<Ticket>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<User>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty() && self.users.is_empty()
    }
}

/// Dimension used to split tickets into columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GroupDimension {
    #[default]
    Status,
    User,
    Priority,
}

impl GroupDimension {
    /// All valid string representations of this enum.
    pub const ALL_STRINGS: &[&str] = &["Status", "User", "Priority"];
}

enum_display_fromstr!(
    GroupDimension,
    TrellisError::invalid_group_dimension,
    {
        Status => "Status",
        User => "User",
        Priority => "Priority",
    }
);

/// Dimension used to order tickets within a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderDimension {
    #[default]
    Priority,
    Title,
}

impl OrderDimension {
    /// All valid string representations of this enum.
    pub const ALL_STRINGS: &[&str] = &["Priority", "Title"];
}

enum_display_fromstr!(
    OrderDimension,
    TrellisError::invalid_order_dimension,
    {
        Priority => "Priority",
        Title => "Title",
    }
);

/// The two user-selectable board options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewOptions {
    pub group: GroupDimension,
    pub order: OrderDimension,
}

impl ViewOptions {
    pub fn new(group: GroupDimension, order: OrderDimension) -> Self {
        Self { group, order }
    }
}
