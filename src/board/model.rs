//! Board view model types and the assembler that builds them
//!
//! Grouping and ordering produce borrowed buckets; this module turns them
//! into owned, display-ready records a renderer can consume without knowing
//! anything about the domain tables.

use std::collections::HashMap;

use serde::Serialize;

use crate::board::group::{BucketSource, GroupBucket, group};
use crate::board::order::order;
use crate::meta::{ColorToken, PriorityLevel, status_meta, status_meta_for};
use crate::types::{GroupDimension, Snapshot, Ticket, User, ViewOptions};
use crate::utils::{initials, truncate_with_ellipsis};

/// Titles longer than this are cut and suffixed with an ellipsis
pub const TITLE_MAX_CHARS: usize = 50;

/// Text shown in place of cards for an empty group
pub const EMPTY_GROUP_PLACEHOLDER: &str = "No tickets";

/// Users by id. The first user loaded with a given id wins.
#[derive(Debug, Clone, Default)]
pub struct UserIndex<'a> {
    by_id: HashMap<&'a str, &'a User>,
}

impl<'a> UserIndex<'a> {
    pub fn new(users: &'a [User]) -> Self {
        let mut by_id = HashMap::with_capacity(users.len());
        for user in users {
            by_id.entry(user.id.as_str()).or_insert(user);
        }
        Self { by_id }
    }

    pub fn owner_of(&self, ticket: &Ticket) -> Option<&'a User> {
        ticket
            .user_id
            .as_deref()
            .and_then(|id| self.by_id.get(id).copied())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityBadge {
    pub label: &'static str,
    pub glyph: &'static str,
    pub color: ColorToken,
}

impl PriorityBadge {
    pub fn new(level: PriorityLevel) -> Self {
        let meta = level.meta();
        Self {
            label: meta.label,
            glyph: meta.glyph,
            color: meta.color,
        }
    }
}

/// Status label with metadata; glyph and color are absent for statuses
/// outside the canonical five.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: String,
    pub glyph: Option<&'static str>,
    pub color: Option<ColorToken>,
}

impl StatusBadge {
    pub fn new(status: &str) -> Self {
        let meta = status_meta_for(status);
        Self {
            label: status.to_string(),
            glyph: meta.map(|m| m.glyph),
            color: meta.map(|m| m.color),
        }
    }
}

/// Avatar block for the ticket's owner
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OwnerBadge {
    pub initials: String,
    pub available: bool,
}

impl OwnerBadge {
    pub fn new(owner: Option<&User>) -> Self {
        match owner {
            Some(user) => Self {
                initials: initials(&user.name),
                available: user.available,
            },
            None => Self::default(),
        }
    }
}

/// Secondary card fields, which depend on how the board is grouped.
///
/// Whatever the column already says is left off the card: status columns
/// show priority, priority columns show status, and user columns drop the
/// owner avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "group", rename_all = "snake_case")]
pub enum CardDetail {
    ByStatus {
        priority: PriorityBadge,
        owner: OwnerBadge,
    },
    ByUser {
        status: StatusBadge,
        priority: PriorityBadge,
    },
    ByPriority {
        status: StatusBadge,
        owner: OwnerBadge,
    },
}

/// View model for a single ticket card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    /// Title, truncated to [`TITLE_MAX_CHARS`]
    pub title: String,
    pub tags: Vec<String>,
    pub detail: CardDetail,
}

impl CardView {
    pub fn new(ticket: &Ticket, dimension: GroupDimension, users: &UserIndex<'_>) -> Self {
        let detail = match dimension {
            GroupDimension::Status => CardDetail::ByStatus {
                priority: PriorityBadge::new(ticket.priority_level()),
                owner: OwnerBadge::new(users.owner_of(ticket)),
            },
            GroupDimension::User => CardDetail::ByUser {
                status: StatusBadge::new(&ticket.status),
                priority: PriorityBadge::new(ticket.priority_level()),
            },
            GroupDimension::Priority => CardDetail::ByPriority {
                status: StatusBadge::new(&ticket.status),
                owner: OwnerBadge::new(users.owner_of(ticket)),
            },
        };

        Self {
            id: ticket.id.clone(),
            title: truncate_with_ellipsis(&ticket.title, TITLE_MAX_CHARS),
            tags: ticket.tag.clone(),
            detail,
        }
    }

    /// Tags joined for a single line of text
    pub fn tag_text(&self) -> String {
        self.tags.join(", ")
    }

    pub fn owner(&self) -> Option<&OwnerBadge> {
        match &self.detail {
            CardDetail::ByStatus { owner, .. } | CardDetail::ByPriority { owner, .. } => {
                Some(owner)
            }
            CardDetail::ByUser { .. } => None,
        }
    }
}

/// Badge drawn next to a column header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeaderBadge {
    Status {
        glyph: &'static str,
        color: ColorToken,
    },
    User {
        initials: String,
        available: bool,
    },
    Priority {
        glyph: &'static str,
        color: ColorToken,
    },
}

impl HeaderBadge {
    fn from_source(source: BucketSource<'_>) -> Self {
        match source {
            BucketSource::Status(status) => {
                let meta = status_meta(status);
                HeaderBadge::Status {
                    glyph: meta.glyph,
                    color: meta.color,
                }
            }
            BucketSource::User(user) => HeaderBadge::User {
                initials: initials(&user.name),
                available: user.available,
            },
            BucketSource::Priority(level) => {
                let meta = level.meta();
                HeaderBadge::Priority {
                    glyph: meta.glyph,
                    color: meta.color,
                }
            }
        }
    }
}

/// Column contents: a placeholder when empty, cards otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupBody {
    Placeholder { text: &'static str },
    Cards { cards: Vec<CardView> },
}

/// View model for a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub header: String,
    pub count: usize,
    pub badge: HeaderBadge,
    pub body: GroupBody,
}

impl GroupView {
    /// Cards in display order; empty for placeholder columns
    pub fn cards(&self) -> &[CardView] {
        match &self.body {
            GroupBody::Cards { cards } => cards.as_slice(),
            GroupBody::Placeholder { .. } => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, GroupBody::Placeholder { .. })
    }
}

/// Computed view model for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardViewModel {
    pub options: ViewOptions,
    pub groups: Vec<GroupView>,
    /// Number of tickets loaded
    pub total_tickets: usize,
    /// Number of cards placed on the board
    pub shown_tickets: usize,
    /// Set when the load failed and the board fell back to empty data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

impl BoardViewModel {
    pub fn group(&self, header: &str) -> Option<&GroupView> {
        self.groups.iter().find(|g| g.header == header)
    }
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Sort a bucket's members and build its column view.
pub fn assemble(bucket: &GroupBucket<'_>, options: ViewOptions, users: &UserIndex<'_>) -> GroupView {
    let body = if bucket.is_empty() {
        GroupBody::Placeholder {
            text: EMPTY_GROUP_PLACEHOLDER,
        }
    } else {
        let cards = order(&bucket.members, options.order)
            .into_iter()
            .map(|ticket| CardView::new(ticket, options.group, users))
            .collect();
        GroupBody::Cards { cards }
    };

    GroupView {
        header: bucket.key.clone(),
        count: bucket.len(),
        badge: HeaderBadge::from_source(bucket.source),
        body,
    }
}

/// Pure function: compute the whole board from loaded data and options.
pub fn compute_board_view_model(
    snapshot: &Snapshot,
    options: ViewOptions,
    load_error: Option<String>,
) -> BoardViewModel {
    let users = UserIndex::new(&snapshot.users);
    let groups: Vec<GroupView> = group(&snapshot.tickets, &snapshot.users, options.group)
        .iter()
        .map(|bucket| assemble(bucket, options, &users))
        .collect();
    let shown_tickets = groups.iter().map(|g| g.count).sum();

    BoardViewModel {
        options,
        groups,
        total_tickets: snapshot.tickets.len(),
        shown_tickets,
        load_error,
    }
}
