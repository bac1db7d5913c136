//! Partition tickets into named buckets along a group dimension.

use std::collections::HashSet;

use crate::meta::PriorityLevel;
use crate::types::{GroupDimension, STATUS_ORDER, Ticket, TicketStatus, User};

/// What a bucket was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketSource<'a> {
    Status(TicketStatus),
    User(&'a User),
    Priority(PriorityLevel),
}

/// A named group of tickets, in bucket order but not yet sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBucket<'a> {
    pub key: String,
    pub source: BucketSource<'a>,
    pub members: Vec<&'a Ticket>,
}

impl<'a> GroupBucket<'a> {
    fn new(key: impl Into<String>, source: BucketSource<'a>) -> Self {
        Self {
            key: key.into(),
            source,
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Group tickets by the given dimension.
///
/// - `Status`: always the five canonical columns in order, empty or not.
///   Tickets with any other status are left out.
/// - `User`: one bucket per user in load order, keyed by display name.
/// - `Priority`: buckets appear in the order their label is first seen.
pub fn group<'a>(
    tickets: &'a [Ticket],
    users: &'a [User],
    dimension: GroupDimension,
) -> Vec<GroupBucket<'a>> {
    match dimension {
        GroupDimension::Status => group_by_status(tickets),
        GroupDimension::User => group_by_user(tickets, users),
        GroupDimension::Priority => group_by_priority(tickets),
    }
}

fn group_by_status(tickets: &[Ticket]) -> Vec<GroupBucket<'_>> {
    let mut buckets: Vec<GroupBucket<'_>> = STATUS_ORDER
        .iter()
        .map(|&status| GroupBucket::new(status.label(), BucketSource::Status(status)))
        .collect();

    for ticket in tickets {
        match ticket.canonical_status() {
            Some(status) => {
                let idx = STATUS_ORDER
                    .iter()
                    .position(|s| *s == status)
                    .unwrap_or_default();
                buckets[idx].members.push(ticket);
            }
            None => {
                tracing::debug!(
                    ticket = %ticket.id,
                    status = %ticket.status,
                    "ticket has no canonical status, leaving it off the status board"
                );
            }
        }
    }

    buckets
}

/// Users sharing a display name share one bucket, placed where the first of
/// them appears. Tickets of every user with that name are kept.
///
/// A repeated user id owns no tickets; they stay with the first user loaded
/// under that id, so every ticket lands in at most one bucket.
fn group_by_user<'a>(tickets: &'a [Ticket], users: &'a [User]) -> Vec<GroupBucket<'a>> {
    let mut buckets: Vec<GroupBucket<'a>> = Vec::with_capacity(users.len());
    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(users.len());

    for user in users {
        let idx = match buckets.iter().position(|b| b.key == user.name) {
            Some(idx) => {
                tracing::debug!(
                    user = %user.id,
                    name = %user.name,
                    "display name already used by another user, merging columns"
                );
                idx
            }
            None => {
                buckets.push(GroupBucket::new(user.name.clone(), BucketSource::User(user)));
                buckets.len() - 1
            }
        };

        if !seen_ids.insert(user.id.as_str()) {
            tracing::debug!(user = %user.id, "duplicate user id, tickets stay with the first");
            continue;
        }

        buckets[idx].members.extend(
            tickets
                .iter()
                .filter(|t| t.user_id.as_deref() == Some(user.id.as_str())),
        );
    }

    buckets
}

fn group_by_priority(tickets: &[Ticket]) -> Vec<GroupBucket<'_>> {
    let mut buckets: Vec<GroupBucket<'_>> = Vec::new();

    for ticket in tickets {
        let level = ticket.priority_level();
        match buckets
            .iter_mut()
            .find(|b| b.source == BucketSource::Priority(level))
        {
            Some(bucket) => bucket.members.push(ticket),
            None => {
                let mut bucket = GroupBucket::new(level.label(), BucketSource::Priority(level));
                bucket.members.push(ticket);
                buckets.push(bucket);
            }
        }
    }

    buckets
}
