//! Mock data builders for creating test tickets and users.
//!
//! This module provides builder patterns for creating board data without
//! going through a loader.

use trellis::types::{Snapshot, Ticket, User};

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create a new ticket builder with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: id.to_string(),
                title: format!("Ticket {id}"),
                status: "Todo".to_string(),
                priority: 0,
                user_id: None,
                tag: vec![],
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = title.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.ticket.status = status.to_string();
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.ticket.priority = priority;
        self
    }

    pub fn user(mut self, user_id: &str) -> Self {
        self.ticket.user_id = Some(user_id.to_string());
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.ticket.tag.push(tag.to_string());
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Create a user record
pub fn mock_user(id: &str, name: &str, available: bool) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        available,
    }
}

/// The two-ticket board used across scenario tests:
/// T1 "Zebra" (Low, Ann Lee) and T2 "Alpha" (Urgent, Bo Kim), both Todo.
pub fn scenario_snapshot() -> Snapshot {
    Snapshot {
        tickets: vec![
            TicketBuilder::new("T1")
                .title("Zebra")
                .priority(1)
                .user("U1")
                .build(),
            TicketBuilder::new("T2")
                .title("Alpha")
                .priority(4)
                .user("U2")
                .tag("bug")
                .build(),
        ],
        users: vec![
            mock_user("U1", "Ann Lee", true),
            mock_user("U2", "Bo Kim", false),
        ],
    }
}

/// Board data in the wire format returned by the ticket service
pub const SAMPLE_RESPONSE: &str = r#"{
  "tickets": [
    {"id": "CAM-1", "title": "Update user profile page UI", "tag": ["Feature request"], "userId": "usr-1", "status": "Todo", "priority": 4},
    {"id": "CAM-2", "title": "Add multi-language support", "tag": ["Feature request"], "userId": "usr-2", "status": "In Progress", "priority": 3},
    {"id": "CAM-3", "title": "Optimize database queries for performance", "tag": ["Feature request"], "userId": "usr-2", "status": "In Progress", "priority": 1},
    {"id": "CAM-4", "title": "Implement email notification system", "tag": ["Feature request"], "userId": "usr-1", "status": "In Progress", "priority": 3},
    {"id": "CAM-5", "title": "Enhance search functionality", "tag": ["Feature request"], "userId": "usr-5", "status": "In Progress", "priority": 0},
    {"id": "CAM-6", "title": "Third-party payment gateway", "tag": ["Feature request"], "userId": "usr-2", "status": "Todo", "priority": 1},
    {"id": "CAM-7", "title": "Create onboarding tutorial for new users", "tag": ["Feature request"], "userId": "usr-1", "status": "Backlog", "priority": 2}
  ],
  "users": [
    {"id": "usr-1", "name": "Anoop sharma", "available": false},
    {"id": "usr-2", "name": "Yogesh", "available": true},
    {"id": "usr-5", "name": "Suresh", "available": true}
  ]
}"#;
