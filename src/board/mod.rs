//! Board derivation: grouping, ordering and view assembly.
//!
//! Everything in here is a pure function of the loaded tickets, users and
//! the current [`ViewOptions`](crate::types::ViewOptions). Nothing is cached
//! between calls; a new view model is computed for every render.

pub mod group;
pub mod model;
pub mod order;

pub use group::{BucketSource, GroupBucket, group};
pub use model::{
    BoardViewModel, CardDetail, CardView, EMPTY_GROUP_PLACEHOLDER, GroupBody, GroupView,
    HeaderBadge, OwnerBadge, PriorityBadge, StatusBadge, TITLE_MAX_CHARS, UserIndex, assemble,
    compute_board_view_model,
};
pub use order::{compare_titles, order};
