#[macro_use]
mod macros;

pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod meta;
pub mod options;
pub mod paths;
pub mod remote;
pub mod session;
pub mod types;
pub mod utils;

pub use board::{BoardViewModel, CardView, GroupView, compute_board_view_model};
pub use config::Config;
pub use error::{Result, TrellisError};
pub use meta::{ColorToken, PriorityLevel};
pub use options::{FileStorage, MemoryStorage, OptionStorage, OptionStore};
pub use remote::{FileSource, HttpSource, StaticSource, TicketSource};
pub use session::{BoardSession, LoadState};
pub use types::{
    GroupDimension, OrderDimension, Snapshot, Ticket, TicketStatus, User, ViewOptions,
};
