//! A board session: loaded data plus the persisted options.
//!
//! The session starts with empty collections, receives exactly one load
//! result, and recomputes the whole view model whenever it is asked to
//! render or an option changes. All mutation goes through `&mut self`, so two
//! recomputations can never interleave.

use crate::board::{BoardViewModel, compute_board_view_model};
use crate::error::Result;
use crate::options::{OptionStorage, OptionStore};
use crate::remote::TicketSource;
use crate::types::{GroupDimension, OrderDimension, Snapshot, ViewOptions};

/// Where the session is in its one-shot load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    /// The load failed; the session holds empty collections
    Failed(String),
}

#[derive(Debug)]
pub struct BoardSession<S: OptionStorage> {
    options: OptionStore<S>,
    snapshot: Snapshot,
    load_state: LoadState,
}

impl<S: OptionStorage> BoardSession<S> {
    pub fn new(options: OptionStore<S>) -> Self {
        Self {
            options,
            snapshot: Snapshot::default(),
            load_state: LoadState::Pending,
        }
    }

    /// Fetch from `source` and apply the result.
    ///
    /// Failures are not returned: they are logged, recorded in the load
    /// state, and the board renders from empty collections.
    pub async fn load_from<T: TicketSource>(&mut self, source: &T) -> &LoadState {
        let result = source.fetch().await;
        if let Err(e) = &result {
            tracing::warn!(source = %source.describe(), "failed to load board data: {e}");
        }
        self.apply_load(result)
    }

    /// Replace the loaded data with a fetch result.
    pub fn apply_load(&mut self, result: Result<Snapshot>) -> &LoadState {
        match result {
            Ok(snapshot) => {
                tracing::debug!(
                    tickets = snapshot.tickets.len(),
                    users = snapshot.users.len(),
                    "board data loaded"
                );
                self.snapshot = snapshot;
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                self.snapshot = Snapshot::default();
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
        &self.load_state
    }

    /// Render the board with the current options.
    pub fn view(&self) -> BoardViewModel {
        self.view_with(self.options.current())
    }

    /// Render the board with explicit options, leaving the persisted ones alone.
    pub fn view_with(&self, options: ViewOptions) -> BoardViewModel {
        compute_board_view_model(&self.snapshot, options, self.load_error())
    }

    pub fn set_group(&mut self, group: GroupDimension) -> Result<BoardViewModel> {
        self.options.set_group(group)?;
        Ok(self.view())
    }

    pub fn set_order(&mut self, order: OrderDimension) -> Result<BoardViewModel> {
        self.options.set_order(order)?;
        Ok(self.view())
    }

    /// Set the grouping from raw input; illegal values leave the session untouched.
    pub fn set_group_str(&mut self, value: &str) -> Result<BoardViewModel> {
        self.options.set_group_str(value)?;
        Ok(self.view())
    }

    pub fn set_order_str(&mut self, value: &str) -> Result<BoardViewModel> {
        self.options.set_order_str(value)?;
        Ok(self.view())
    }

    pub fn options(&self) -> ViewOptions {
        self.options.current()
    }

    pub fn option_store(&self) -> &OptionStore<S> {
        &self.options
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    fn load_error(&self) -> Option<String> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message.clone()),
            LoadState::Pending | LoadState::Loaded => None,
        }
    }

    pub fn into_option_store(self) -> OptionStore<S> {
        self.options
    }
}
