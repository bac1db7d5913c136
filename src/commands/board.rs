//! Board command (`trellis board`)
//!
//! Loads the board data once, applies the persisted options (with optional
//! per-invocation overrides) and prints the result.

use std::path::PathBuf;

use crate::config::Config;
use crate::display::{board_to_json, render_board};
use crate::error::Result;
use crate::options::{FileStorage, OptionStore};
use crate::remote::{FileSource, HttpSource};
use crate::session::BoardSession;
use crate::types::{GroupDimension, OrderDimension, ViewOptions};

pub struct BoardArgs {
    pub group: Option<GroupDimension>,
    pub order: Option<OrderDimension>,
    pub from_file: Option<PathBuf>,
    pub json: bool,
}

/// Fetch tickets and render the board
pub async fn cmd_board(args: BoardArgs) -> Result<()> {
    let store = OptionStore::open(FileStorage::at_default_path());
    let mut session = BoardSession::new(store);

    match &args.from_file {
        Some(path) => {
            session.load_from(&FileSource::new(path)).await;
        }
        None => {
            let config = Config::load()?;
            let source = HttpSource::from_config(&config)?;
            session.load_from(&source).await;
        }
    }

    let current = session.options();
    let options = ViewOptions::new(
        args.group.unwrap_or(current.group),
        args.order.unwrap_or(current.order),
    );
    let vm = session.view_with(options);

    if args.json {
        println!("{}", board_to_json(&vm)?);
    } else {
        print!("{}", render_board(&vm, true));
    }
    Ok(())
}
