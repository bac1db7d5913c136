use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::types::{GroupDimension, OrderDimension};

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Grouped, sorted ticket board")]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch tickets and render the board
    #[command(visible_alias = "b")]
    Board {
        /// Group by: Status, User, Priority (case-insensitive, not persisted)
        #[arg(short, long, value_parser = parse_group)]
        group: Option<GroupDimension>,

        /// Order by: Priority, Title (case-insensitive, not persisted)
        #[arg(short, long, value_parser = parse_order)]
        order: Option<OrderDimension>,

        /// Read board data from a JSON file instead of the service
        #[arg(long, value_name = "PATH")]
        from_file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Persist the grouping dimension
    Group {
        /// One of: Status, User, Priority
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Persist the ordering dimension
    Order {
        /// One of: Priority, Title
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the persisted view options
    Options {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read a single value
    Get {
        /// One of: api_url, timeout
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a single value
    Set {
        /// One of: api_url, timeout
        key: String,
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            BoardArgs, cmd_board, cmd_config_get, cmd_config_set, cmd_config_show, cmd_group,
            cmd_options, cmd_order,
        };

        if self.no_color {
            owo_colors::set_override(false);
        }

        match self.command {
            Commands::Board {
                group,
                order,
                from_file,
                json,
            } => {
                cmd_board(BoardArgs {
                    group,
                    order,
                    from_file,
                    json,
                })
                .await
            }
            Commands::Group { value, json } => cmd_group(&value, json),
            Commands::Order { value, json } => cmd_order(&value, json),
            Commands::Options { json } => cmd_options(json),
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Generic validation helper for parsing values with a standard error message format.
fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_group(s: &str) -> Result<GroupDimension, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "grouping",
        GroupDimension::ALL_STRINGS,
    )
}

fn parse_order(s: &str) -> Result<OrderDimension, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "ordering",
        OrderDimension::ALL_STRINGS,
    )
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "trellis", &mut io::stdout());
}
