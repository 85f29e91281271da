use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "treino", version, about = "Terminal session runner for coached training plans")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the training sessions assigned to you
    #[command(visible_alias = "a")]
    Agenda,

    /// Session-scoped commands
    #[command(subcommand, visible_alias = "s")]
    Session(SessionCmd),

    /// Show your execution history
    #[command(visible_alias = "h")]
    History {
        /// Only executions from the last N days
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// View or edit treino config
    #[command(subcommand)]
    Config(ConfigCmd),
}

//
// Commands
//

#[derive(Subcommand)]
pub enum SessionCmd {
    /// Run a session interactively
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// Show a session's prescription without running it
    #[command(visible_alias = "i")]
    Show {
        /// Session sequence number or id (defaults to the first suggested)
        session: Option<String>,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Session sequence number or id (defaults to the first suggested)
    pub session: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Show all config keys
    List,

    /// Get the value of a key
    Get { key: String },

    /// Set or override a key
    Set { key: String, val: String },

    /// Remove a key
    Unset { key: String },
}
