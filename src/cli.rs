// Command-line definition.
//
// Every subcommand prompts for whatever it needs that was not passed as a
// flag. Passwords are only ever read from the prompt.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "listify", version, about = "Manage your todo list from the terminal")]
pub struct Cli {
    /// Base URL of the todo API
    #[arg(long, env = "LISTIFY_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "LISTIFY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Authenticate user and receive an access token
    Login {
        #[arg(long)]
        email: Option<String>,
    },
    /// Register a new user
    Register {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Retrieve a list of todo tasks
    List,
    /// Create a new todo task
    Create {
        #[arg(long)]
        task: Option<String>,
        #[arg(long)]
        done: Option<bool>,
    },
    /// Update an existing todo task
    Update {
        /// Task ID
        id: Option<i64>,
        #[arg(long)]
        task: Option<String>,
        #[arg(long)]
        done: Option<bool>,
    },
    /// Delete a todo task
    Delete {
        /// Task ID
        id: Option<i64>,
    },
}
