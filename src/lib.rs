// Library root
// -----------
// The binary (`main.rs`) parses the command line and hands the chosen
// subcommand to `ui`, which prompts for input and calls `api`.
//
// Module responsibilities:
// - `config`: base URL, token directory and timeout passed to the client.
// - `api`: one HTTP request per operation against the todo service.
// - `token`: persistence of the bearer token between invocations.
// - `prompt`: terminal prompts, or line reads when stdin is piped.
// - `ui`: runs a subcommand and picks the message for its outcome.
// - `cli`: clap definition of the subcommands.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod token;
pub mod ui;
