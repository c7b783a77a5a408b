// UI layer: collects missing fields through a `Prompter`, calls the API
// client behind a spinner and returns the one line describing the outcome.

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::{ApiClient, LoginRequest, RegisterRequest, TodoPayload};
use crate::cli::Command;
use crate::error::ApiError;
use crate::prompt::Prompter;

pub const LOGIN_REQUIRED: &str = "You must be logged in to perform this action.";

/// Run one subcommand to completion and return the message to print. Only
/// prompt I/O failures are returned as errors.
pub fn run(api: &ApiClient, command: Command, prompter: &mut dyn Prompter) -> Result<String> {
    let message = match command {
        Command::Login { email } => {
            let email = prompt_text(prompter, "Email", email)?;
            let password = prompter.password("Password")?;
            let req = LoginRequest { email, password };
            login_message(with_spinner("Logging in...", || api.login(&req)))
        }
        Command::Register { username, email } => {
            let username = prompt_text(prompter, "Username", username)?;
            let email = prompt_text(prompter, "Email", email)?;
            let password = prompter.password("Password")?;
            let req = RegisterRequest { username, email, password };
            register_message(with_spinner("Registering...", || api.register(&req)))
        }
        Command::List => list_message(with_spinner("Fetching todos...", || api.list_todos())),
        Command::Create { task, done } => {
            let todo = prompt_todo(prompter, task, done)?;
            create_message(with_spinner("Creating...", || api.create_todo(&todo)))
        }
        Command::Update { id, task, done } => {
            let id = prompt_id(prompter, id)?;
            let todo = prompt_todo(prompter, task, done)?;
            update_message(with_spinner("Updating...", || api.update_todo(id, &todo)))
        }
        Command::Delete { id } => {
            let id = prompt_id(prompter, id)?;
            delete_message(with_spinner("Deleting...", || api.delete_todo(id)))
        }
    };
    Ok(message)
}

/// Turn an operation result into the line shown to the user. `failure` is
/// used for any rejection by the server.
pub fn report<T>(result: Result<T, ApiError>, failure: &str, on_success: impl FnOnce(T) -> String) -> String {
    match result {
        Ok(value) => on_success(value),
        Err(ApiError::NotLoggedIn) => LOGIN_REQUIRED.into(),
        Err(ApiError::Rejected { .. }) | Err(ApiError::MalformedResponse(_)) => failure.into(),
        Err(e @ ApiError::Storage(_)) => e.to_string(),
        Err(e) => format!("Error: {}", e),
    }
}

/// Register echoes the bare status code instead of a message.
pub fn register_message(result: Result<(), ApiError>) -> String {
    match result {
        Err(ApiError::Rejected { status }) => status.as_u16().to_string(),
        other => report(other, "", |_| "Registration successful.".into()),
    }
}

/// A malformed login response counts as bad credentials.
pub fn login_message(result: Result<String, ApiError>) -> String {
    report(result, "Invalid credentials.", |_| "Login successful.".into())
}

/// The list body is shown as the server sent it.
pub fn list_message(result: Result<String, ApiError>) -> String {
    report(result, "Failed to retrieve todo tasks.", |body| body)
}

pub fn create_message(result: Result<(), ApiError>) -> String {
    report(result, "Failed to create todo task.", |_| "Todo task created successfully.".into())
}

pub fn update_message(result: Result<(), ApiError>) -> String {
    report(result, "Failed to update todo task.", |_| "Todo task updated successfully.".into())
}

pub fn delete_message(result: Result<(), ApiError>) -> String {
    report(result, "Failed to delete todo task.", |_| "Todo task deleted successfully.".into())
}

fn with_spinner<T>(message: &'static str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let out = f();
    spinner.finish_and_clear();
    out
}

fn prompt_text(prompter: &mut dyn Prompter, label: &str, given: Option<String>) -> Result<String> {
    match given {
        Some(value) => Ok(value),
        None => Ok(prompter.text(label)?),
    }
}

fn prompt_id(prompter: &mut dyn Prompter, given: Option<i64>) -> Result<i64> {
    match given {
        Some(id) => Ok(id),
        None => Ok(prompter.id("Task ID")?),
    }
}

fn prompt_todo(prompter: &mut dyn Prompter, task: Option<String>, done: Option<bool>) -> Result<TodoPayload> {
    let task = prompt_text(prompter, "Task", task)?;
    let done = match done {
        Some(done) => done,
        None => prompter.flag("Done (true/false)")?,
    };
    Ok(TodoPayload { task, done })
}
