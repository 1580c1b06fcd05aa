pub mod delete;
pub mod input;
pub mod list;
pub mod prompt;
pub mod shell;
pub mod user;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use crate::{
    cli::globals::GlobalArgs,
    directory::{view, DirectoryClient, Failure, HttpUserApi, UserApi},
};
use anyhow::{Context, Result};
use std::io::Write;

#[derive(Debug)]
pub enum Action {
    Shell,
    List,
    Add(UserArgs),
    Update(UserArgs),
    Delete { id: i64, yes: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserArgs {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self, globals: &GlobalArgs) -> Result<()> {
        run::execute(self, globals).await
    }
}

/// Client for the service named by `--url`.
///
/// # Errors
/// Returns an error if the URL is invalid or the HTTP client cannot be built.
pub fn connect(globals: &GlobalArgs) -> Result<DirectoryClient<HttpUserApi>> {
    let api = HttpUserApi::new(&globals.url, globals.timeout)
        .with_context(|| format!("invalid service URL: {}", globals.url))?;

    Ok(DirectoryClient::new(api))
}

/// Print the status line and, once a list has been fetched, the table. A failed
/// outcome becomes an error so one-shot commands exit non-zero.
pub(crate) fn report<A, W, T>(
    client: &DirectoryClient<A>,
    out: &mut W,
    outcome: Result<T, Failure>,
) -> Result<T>
where
    A: UserApi,
    W: Write,
{
    if let Some(banner) = client.banner() {
        writeln!(out, "{}", banner.text())?;
    }
    if !client.is_loading() {
        writeln!(out, "{}", view::table(client.users(), false))?;
    }

    Ok(outcome?)
}
