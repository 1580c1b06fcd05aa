use crate::cli::{
    actions::{Action, UserArgs},
    commands::DEFAULT_URL,
    globals::GlobalArgs,
};
use anyhow::{Context, Result};

/// Resolve the connection settings.
pub fn globals(matches: &clap::ArgMatches) -> GlobalArgs {
    let url = matches
        .get_one::<String>("url")
        .cloned()
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    let mut globals = GlobalArgs::new(url);
    if let Some(&seconds) = matches.get_one::<u64>("timeout") {
        globals.set_timeout(seconds);
    }

    globals
}

/// Map the parsed command line to an [`Action`].
///
/// # Errors
/// Returns an error if a required argument is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("list", _)) => Ok(Action::List),
        Some(("add", sub_m)) => Ok(Action::Add(user_args(sub_m)?)),
        Some(("update", sub_m)) => Ok(Action::Update(user_args(sub_m)?)),
        Some(("delete", sub_m)) => Ok(Action::Delete {
            id: sub_m
                .get_one::<i64>("id")
                .copied()
                .context("missing required argument: --id")?,
            yes: sub_m.get_flag("yes"),
        }),
        _ => Ok(Action::Shell),
    }
}

fn user_args(matches: &clap::ArgMatches) -> Result<UserArgs> {
    Ok(UserArgs {
        id: matches
            .get_one::<i64>("id")
            .copied()
            .context("missing required argument: --id")?,
        name: matches
            .get_one::<String>("name")
            .cloned()
            .context("missing required argument: --name")?,
        address: matches
            .get_one::<String>("address")
            .cloned()
            .context("missing required argument: --address")?,
    })
}
