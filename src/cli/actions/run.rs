use super::{delete, list, shell, user, Action};
use crate::cli::globals::GlobalArgs;
use anyhow::Result;

pub(super) async fn execute(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Shell => shell::handle(globals).await,
        Action::List => list::handle(globals).await,
        Action::Add(args) => user::add(globals, args).await,
        Action::Update(args) => user::update(globals, args).await,
        Action::Delete { id, yes } => delete::handle(globals, id, yes).await,
    }
}
