use super::{connect, report};
use crate::{
    cli::globals::GlobalArgs,
    directory::{DirectoryClient, UserApi},
};
use anyhow::Result;
use std::io::{self, Write};

/// Handle the list action
pub async fn handle(globals: &GlobalArgs) -> Result<()> {
    let mut client = connect(globals)?;

    run(&mut client, &mut io::stdout()).await
}

pub async fn run<A: UserApi, W: Write>(client: &mut DirectoryClient<A>, out: &mut W) -> Result<()> {
    let outcome = client.list().await;

    report(client, out, outcome)
}
