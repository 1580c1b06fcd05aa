use super::{connect, input::Input, prompt::Prompt, report};
use crate::{
    cli::globals::GlobalArgs,
    directory::{Answer, Confirm, Deletion, DirectoryClient, UserApi},
};
use anyhow::Result;
use std::io::{self, Write};
use tokio::io::BufReader;

/// Handle the delete action
pub async fn handle(globals: &GlobalArgs, id: i64, yes: bool) -> Result<()> {
    let mut client = connect(globals)?;

    if yes {
        run(&mut client, id, &mut Answer::Yes, &mut io::stdout()).await?;
    } else {
        let mut lines = Input::new(BufReader::new(tokio::io::stdin()));
        let mut stdout = io::stdout();
        let mut prompt = Prompt::new(&mut lines, &mut stdout);
        run(&mut client, id, &mut prompt, &mut io::stdout()).await?;
    }

    Ok(())
}

pub async fn run<A, C, W>(
    client: &mut DirectoryClient<A>,
    id: i64,
    confirm: &mut C,
    out: &mut W,
) -> Result<Deletion>
where
    A: UserApi,
    C: Confirm + ?Sized,
    W: Write,
{
    let outcome = client.delete(id, confirm).await;

    if outcome == Ok(Deletion::Declined) {
        writeln!(out, "Aborted.")?;
        return Ok(Deletion::Declined);
    }

    report(client, out, outcome)
}
