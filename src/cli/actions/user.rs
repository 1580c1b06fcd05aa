use super::{connect, report, UserArgs};
use crate::{
    cli::globals::GlobalArgs,
    directory::{DirectoryClient, Field, Saved, UserApi},
};
use anyhow::{anyhow, Result};
use std::io::{self, Write};

/// Handle the add action
pub async fn add(globals: &GlobalArgs, args: UserArgs) -> Result<()> {
    let mut client = connect(globals)?;

    create(&mut client, args, &mut io::stdout()).await?;

    Ok(())
}

/// Handle the update action
pub async fn update(globals: &GlobalArgs, args: UserArgs) -> Result<()> {
    let mut client = connect(globals)?;

    replace(&mut client, args, &mut io::stdout()).await?;

    Ok(())
}

/// Fill the form in create mode and submit it.
pub async fn create<A: UserApi, W: Write>(
    client: &mut DirectoryClient<A>,
    args: UserArgs,
    out: &mut W,
) -> Result<Saved> {
    client.set_field(Field::Id, args.id.to_string())?;
    client.set_field(Field::Name, args.name)?;
    client.set_field(Field::Address, args.address)?;

    let outcome = client.submit().await;

    report(client, out, outcome)
}

/// Load the list, edit user `args.id` and submit the new name and address.
pub async fn replace<A: UserApi, W: Write>(
    client: &mut DirectoryClient<A>,
    args: UserArgs,
    out: &mut W,
) -> Result<Saved> {
    client.list().await?;

    let user = client
        .find(args.id)
        .cloned()
        .ok_or_else(|| anyhow!("user {} not found", args.id))?;

    client.begin_edit(&user);
    client.set_field(Field::Name, args.name)?;
    client.set_field(Field::Address, args.address)?;

    let outcome = client.submit().await;

    report(client, out, outcome)
}
