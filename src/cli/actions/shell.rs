use super::{connect, input::Input, prompt::Prompt};
use crate::{
    cli::globals::GlobalArgs,
    directory::{view, DirectoryClient, Field, FormError, UserApi},
};
use anyhow::Result;
use std::io::{self, ErrorKind, Write};
use thiserror::Error;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{debug, warn};

pub const HELP: &str = "\
Commands:
  list                         fetch the user list again
  show                         redraw the screen
  set <id|name|address> <text> fill in a form field
  submit                       add the user, or update it when editing
  edit <id>                    load a user into the form
  cancel                       leave edit mode and clear the form
  delete <id>                  delete a user (asks first)
  help                         this text
  quit                         leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Show,
    Set(Field, String),
    Submit,
    Edit(i64),
    Cancel,
    Delete(i64),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Parse one input line. Blank lines yield `None`.
///
/// # Errors
/// Returns an error for unknown commands or missing arguments.
pub fn parse(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = split_word(line);

    let command = match word.to_lowercase().as_str() {
        "list" => ShellCommand::List,
        "show" => ShellCommand::Show,
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(ParseError::Usage("set <id|name|address> <text>"));
            }
            ShellCommand::Set(field.parse()?, value.to_string())
        }
        "submit" => ShellCommand::Submit,
        "edit" => ShellCommand::Edit(parse_id(rest, "edit <id>")?),
        "cancel" => ShellCommand::Cancel,
        "delete" => ShellCommand::Delete(parse_id(rest, "delete <id>")?),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn split_word(line: &str) -> (&str, &str) {
    line.split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()))
}

fn parse_id(text: &str, usage: &'static str) -> Result<i64, ParseError> {
    text.parse().map_err(|_| ParseError::Usage(usage))
}

/// Handle the shell action
pub async fn handle(globals: &GlobalArgs) -> Result<()> {
    let client = connect(globals)?;

    let mut shell = Shell::new(client, BufReader::new(tokio::io::stdin()), io::stdout());

    shell.run().await
}

/// Interactive session: one command per line, the screen is redrawn after
/// each command that can change it.
pub struct Shell<A, R, W> {
    client: DirectoryClient<A>,
    lines: Input<R>,
    out: W,
}

impl<A, R, W> Shell<A, R, W>
where
    A: UserApi,
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(client: DirectoryClient<A>, input: R, out: W) -> Self {
        Self {
            client,
            lines: Input::new(input),
            out,
        }
    }

    #[must_use]
    pub fn client(&self) -> &DirectoryClient<A> {
        &self.client
    }

    /// Load the list, then read commands until `quit` or end of input.
    /// Lines that are not valid UTF-8 are skipped with a notice.
    ///
    /// # Errors
    /// Returns an error if reading input or writing output fails.
    pub async fn run(&mut self) -> Result<()> {
        self.render()?;
        let _ = self.client.list().await;
        self.render()?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    writeln!(self.out)?;
                    break;
                }
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!("Skipping input line: {}", e);
                    writeln!(self.out, "input is not valid UTF-8")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let command = match parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(self.out, "{e}")?;
                    if matches!(e, ParseError::Unknown(_)) {
                        writeln!(self.out, "{HELP}")?;
                    }
                    continue;
                }
            };

            debug!("shell command: {:?}", command);

            if !self.apply(command).await? {
                break;
            }
        }

        Ok(())
    }

    /// Run one command. Returns `false` when the session should end.
    async fn apply(&mut self, command: ShellCommand) -> Result<bool> {
        match command {
            ShellCommand::List => {
                let _ = self.client.list().await;
            }
            ShellCommand::Show => {}
            ShellCommand::Set(field, value) => {
                if let Err(e) = self.client.set_field(field, value) {
                    writeln!(self.out, "{e}")?;
                    return Ok(true);
                }
            }
            ShellCommand::Submit => {
                let _ = self.client.submit().await;
            }
            ShellCommand::Edit(id) => {
                let Some(user) = self.client.find(id).cloned() else {
                    writeln!(self.out, "user {id} not found")?;
                    return Ok(true);
                };
                self.client.begin_edit(&user);
            }
            ShellCommand::Cancel => self.client.cancel_edit(),
            ShellCommand::Delete(id) => {
                let mut prompt = Prompt::new(&mut self.lines, &mut self.out);
                let _ = self.client.delete(id, &mut prompt).await;
            }
            ShellCommand::Help => {
                writeln!(self.out, "{HELP}")?;
                return Ok(true);
            }
            ShellCommand::Quit => return Ok(false),
        }

        self.render()?;

        Ok(true)
    }

    fn render(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}\n", view::render(&self.client))
    }
}
