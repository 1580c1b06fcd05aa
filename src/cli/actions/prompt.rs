use super::input::Input;
use crate::directory::confirm::{is_yes, Confirm};
use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use tokio::io::AsyncBufRead;
use tracing::warn;

/// Asks on the terminal: prints the question and reads one line of input.
/// End of input, an unreadable reply or an I/O error counts as "no".
pub struct Prompt<'a, R, W> {
    lines: &'a mut Input<R>,
    out: &'a mut W,
}

impl<'a, R, W> Prompt<'a, R, W> {
    pub fn new(lines: &'a mut Input<R>, out: &'a mut W) -> Self {
        Self { lines, out }
    }
}

#[async_trait]
impl<'a, R, W> Confirm for Prompt<'a, R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn confirm(&mut self, prompt: &str) -> bool {
        if let Err(e) = write!(self.out, "{prompt} [y/N] ").and_then(|()| self.out.flush()) {
            warn!("Error writing prompt: {}", e);
            return false;
        }

        match self.lines.next_line().await {
            Ok(Some(reply)) => is_yes(&reply),
            Ok(None) => false,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                let _ = writeln!(self.out, "input is not valid UTF-8");
                false
            }
            Err(e) => {
                warn!("Error reading reply: {}", e);
                false
            }
        }
    }
}
