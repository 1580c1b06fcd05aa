use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Line reader for terminal input.
///
/// Each call consumes one whole line, so a line that is not valid UTF-8 is
/// reported as [`io::ErrorKind::InvalidData`] and the next call continues
/// with the following line.
pub struct Input<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> Input<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next line without its `\n` or `\r\n`, `None` at end of input.
    ///
    /// # Errors
    /// Returns `InvalidData` for a line that is not UTF-8, or the underlying read error.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();

        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        std::str::from_utf8(&self.buf)
            .map(|line| Some(line.to_string()))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
