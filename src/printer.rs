//! Line-by-line file printer
//!
//! Reads the input through a fixed 100-byte line buffer and writes every chunk
//! wrapped in a color reset, one chunk per read.

use crate::color;
use crate::error::{Error, Result};
use log::{debug, trace};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Line buffer capacity, one slot of which is reserved for the terminator
pub const LINE_BUFFER_SIZE: usize = 100;

/// Most bytes a single read places in the line buffer
const MAX_CHUNK: usize = LINE_BUFFER_SIZE - 1;

/// Splits a reader into newline-terminated chunks of at most `MAX_CHUNK` bytes
pub struct LineChunks<R> {
    reader: R,
    buf: [u8; LINE_BUFFER_SIZE],
    done: bool,
}

impl<R: BufRead> LineChunks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: [0; LINE_BUFFER_SIZE],
            done: false,
        }
    }

    /// Read the next chunk. The trailing newline, if any, stays in the chunk.
    ///
    /// Returns `None` at end of input. A read error also ends the input and
    /// drops whatever was collected for the current chunk.
    pub fn next_chunk(&mut self) -> Option<&[u8]> {
        if self.done {
            return None;
        }

        let mut len = 0;
        while len < MAX_CHUNK {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    debug!("read failed, treating as end of input: {e}");
                    self.done = true;
                    return None;
                }
            };
            if available.is_empty() {
                break;
            }

            let room = available.len().min(MAX_CHUNK - len);
            let (take, newline) = match available[..room].iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (room, false),
            };
            self.buf[len..len + take].copy_from_slice(&available[..take]);
            self.reader.consume(take);
            len += take;

            if newline {
                break;
            }
        }

        if len == 0 {
            self.done = true;
            return None;
        }
        Some(&self.buf[..len])
    }
}

/// Write one chunk as `\n`, reset code, text, `\n\n`.
///
/// The text ends at the first NUL byte.
pub fn write_decorated<W: Write>(out: &mut W, chunk: &[u8]) -> io::Result<()> {
    let text = chunk.split(|&b| b == 0).next().unwrap_or_default();
    out.write_all(b"\n")?;
    out.write_all(color::RESET.as_bytes())?;
    out.write_all(text)?;
    out.write_all(b"\n\n")
}

/// Print every chunk of the file at `path`, returning how many were printed
pub fn print_file<W: Write>(path: &Path, out: &mut W) -> Result<usize> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened {}", path.display());

    let mut chunks = LineChunks::new(BufReader::new(file));
    let mut count = 0;
    while let Some(chunk) = chunks.next_chunk() {
        trace!("chunk {count}: {} bytes", chunk.len());
        write_decorated(out, chunk).map_err(Error::Write)?;
        count += 1;
    }
    out.flush().map_err(Error::Write)?;

    debug!("printed {count} chunks from {}", path.display());
    Ok(count)
}
