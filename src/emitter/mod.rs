mod error;

pub use error::EmitError;


use std::fs::File;
use std::io::Write;
use std::path::Path;

use memmap2::Mmap;

use crate::scanner::LineChunks;

/// Per-file emission counters, returned to the caller and never printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitStats {
    /// Line-feed-terminated chunks written
    pub lines: u64,
    /// Bytes written
    pub bytes: u64,
}

/// Writes the line-feed-terminated contents of files to an output sink.
///
/// Each call to [`emit_file`](FileEmitter::emit_file) maps one file
/// read-only, scans it for line boundaries, and writes every terminated
/// line to the sink as it is found. At most one file is mapped at a time;
/// the mapping is dropped before the call returns. Bytes after a file's
/// last line feed are not written.
pub struct FileEmitter<W: Write> {
    out: W,
}

impl<W: Write> FileEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Map `path` and write each of its terminated lines to the sink.
    ///
    /// A zero-length file produces no output and is not mapped. Every
    /// failure to open, stat, map, or write is returned as-is; nothing is
    /// retried and no fallback read strategy is attempted.
    pub fn emit_file(&mut self, path: &Path) -> Result<EmitStats, EmitError> {
        let file = File::open(path).map_err(EmitError::Open)?;
        let len = file.metadata().map_err(EmitError::Stat)?.len();

        // Zero-length ranges cannot be mapped; there is nothing to emit.
        if len == 0 {
            return Ok(EmitStats::default());
        }

        // Invariant: the mapping is private, read-only, and the file is not
        // written through any handle while it lives.
        let map = unsafe { Mmap::map(&file) }.map_err(EmitError::Map)?;

        let mut stats = EmitStats::default();
        for chunk in LineChunks::new(&map) {
            self.out.write_all(chunk).map_err(EmitError::Write)?;
            stats.lines += 1;
            stats.bytes += chunk.len() as u64;
        }

        Ok(stats)
    }

    /// Consume the emitter and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
