//! Run orchestration: config → source → buffer → codec → sink.
//!
//! A [`Generator`] performs exactly one run, strictly linear: validate the
//! configuration, build the source, fill a single up-front allocation,
//! encode, write. The only branching is whether the output goes through the
//! line-wrapping decorator and whether a trailing newline is owed to an
//! interactive terminal.

use std::io::Write;

use log::debug;

use crate::config::Config;
use crate::error::Result;
use crate::sources;
use crate::wrap::LineWriter;

/// One-shot byte generation run.
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate, encode, and write to `sink`.
    ///
    /// `sink_is_terminal` tells the generator whether the ultimate
    /// destination is an interactive terminal; it gates both the raw-format
    /// refusal and the trailing-newline courtesy. Nothing is written before
    /// validation passes. Partial output already written when a later I/O
    /// error hits is not rolled back.
    pub fn run(&self, sink: &mut dyn Write, sink_is_terminal: bool) -> Result<()> {
        self.config.validate(sink_is_terminal)?;

        let mut source = sources::build(&self.config)?;
        let mut buffer = vec![0u8; self.config.byte_count.get() as usize];
        source.fill(&mut buffer)?;
        debug!(
            "filled {} bytes from {} source",
            buffer.len(),
            self.config.source
        );

        let codec = self.config.format.codec();
        let encoded = codec.encode(&buffer);
        debug!(
            "encoded as {} ({} output bytes)",
            self.config.format,
            encoded.len()
        );

        match self.config.line_width {
            Some(width) => LineWriter::new(&mut *sink, width).write_all(&encoded)?,
            None => sink.write_all(&encoded)?,
        }

        if sink_is_terminal && !codec.natural_terminator() {
            sink.write_all(b"\n")?;
        }
        sink.flush()?;
        Ok(())
    }
}
