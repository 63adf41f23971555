use anyhow::{Context, Result};
use onecard_core::Event;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
struct TranscriptLine<'a> {
    index: usize,
    text: String,
    event: &'a Event,
}

/// Writes the event log as JSON lines, one event per line.
pub fn write_transcript(out: &mut impl Write, events: &[Event]) -> Result<()> {
    for (index, event) in events.iter().enumerate() {
        let line = TranscriptLine {
            index,
            text: event.to_string(),
            event,
        };
        serde_json::to_writer(&mut *out, &line).context("encode transcript line")?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

pub fn save_transcript(path: &Path, events: &[Event]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create transcript at {}", path.display()))?;
    write_transcript(&mut BufWriter::new(file), events)
}
