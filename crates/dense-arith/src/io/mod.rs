pub mod text;

pub use text::TextFormat;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Read a single container from a text file.
pub fn read_text_file<C: TextFormat, P: AsRef<Path>>(path: P) -> Result<C> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;
    let mut reader = BufReader::new(file);
    C::read_text(&mut reader)
        .with_context(|| format!("Failed to parse file: {}", path.as_ref().display()))
}

/// Write a single container to a text file, replacing any existing content.
pub fn write_text_file<C: TextFormat, P: AsRef<Path>>(path: P, value: &C) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
    let mut writer = BufWriter::new(file);
    value
        .write_text(&mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write file: {}", path.as_ref().display()))
}
