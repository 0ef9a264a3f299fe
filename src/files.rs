// src/files.rs
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn read_file(p: &Path) -> Result<Vec<u8>> {
    fs::read(p).with_context(|| format!("failed to read input file {}", p.display()))
}

pub fn write_file(p: &Path, data: &[u8]) -> Result<()> {
    fs::write(p, data).with_context(|| format!("failed to write output file {}", p.display()))
}
