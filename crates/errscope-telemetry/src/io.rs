//! Bounded log reads and atomic file replacement

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Bytes read per backwards step when looking for the tail
const TAIL_CHUNK: usize = 8 * 1024;

/// Read the last `limit` lines of a file
///
/// The file is scanned backwards from its end, so only the tail and at most
/// one extra chunk are ever loaded. Invalid UTF-8 is replaced rather than
/// rejected so that a single bad byte in a build log does not hide the rest
/// of it.
pub fn read_tail_lines(path: &Path, limit: usize) -> std::io::Result<Vec<String>> {
    let mut file = File::open(path)?;
    let metadata = file.metadata()?;
    if metadata.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        ));
    }
    if limit == 0 {
        return Ok(Vec::new());
    }

    // One newline more than `limit` guarantees `limit` complete lines even
    // when the file ends with a newline.
    let mut pos = metadata.len();
    let mut newlines = 0;
    let mut chunks: Vec<Vec<u8>> = Vec::new();
    while pos > 0 && newlines <= limit {
        let step = pos.min(TAIL_CHUNK as u64);
        pos -= step;

        let mut chunk = vec![0u8; step as usize];
        file.seek(SeekFrom::Start(pos))?;
        file.read_exact(&mut chunk)?;

        newlines += chunk.iter().filter(|&&b| b == b'\n').count();
        chunks.push(chunk);
    }

    let bytes: Vec<u8> = chunks.into_iter().rev().flatten().collect();
    let content = String::from_utf8_lossy(&bytes);
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(limit);

    Ok(lines[start..].iter().map(|line| line.to_string()).collect())
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}
