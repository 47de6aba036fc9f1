//! Input acquisition with a size limit

use crate::cli::InputArgs;
use mailtriage_core::{Error, Result};
use std::fs::File;
use std::io::{self, Read};

/// Read the text named by `args`, rejecting anything over `limit` bytes.
///
/// Stdin and files are read at most one byte past the limit, so an
/// oversized stream is detected without buffering it whole.
pub fn read_input(args: &InputArgs, limit: usize) -> Result<String> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_limited(File::open(path)?, limit)?,
        (None, None) => read_limited(io::stdin().lock(), limit)?,
    };

    if text.len() > limit {
        return Err(Error::InputTooLarge {
            size: text.len(),
            limit,
        });
    }
    Ok(text)
}

fn read_limited(reader: impl Read, limit: usize) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .take(limit as u64 + 1)
        .read_to_end(&mut bytes)?;

    if bytes.len() > limit {
        return Err(Error::InputTooLarge {
            size: bytes.len(),
            limit,
        });
    }

    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
