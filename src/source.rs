use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read candidate names from a line-oriented reader.
///
/// One name per line; the line reader strips the trailing newline, CRLF
/// included. Only lines whose first character is an alphabetic letter are
/// kept; any other first character marks the line as a comment and it is
/// skipped, as are empty lines.
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.chars().next().is_some_and(|c| c.is_alphabetic()) {
            names.push(line);
        }
    }
    Ok(names)
}

/// Open `path` and read all names from it. The file is read fully and
/// released before any network activity starts.
pub fn load_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::SourceNotFound {
        path: path.display().to_string(),
        source,
    })?;
    read_names(BufReader::new(file))
}
