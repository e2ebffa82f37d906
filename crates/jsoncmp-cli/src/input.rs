use std::{
    ffi::OsStr,
    fmt, fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};

/// Where a document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    /// `-` on the command line.
    Stdin,
    File(PathBuf),
}

impl From<&OsStr> for Source {
    fn from(value: &OsStr) -> Self {
        if value.to_str() == Some("-") {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    pub(crate) fn read(&self) -> Result<String> {
        let text = match self {
            Source::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                buffer
            }
            Source::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        };
        tracing::debug!(source = %self, bytes = text.len(), "Read document");
        Ok(text)
    }
}

/// Read both documents of a comparison.
pub(crate) fn read_pair(left: &Source, right: &Source) -> Result<(String, String)> {
    if *left == Source::Stdin && *right == Source::Stdin {
        bail!("stdin can only provide one of the two documents");
    }
    Ok((left.read()?, right.read()?))
}
