//! Input sources - regular files and the standard input binding

use crate::types::CmpyError;
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::PathBuf;

/// Reserved identity that binds an input slot to the process's standard
/// input. At most one slot per run may claim it.
pub const STDIN_IDENTITY: &str = "stdin";

#[derive(Debug)]
enum Stream {
    File(File),
    Stdin(io::Stdin),
}

impl Stream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Stream::File(file) => file.read(buf),
            Stream::Stdin(stdin) => stdin.read(buf),
        }
    }
}

/// One open byte stream participating in a comparison.
///
/// Tracks the identity it was opened from plus latched end-of-stream and
/// error flags. Dropping a source closes regular files; the standard
/// input binding is released without closing the process channel.
#[derive(Debug)]
pub struct Source {
    identity: String,
    stream: Stream,
    at_eof: bool,
    errored: bool,
}

impl Source {
    /// Open every identity in order, binding `stdin` at most once.
    ///
    /// Regular paths are opened for plain binary reads with no extra
    /// buffering layer. All-or-nothing: the first failure drops every
    /// handle opened so far and nothing escapes.
    ///
    /// # Errors
    /// * `CmpyError::StdinAlreadyBound` - the `stdin` identity appears twice
    /// * `CmpyError::Open` - a regular path could not be opened
    pub fn open_all(identities: &[String]) -> Result<Vec<Source>, CmpyError> {
        let mut sources = Vec::with_capacity(identities.len());
        let mut stdin_bound = false;

        for identity in identities {
            let stream = if identity == STDIN_IDENTITY {
                if stdin_bound {
                    return Err(CmpyError::StdinAlreadyBound);
                }
                stdin_bound = true;
                Stream::Stdin(io::stdin())
            } else {
                let file = File::open(identity).map_err(|source| CmpyError::Open {
                    path: PathBuf::from(identity),
                    source,
                })?;
                Stream::File(file)
            };

            sources.push(Source {
                identity: identity.clone(),
                stream,
                at_eof: false,
                errored: false,
            });
        }

        Ok(sources)
    }

    /// Identity this source was opened from (a path, or `stdin`).
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Whether a read has hit the end of the stream.
    pub fn at_eof(&self) -> bool {
        self.at_eof
    }

    /// Whether a read on this stream has failed.
    pub fn errored(&self) -> bool {
        self.errored
    }

    /// Whether another fill could still produce bytes.
    pub fn exhausted(&self) -> bool {
        self.at_eof || self.errored
    }

    /// Read up to `buf.len()` bytes into the buffer, looping until it is
    /// full or the stream ends. Interrupted reads are retried; a real read
    /// failure latches the error flag and ends the fill.
    ///
    /// Returns the number of valid bytes now in `buf`. A source already at
    /// end-of-stream or errored returns 0 without touching the handle.
    pub fn fill(&mut self, buf: &mut [u8]) -> usize {
        if self.exhausted() {
            return 0;
        }

        let mut filled = 0;
        while filled < buf.len() {
            match self.stream.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.at_eof = true;
                    break;
                }
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(_) => {
                    self.errored = true;
                    break;
                }
            }
        }

        filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn identities(sources: &[&str]) -> Vec<String> {
        sources.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_open_all_regular_files() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"payload").unwrap();
        file.flush().unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let sources = Source::open_all(&[path.clone(), path.clone()]).unwrap();

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].identity(), path);
        assert!(!sources[0].exhausted());
    }

    #[test]
    fn test_open_all_rejects_missing_path() {
        let result = Source::open_all(&identities(&["/nonexistent/input.bin"]));

        match result {
            Err(CmpyError::Open { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/input.bin"));
            }
            other => panic!("expected Open error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_open_all_rejects_second_stdin() {
        let result = Source::open_all(&identities(&[STDIN_IDENTITY, STDIN_IDENTITY]));
        assert!(matches!(result, Err(CmpyError::StdinAlreadyBound)));
    }

    #[test]
    fn test_fill_reads_until_buffer_full() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"abcdef").unwrap();
        file.flush().unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let mut sources = Source::open_all(&[path]).unwrap();
        let source = &mut sources[0];

        let mut buf = [0u8; 4];
        assert_eq!(source.fill(&mut buf), 4);
        assert_eq!(&buf, b"abcd");
        assert!(!source.at_eof());
    }

    #[test]
    fn test_fill_latches_eof_on_short_stream() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"ab").unwrap();
        file.flush().unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let mut sources = Source::open_all(&[path]).unwrap();
        let source = &mut sources[0];

        let mut buf = [0u8; 4];
        assert_eq!(source.fill(&mut buf), 2);
        assert!(source.at_eof());

        // Exhausted streams report empty fills without another read.
        assert_eq!(source.fill(&mut buf), 0);
    }

    #[test]
    fn test_fill_empty_stream() {
        let file = NamedTempFile::new().unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let mut sources = Source::open_all(&[path]).unwrap();
        let source = &mut sources[0];

        let mut buf = [0u8; 4];
        assert_eq!(source.fill(&mut buf), 0);
        assert!(source.at_eof());
        assert!(!source.errored());
    }
}
