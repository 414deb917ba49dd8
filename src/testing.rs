//! In-memory streams for driving pages and routes in tests.

use core::convert::Infallible;

use embedded_io_async::{ErrorKind, ErrorType, Read, Write};

/// Records everything written to it, and how.
#[derive(Default)]
pub struct Sink {
    bytes: Vec<u8>,
    writes: Vec<usize>,
}

impl Sink {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap()
    }

    pub fn writes(&self) -> usize {
        self.writes.len()
    }

    pub fn largest_write(&self) -> usize {
        self.writes.iter().copied().max().unwrap_or(0)
    }
}

impl ErrorType for Sink {
    type Error = Infallible;
}

impl Write for Sink {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.writes.push(buf.len());
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }
}

/// A client that hung up.
pub struct Closed;

impl ErrorType for Closed {
    type Error = ErrorKind;
}

impl Write for Closed {
    async fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
        Err(ErrorKind::ConnectionReset)
    }
}

/// Yields the request in fixed-size pieces, then end of stream.
pub struct Source<'a> {
    data: &'a [u8],
    piece: usize,
}

impl<'a> Source<'a> {
    pub fn new(data: &'a [u8], piece: usize) -> Self {
        Self { data, piece }
    }

    pub fn remaining(&self) -> usize {
        self.data.len()
    }
}

impl ErrorType for Source<'_> {
    type Error = Infallible;
}

impl Read for Source<'_> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = self.data.len().min(self.piece).min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Checks the response framing: status line, headers, blank line, body.
/// Returns the status code and the body.
pub fn split_response(raw: &str) -> (u16, &str) {
    let (head, body) = raw.split_once("\r\n\r\n").expect("no blank line after headers");
    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap();
    let mut parts = status_line.splitn(3, ' ');
    assert_eq!(parts.next(), Some("HTTP/1.1"));
    let code = parts.next().unwrap().parse::<u16>().unwrap();
    assert!(parts.next().is_some_and(|reason| !reason.is_empty()));
    let mut content_type = false;
    let mut close = false;
    for header in lines {
        let (name, value) = header.split_once(": ").expect("malformed header");
        assert!(!name.is_empty() && !name.contains(' '));
        content_type |= name == "Content-Type" && value == "text/html";
        close |= name == "Connection" && value == "close";
        assert_ne!(name, "Content-Length");
    }
    assert!(content_type && close);
    (code, body)
}
