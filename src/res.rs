use std::collections::HashMap;
use std::str;

use crate::parser::{find_boundary, parse_status_line, split_header_line};
use crate::{Error, Result};

/// A parsed response. All parts borrow from the input buffer, which
/// must stay alive for as long as the response is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<'a> {
    status: u16,
    reason: &'a str,
    headers: HashMap<&'a str, &'a str>,
    body: &'a [u8],
}

impl<'a> Response<'a> {
    /// Parse a complete response held in `input`.
    ///
    /// The input must contain the entire response, read until the
    /// server closed the stream. Parsing the same input again gives an
    /// equal response.
    pub fn parse(input: &'a [u8]) -> Result<Response<'a>> {
        let boundary = find_boundary(input).ok_or(Error::MissingBoundary)?;

        let head = str::from_utf8(&input[..boundary])?;
        let body = &input[boundary + 4..];

        let mut lines = head.split("\r\n");

        // split always yields at least one item.
        let status_line = lines.next().unwrap_or("");
        let (status, reason) = parse_status_line(status_line)?;

        let mut headers = HashMap::new();
        for line in lines {
            let (name, value) = split_header_line(line)?;
            // A repeated name keeps the last value.
            headers.insert(name, value);
        }

        Ok(Response {
            status,
            reason,
            headers,
            body,
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn reason(&self) -> &'a str {
        self.reason
    }

    /// Look up a header value. Names match exactly, no case folding.
    pub fn header(&self, name: &str) -> Option<&'a str> {
        self.headers.get(name).copied()
    }

    pub fn headers(&self) -> &HashMap<&'a str, &'a str> {
        &self.headers
    }

    pub fn body(&self) -> &'a [u8] {
        self.body
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_full() {
        let input = b"HTTP/1.0 200 OK\r\n\
            Content-Type: text/plain\r\n\
            Server: owl\r\n\r\n\
            hello world";

        let res = Response::parse(input).unwrap();

        assert_eq!(res.status(), 200);
        assert_eq!(res.reason(), "OK");
        assert_eq!(res.header("Content-Type"), Some("text/plain"));
        assert_eq!(res.header("Server"), Some("owl"));
        assert_eq!(res.headers().len(), 2);
        assert_eq!(res.body(), b"hello world");
    }

    #[test]
    fn test_parse_no_headers() {
        let input = b"HTTP/1.0 404 Not Found\r\n\r\n";

        let res = Response::parse(input).unwrap();

        assert_eq!(res.status(), 404);
        assert_eq!(res.reason(), "Not Found");
        assert!(res.headers().is_empty());
        assert_eq!(res.body(), b"");
    }

    #[test]
    fn test_reason_keeps_spaces() {
        let res = Response::parse(b"HTTP/1.0 500 Internal Server Error\r\n\r\n").unwrap();

        assert_eq!(res.status(), 500);
        assert_eq!(res.reason(), "Internal Server Error");
    }

    #[test]
    fn test_body_kept_verbatim() {
        // A boundary inside the body belongs to the body.
        let input = b"HTTP/1.0 200 OK\r\n\r\nline1\r\n\r\nline2";

        let res = Response::parse(input).unwrap();

        assert_eq!(res.body(), b"line1\r\n\r\nline2");
    }

    #[test]
    fn test_last_header_wins() {
        let input = b"HTTP/1.0 200 OK\r\nX-Thing: first\r\nX-Thing: second\r\n\r\n";

        let res = Response::parse(input).unwrap();

        assert_eq!(res.header("X-Thing"), Some("second"));
        assert_eq!(res.headers().len(), 1);
    }

    #[test]
    fn test_header_lookup_is_exact() {
        let res = Response::parse(b"HTTP/1.0 200 OK\r\nContent-Type: a\r\n\r\n").unwrap();

        assert_eq!(res.header("content-type"), None);
    }

    #[test]
    fn test_missing_boundary() {
        let r = Response::parse(b"HTTP/1.0 200 OK\r\nHost: foo\r\n");
        assert!(matches!(r, Err(Error::MissingBoundary)));

        let r = Response::parse(b"");
        assert!(matches!(r, Err(Error::MissingBoundary)));
    }

    #[test]
    fn test_wrong_version() {
        let r = Response::parse(b"HTTP/1.1 200 OK\r\n\r\n");
        assert!(matches!(r, Err(Error::UnsupportedVersion)));
    }

    #[test]
    fn test_short_response_line() {
        // No second space, no reason.
        let r = Response::parse(b"HTTP/1.0 200\r\n\r\n");
        assert!(matches!(r, Err(Error::InvalidResponseLine)));
    }

    #[test]
    fn test_status_not_a_number() {
        let r = Response::parse(b"HTTP/1.0 abc OK\r\n\r\n");
        assert!(matches!(r, Err(Error::StatusNotANumber(_))));
    }

    #[test]
    fn test_broken_header_line() {
        let r = Response::parse(b"HTTP/1.0 200 OK\r\nX-Broken\r\n\r\n");
        assert!(matches!(r, Err(Error::InvalidHeaderPair)));
    }

    #[test]
    fn test_head_not_utf8() {
        let r = Response::parse(b"HTTP/1.0 200 \xffOK\r\n\r\n");
        assert!(matches!(r, Err(Error::HeaderUtf8(_))));
    }

    #[test]
    fn test_parse_is_repeatable() {
        let input = b"HTTP/1.0 200 OK\r\nServer: owl\r\n\r\nbody";

        let first = Response::parse(input).unwrap();
        let second = Response::parse(input).unwrap();

        assert_eq!(first, second);
    }
}
