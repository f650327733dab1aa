use core::fmt;
use std::io;

use crate::target::Target;
use crate::{Error, HTTP_10, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Method {
    Get,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What to send: method, headers and an optional body.
#[derive(Debug, Clone)]
pub struct RequestParams {
    method: Method,
    body: Option<Vec<u8>>,
    headers: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new(method: Method) -> Self {
        RequestParams {
            method,
            body: None,
            headers: vec![],
        }
    }

    /// Append a header pair. The strings move into the params, which
    /// own all header storage. Pairs go on the wire exactly as given,
    /// in the order they were added.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a request body. GET sends none, so building skips it.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Serialize a request into a new buffer.
///
/// ```text
/// GET /some-path HTTP/1.0\r\n
/// Host: myhost.test\r\n
/// accept: text/plain\r\n
/// \r\n
/// ```
///
/// The `Host` header always comes from the target. A caller header
/// named `Host` is written again after it, as given.
pub fn build(target: &Target, params: &RequestParams) -> Result<Vec<u8>> {
    let len = wire_len(target, params);

    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| Error::OutOfMemory)?;

    // Writing to a Vec cannot fail, and the reservation above covers
    // the entire request.
    write_request(target, params, &mut buf)?;

    Ok(buf)
}

/// Serialize a request straight into a writer. Returns the number of
/// bytes written.
pub fn write_request<W: io::Write>(
    target: &Target,
    params: &RequestParams,
    w: &mut W,
) -> Result<usize> {
    write!(w, "{} {}", params.method(), target.path()).map_err(Error::Write)?;

    if let Some(query) = target.query() {
        write!(w, "?{}", query).map_err(Error::Write)?;
    }

    write!(w, " {}\r\n", HTTP_10).map_err(Error::Write)?;

    write!(w, "Host: {}\r\n", target.host()).map_err(Error::Write)?;

    for (name, value) in params.headers() {
        write!(w, "{}: {}\r\n", name, value).map_err(Error::Write)?;
    }

    w.write_all(b"\r\n").map_err(Error::Write)?;

    Ok(wire_len(target, params))
}

fn wire_len(target: &Target, params: &RequestParams) -> usize {
    // <METHOD> <path>[?<query>] HTTP/1.0\r\n
    let mut len = params.method().as_str().len() + 1 + target.path().len();
    if let Some(query) = target.query() {
        len += 1 + query.len();
    }
    len += 1 + HTTP_10.len() + 2;

    // Host: <host>\r\n
    len += 6 + target.host().len() + 2;

    // <name>: <value>\r\n
    for (name, value) in params.headers() {
        len += name.len() + 2 + value.len() + 2;
    }

    // Empty line ending the headers.
    len + 2
}
