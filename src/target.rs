use core::fmt;

use thiserror::Error;

/// Longest hostname we connect to. This is the DNS name limit.
pub const MAX_HOST_LEN: usize = 253;

pub(crate) const DEFAULT_PORT: u16 = 80;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TargetError {
    #[error("missing scheme")]
    MissingScheme,

    #[error("unsupported scheme")]
    UnsupportedScheme,

    #[error("missing host")]
    MissingHost,

    #[error("host too long")]
    HostTooLong,

    #[error("port is not a number")]
    PortNotANumber,
}

/// Where a request goes. Borrows from the url string it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target<'a> {
    host: &'a str,
    port: Option<u16>,
    path: &'a str,
    query: Option<&'a str>,
}

impl<'a> Target<'a> {
    /// Parse `http://host[:port][/path][?query]`.
    ///
    /// Only the `http` scheme is accepted. The path and query are kept
    /// exactly as given, percent-encoded or not.
    pub fn parse_str(s: &'a str) -> Result<Self, TargetError> {
        let (scheme, rest) = s.split_once("://").ok_or(TargetError::MissingScheme)?;

        if scheme != "http" {
            return Err(TargetError::UnsupportedScheme);
        }

        // The authority ends where the path or the query begins.
        // http://foo.com
        // http://foo.com/path
        // http://foo.com?a=b
        let authority_end = rest
            .find(|c: char| c == '/' || c == '?')
            .unwrap_or(rest.len());
        let (authority, tail) = rest.split_at(authority_end);

        let (host, port) = match authority.split_once(':') {
            Some((host, port)) => {
                let p: u16 = port.parse().map_err(|_| TargetError::PortNotANumber)?;
                (host, Some(p))
            }
            None => (authority, None),
        };

        if host.is_empty() {
            return Err(TargetError::MissingHost);
        }

        if host.len() > MAX_HOST_LEN {
            return Err(TargetError::HostTooLong);
        }

        let (path, query) = match tail.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (tail, None),
        };

        Ok(Target {
            host,
            port,
            path,
            query,
        })
    }

    pub fn host(&self) -> &'a str {
        self.host
    }

    /// The port to connect to, 80 unless the url had one.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// The path to request, `/` when the url had none.
    pub fn path(&self) -> &'a str {
        if self.path.is_empty() {
            "/"
        } else {
            self.path
        }
    }

    pub fn query(&self) -> Option<&'a str> {
        self.query
    }
}

impl<'a> TryFrom<&'a str> for Target<'a> {
    type Error = TargetError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl fmt::Display for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://{}", self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        write!(f, "{}", self.path)?;
        if let Some(query) = self.query {
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}
