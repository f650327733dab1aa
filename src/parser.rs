use crate::{Error, HTTP_10, Result};

/// Index of the first `\r\n\r\n`, the end of the response headers.
pub(crate) fn find_boundary(b: &[u8]) -> Option<usize> {
    b.windows(4).position(|w| w == b"\r\n\r\n")
}

pub(crate) fn parse_status_line(line: &str) -> Result<(u16, &str)> {
    // HTTP/1.0 <code> <reason>
    let (version, rest) = line.split_once(' ').ok_or(Error::InvalidResponseLine)?;
    let (code, reason) = rest.split_once(' ').ok_or(Error::InvalidResponseLine)?;

    if version != HTTP_10 {
        return Err(Error::UnsupportedVersion);
    }

    let status = code.parse().map_err(Error::StatusNotANumber)?;

    Ok((status, reason))
}

pub(crate) fn split_header_line(line: &str) -> Result<(&str, &str)> {
    line.split_once(": ").ok_or(Error::InvalidHeaderPair)
}
