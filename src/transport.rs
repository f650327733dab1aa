use std::io::{Read, Write};
use std::net::TcpStream;

use crate::req::{self, RequestParams};
use crate::target::Target;
use crate::{Error, Result};

const BUFFER_SIZE: usize = 4096;

/// Open a connection to the target host and port.
pub fn connect(target: &Target) -> Result<TcpStream> {
    trace!("Connect {}:{}", target.host(), target.port());

    let stream = TcpStream::connect((target.host(), target.port())).map_err(Error::Connect)?;

    Ok(stream)
}

/// Read until the peer closes the stream.
pub fn read_to_end<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut response = Vec::new();
    let mut buf = [0_u8; BUFFER_SIZE];

    loop {
        let n = reader.read(&mut buf).map_err(Error::Read)?;

        if n == 0 {
            // Peer closed. The response is complete.
            break;
        }

        response.extend_from_slice(&buf[..n]);
    }

    trace!("Read response: {} bytes", response.len());

    Ok(response)
}

/// Send one request and return the raw response bytes.
///
/// Opens a new connection, writes the request, reads until the server
/// closes the stream. The connection is gone when this returns, on
/// success and on error alike.
pub fn exchange(target: &Target, params: &RequestParams) -> Result<Vec<u8>> {
    let mut stream = connect(target)?;

    let request = req::build(target, params)?;

    stream.write_all(&request).map_err(Error::Write)?;
    stream.flush().map_err(Error::Write)?;

    trace!("Sent request: {} bytes", request.len());

    read_to_end(stream)
}

#[cfg(test)]
mod test {
    use std::io;

    use super::*;

    /// Reader handing out its data a few bytes per read call.
    struct Trickle {
        data: &'static [u8],
        pos: usize,
    }

    impl io::Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = (self.data.len() - self.pos).min(3).min(buf.len());
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn test_read_to_end_collects_all() {
        let reader = Trickle {
            data: b"HTTP/1.0 200 OK\r\n\r\nhello",
            pos: 0,
        };

        let buf = read_to_end(reader).unwrap();

        assert_eq!(buf, b"HTTP/1.0 200 OK\r\n\r\nhello");
    }

    #[test]
    fn test_read_to_end_empty() {
        let buf = read_to_end(io::empty()).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_read_error() {
        struct Failing;

        impl io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::ConnectionReset, "gone"))
            }
        }

        let r = read_to_end(Failing);
        assert!(matches!(r, Err(Error::Read(_))));
    }
}
