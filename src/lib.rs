//! Minimal blocking http 1.0 client library.
//!
//! One request per connection: serialize the request, send it, read
//! the response until the server closes the stream, then parse the
//! buffered bytes.

#[macro_use]
extern crate log;

mod error;
pub use error::Error;
pub(crate) use error::Result;

mod target;
pub use target::{MAX_HOST_LEN, Target, TargetError};

mod parser;

mod req;
pub use req::{build, write_request, Method, RequestParams};

mod res;
pub use res::Response;

pub mod transport;
pub use transport::exchange;

/// The one http version spoken and accepted.
pub(crate) const HTTP_10: &str = "HTTP/1.0";
