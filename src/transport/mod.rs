//! HTTP transport for the Text-to-Speech REST client.

mod http;

pub use http::{HttpTransport, TransportError};
