//! Object storage client for uploaded images

mod http;

pub use http::HttpImageStorage;
