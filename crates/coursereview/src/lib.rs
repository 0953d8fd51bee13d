//! Backend for a university course review site.
//!
//! Proxies professor ratings lookups, searches the course outline API for the
//! sections an instructor teaches, accepts reviews and contributions, and
//! serves generated placeholder data for the course success guide.

pub mod config;
pub mod guide;
pub mod identity;
pub mod outline;
pub mod ratings;
pub mod reviews;
pub mod server;
pub mod types;
