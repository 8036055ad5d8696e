//! Log-record normalization and pagination core.
//!
//! Pure, synchronous functions over values already fetched by the file
//! service: nothing in here touches the filesystem or the network.

pub mod model;
pub mod service;
