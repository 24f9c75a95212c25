//! Error types shared across the lucid pipeline.

mod request;

pub use request::*;
