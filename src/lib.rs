#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

pub mod address;
pub mod app;
pub mod cli;
pub mod index;
pub mod primitives;
pub mod tracing;
