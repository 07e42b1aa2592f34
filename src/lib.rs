#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod error;
mod invoke;
mod listener_query;
mod parse;
mod types;

pub use crate::error::{LportsError, LportsResult};
pub use crate::listener_query::ListenerQuery;
pub use crate::types::*;
