//! Core types and utilities

pub mod units;

pub use units::{FlowRate, Length, Speed, Time, Volume};
