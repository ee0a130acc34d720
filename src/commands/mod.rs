//! Top-level commands

pub mod compare;
