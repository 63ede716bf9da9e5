#![doc = include_str!("../README.md")]

pub mod commands;
pub mod errors;
pub mod logging;
pub mod ui;
