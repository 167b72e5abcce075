//! Core library components.
//!
//! The bundle and reference modules are pure; the rest wrap remote services.

pub mod bundle;
pub mod config;
pub mod constants;
pub mod drive;
pub mod format;
pub mod notify;
pub mod reference;
pub mod remote;
