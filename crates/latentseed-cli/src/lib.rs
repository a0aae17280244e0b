//! latentseed CLI library.
//!
//! Request loading, field encoders and the command implementations behind
//! the `latentseed` binary.

pub mod commands;
pub mod input;
pub mod output;
