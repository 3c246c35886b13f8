//! Subcommands of the `tower` binary.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check;
mod export;
mod play;

pub use check::Check;
pub use export::Export;
pub use play::Play;
