//! File system moves used by the path-rename pass.
//!
//! Renames go through the [`Mover`] trait so the pass can run against
//! `git mv`, a plain `rename(2)`, or a recording stub in tests.

pub mod mover;

pub use mover::{FsMover, GitMover, MoveError, Mover};
