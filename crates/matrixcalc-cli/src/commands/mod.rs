//! Command implementations
//!
//! File commands load their operands, call the kernel once and render the
//! result as text or JSON. The interactive loop drives the same kernel calls
//! from prompts.

pub(crate) mod bench;
pub(crate) mod interactive;
pub(crate) mod linalg;
pub(crate) mod ops;
