//! Filesystem and process helpers shared by the build steps.

pub mod fs;
pub mod process;
