//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated category table from build script
include!(concat!(env!("OUT_DIR"), "/categories.rs"));
