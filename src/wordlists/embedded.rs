//! Embedded word lists
//!
//! Default word lists compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/easy.rs"));
include!(concat!(env!("OUT_DIR"), "/medium.rs"));
include!(concat!(env!("OUT_DIR"), "/hard.rs"));
