//! File I/O for PolyWedge.
//!
//! This crate covers both ends of the pipeline's file boundary:
//!
//! - **PWDG** - the versioned binary wedge format ([`encode`], [`decode`],
//!   [`save_wedges`], [`load_wedges`])
//! - **STL** - triangle import feeding the converter ([`load_stl`]),
//!   binary and ASCII
//!
//! The codec is a stateless single-pass transform: encoding writes each
//! field explicitly in little-endian order and decoding is its bit-exact
//! inverse. File access happens only in the thin `save_*`/`load_*`
//! wrappers; everything else operates on byte slices.
//!
//! # Example
//!
//! ```no_run
//! use wedge_convert::process_batch;
//! use wedge_io::{load_stl, save_wedges};
//!
//! let triangles = load_stl("model.stl").unwrap();
//! let result = process_batch(&triangles);
//! save_wedges(&result.wedges, "model.pwdg").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod pwdg;
mod stl;

pub use error::{IoError, IoResult};
pub use pwdg::{
    decode, encode, encode_with_timestamp, load_wedges, save_wedges, HEADER_SIZE, RECORD_SIZE,
    SIGNATURE, VERSION,
};
pub use stl::{load_stl, parse_stl};
