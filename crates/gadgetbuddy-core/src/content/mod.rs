//! Content-source port and evidence extraction.

pub mod evidence;
pub mod source;
