//! Search over a loaded taxonomy
//!
//! Produces the per-filter sections the rendering layer displays. The search
//! never fails: a taxonomy that did not load is handled upstream by the
//! session, and tags without records are skipped.

pub mod filter;

pub use filter::{FilterSection, PALETTE, TagMatch, filter_tags, matches, palette_color};
