//! dimchain: dimension chain (tolerance stack-up) editing
//!
//! A chain is an ordered list of linear dimensions, each with a nominal
//! value and an asymmetric tolerance interval. Summing them gives the
//! functional clearance range. Each dimension also carries the anchor of
//! its callout on a reference drawing, and the whole project persists as a
//! small JSON document.

pub mod cli;
pub mod core;
pub mod entities;
pub mod format;
