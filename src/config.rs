//! Configuration loader and schema types.
//!
//! Settings cover where the duplicate report goes and how the stats plot
//! is laid out. Everything is optional; defaults reproduce the stock
//! behavior (`dups.txt`, 20 histogram bins, rating axis -1..110).

mod load;
mod schema;

pub use schema::*;
