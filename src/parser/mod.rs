//! Parser layer for reading tab-delimited tables

mod tsv;

pub use self::tsv::TsvParser;
