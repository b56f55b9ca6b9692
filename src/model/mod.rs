//! Data model for tab-delimited tables

mod key;
mod schema;
mod table;

pub use key::KeyBuilder;
pub use schema::Column;
pub use table::{Record, Table};
