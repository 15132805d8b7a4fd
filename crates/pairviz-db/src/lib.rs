//! pairviz database layer.
//!
//! Opens the token/pair database and exposes the two read-only queries the
//! graph export is built from.

#[cfg(any(test, feature = "test-support"))]
pub mod migrations;
pub mod pool;
pub mod queries;

pub use pool::{Db, DbError, DbResult};
pub use queries::pairs::PairRow;
pub use queries::tokens::{TokenMap, TokenRow};
