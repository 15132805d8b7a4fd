//! Database migrations.
//!
//! pairviz never writes to the database it exports from; the schema is used
//! to set up local databases and test fixtures.

use crate::pool::{Db, DbError, DbResult};
use rusqlite_migration::{Migrations, M};

/// SQL schema definition.
const SCHEMA: &str = include_str!("schema.sql");

/// Run all database migrations.
pub fn run_migrations(db: &mut Db) -> DbResult<()> {
    let migrations = Migrations::new(vec![M::up(SCHEMA)]);

    db.with_conn_mut(|conn| {
        migrations
            .to_latest(conn)
            .map_err(|e| DbError::Migration(e.to_string()))
    })
}
