//! Pair-related database queries.

use crate::pool::{Db, DbError, DbResult};
use tracing::debug;

/// Pair row from database: two token ids joined by a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairRow {
    pub token0: i64,
    pub token1: i64,
}

/// List all pairs in row order.
pub fn list_pairs(db: &Db) -> DbResult<Vec<PairRow>> {
    let pairs = db.with_conn(|conn| {
        let mut stmt = conn.prepare("SELECT token0, token1 FROM pairs")?;

        let rows = stmt.query_map([], |row| {
            Ok(PairRow {
                token0: row.get(0)?,
                token1: row.get(1)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })?;

    debug!(count = pairs.len(), "Fetched pairs");
    Ok(pairs)
}

/// Insert a pair.
#[cfg(any(test, feature = "test-support"))]
pub fn insert_pair(db: &Db, token0: i64, token1: i64) -> DbResult<()> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO pairs (token0, token1) VALUES (?1, ?2)",
            rusqlite::params![token0, token1],
        )?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;

    fn setup() -> Db {
        let mut db = Db::in_memory().unwrap();
        run_migrations(&mut db).unwrap();
        db
    }

    #[test]
    fn test_list_pairs_empty() {
        let db = setup();
        assert!(list_pairs(&db).unwrap().is_empty());
    }

    #[test]
    fn test_list_pairs_keeps_order_and_duplicates() {
        let db = setup();
        insert_pair(&db, 1, 2).unwrap();
        insert_pair(&db, 2, 3).unwrap();
        insert_pair(&db, 1, 2).unwrap();

        let pairs = list_pairs(&db).unwrap();
        assert_eq!(
            pairs,
            vec![
                PairRow { token0: 1, token1: 2 },
                PairRow { token0: 2, token1: 3 },
                PairRow { token0: 1, token1: 2 },
            ]
        );
    }

    #[test]
    fn test_list_pairs_without_table_fails() {
        let db = Db::in_memory().unwrap();
        assert!(matches!(list_pairs(&db), Err(DbError::Connection(_))));
    }
}
