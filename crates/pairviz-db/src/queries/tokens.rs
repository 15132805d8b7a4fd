//! Token-related database queries.

use std::collections::HashMap;

use crate::pool::{Db, DbError, DbResult};
use tracing::debug;

/// Token id to display symbol.
pub type TokenMap = HashMap<i64, String>;

/// Token row from database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub id: i64,
    pub symbol: String,
}

/// List all tokens.
pub fn list_tokens(db: &Db) -> DbResult<Vec<TokenRow>> {
    let tokens = db.with_conn(|conn| {
        let mut stmt = conn.prepare("SELECT id, symbol FROM tokens")?;

        let rows = stmt.query_map([], |row| {
            Ok(TokenRow {
                id: row.get(0)?,
                symbol: row.get(1)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })?;

    debug!(count = tokens.len(), "Fetched tokens");
    Ok(tokens)
}

/// Load every token as an id to symbol map.
///
/// If an id shows up more than once the last row wins.
pub fn symbol_map(db: &Db) -> DbResult<TokenMap> {
    let tokens = list_tokens(db)?;
    Ok(tokens.into_iter().map(|t| (t.id, t.symbol)).collect())
}

/// Insert a token.
#[cfg(any(test, feature = "test-support"))]
pub fn insert_token(db: &Db, id: i64, symbol: &str) -> DbResult<()> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO tokens (id, symbol) VALUES (?1, ?2)",
            rusqlite::params![id, symbol],
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
    fn test_symbol_map() {
        let db = setup();
        insert_token(&db, 1, "WETH").unwrap();
        insert_token(&db, 2, "USDC").unwrap();

        let map = symbol_map(&db).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], "WETH");
        assert_eq!(map[&2], "USDC");
    }

    #[test]
    fn test_symbol_map_empty() {
        let db = setup();
        assert!(symbol_map(&db).unwrap().is_empty());
    }

    #[test]
    fn test_symbol_map_last_row_wins() {
        let db = Db::in_memory().unwrap();
        db.with_conn(|conn| {
            conn.execute_batch(
                "CREATE TABLE tokens (id INTEGER, symbol TEXT);
                 INSERT INTO tokens VALUES (1, 'OLD');
                 INSERT INTO tokens VALUES (1, 'NEW');",
            )?;
            Ok(())
        })
        .unwrap();

        let map = symbol_map(&db).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&1], "NEW");
    }
}
