//! PostgreSQL relational sink for shop-loadgen.
//!
//! Holds the `users`, `items`, and `purchases` tables the generator writes
//! to. Schema bootstrap, driver wiring, and statement text all live here;
//! the engine only sees the [`RelationalSink`] trait.

mod schema;

use anyhow::Context;
use async_trait::async_trait;
use loadgen_core::{CatalogEntry, NewItem, NewPurchase, NewUser, RelationalSink};
use tokio_postgres::{Client, NoTls};
use tracing::{debug, info};

pub use schema::{CREATE_ITEMS, CREATE_PURCHASES, CREATE_USERS, DROP_TABLES};

const INSERT_USER: &str =
    "INSERT INTO users (name, email, is_vip) VALUES ($1, $2, $3) RETURNING id";
const INSERT_ITEM: &str =
    "INSERT INTO items (name, price, daily_inventory) VALUES ($1, $2, $3) RETURNING id";
const INSERT_PURCHASE: &str =
    "INSERT INTO purchases (user_id, item_id, quantity, purchase_price) \
     VALUES ($1, $2, $3, $4) RETURNING id";
const SELECT_CATALOG: &str = "SELECT id, price FROM items ORDER BY id";

/// Relational sink backed by a single PostgreSQL connection.
pub struct PostgresStore {
    client: Client,
}

impl PostgresStore {
    /// Connect to PostgreSQL and verify the connection with a probe query.
    ///
    /// The connection task is spawned onto the current runtime; a dropped
    /// store tears it down.
    pub async fn connect(connection_string: &str) -> anyhow::Result<Self> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
            .await
            .context("Failed to connect to PostgreSQL")?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {e}");
            }
        });

        client.simple_query("SELECT 1").await?;

        Ok(Self { client })
    }

    /// Wrap an existing client (used by tests running against a container).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Drop and recreate the shop tables.
    pub async fn init_schema(&self) -> anyhow::Result<()> {
        info!("Initializing shop schema");
        self.client
            .batch_execute(DROP_TABLES)
            .await
            .context("Failed to drop existing tables")?;
        for ddl in [CREATE_USERS, CREATE_ITEMS, CREATE_PURCHASES] {
            debug!("DDL: {ddl}");
            self.client.batch_execute(ddl).await?;
        }
        Ok(())
    }

    /// Row count of the named table, for post-run verification.
    pub async fn row_count(&self, table: &str) -> anyhow::Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM \"{table}\"");
        let row = self.client.query_one(&sql, &[]).await?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }
}

#[async_trait]
impl RelationalSink for PostgresStore {
    async fn insert_user(&mut self, user: &NewUser) -> anyhow::Result<i64> {
        let row = self
            .client
            .query_one(INSERT_USER, &[&user.name, &user.email, &user.is_vip])
            .await
            .context("Failed to insert user")?;
        Ok(row.get(0))
    }

    async fn insert_item(&mut self, item: &NewItem) -> anyhow::Result<i64> {
        let row = self
            .client
            .query_one(
                INSERT_ITEM,
                &[&item.name, &item.price, &item.daily_inventory],
            )
            .await
            .context("Failed to insert item")?;
        Ok(row.get(0))
    }

    async fn insert_purchase(&mut self, purchase: &NewPurchase) -> anyhow::Result<i64> {
        let row = self
            .client
            .query_one(
                INSERT_PURCHASE,
                &[
                    &purchase.user_id,
                    &purchase.item_id,
                    &purchase.quantity,
                    &purchase.purchase_price,
                ],
            )
            .await
            .context("Failed to insert purchase")?;
        Ok(row.get(0))
    }

    async fn item_catalog(&mut self) -> anyhow::Result<Vec<CatalogEntry>> {
        let rows = self
            .client
            .query(SELECT_CATALOG, &[])
            .await
            .context("Failed to query item catalog")?;
        Ok(rows
            .iter()
            .map(|row| CatalogEntry {
                id: row.get(0),
                price: row.get(1),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_statements_return_ids() {
        for sql in [INSERT_USER, INSERT_ITEM, INSERT_PURCHASE] {
            assert!(sql.contains("RETURNING id"), "missing RETURNING: {sql}");
        }
    }

    #[test]
    fn test_catalog_query_shape() {
        assert!(SELECT_CATALOG.starts_with("SELECT id, price FROM items"));
    }
}
