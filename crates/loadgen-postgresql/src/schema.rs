//! DDL for the shop tables.
//!
//! Prices are stored as DOUBLE PRECISION: the generator computes purchase
//! prices in f64 and downstream consumers only compare, never account.

pub const DROP_TABLES: &str =
    "DROP TABLE IF EXISTS purchases; DROP TABLE IF EXISTS users; DROP TABLE IF EXISTS items;";

pub const CREATE_USERS: &str = "CREATE TABLE users
    (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100),
        email VARCHAR(255),
        is_vip BOOLEAN DEFAULT FALSE,
        created_at TIMESTAMPTZ DEFAULT now(),
        updated_at TIMESTAMPTZ DEFAULT now()
    )";

pub const CREATE_ITEMS: &str = "CREATE TABLE items
    (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100),
        price DOUBLE PRECISION,
        daily_inventory INT,
        created_at TIMESTAMPTZ DEFAULT now(),
        updated_at TIMESTAMPTZ DEFAULT now()
    )";

pub const CREATE_PURCHASES: &str = "CREATE TABLE purchases
    (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT REFERENCES users(id),
        item_id BIGINT REFERENCES items(id),
        status SMALLINT DEFAULT 1,
        quantity INT DEFAULT 1,
        purchase_price DOUBLE PRECISION,
        created_at TIMESTAMPTZ DEFAULT now(),
        updated_at TIMESTAMPTZ DEFAULT now()
    )";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_carry_timestamps() {
        for ddl in [CREATE_USERS, CREATE_ITEMS, CREATE_PURCHASES] {
            assert!(ddl.contains("created_at"));
            assert!(ddl.contains("updated_at"));
        }
    }

    #[test]
    fn test_purchases_reference_users_and_items() {
        assert!(CREATE_PURCHASES.contains("REFERENCES users(id)"));
        assert!(CREATE_PURCHASES.contains("REFERENCES items(id)"));
    }

    #[test]
    fn test_drop_order_removes_referencing_table_first() {
        let purchases = DROP_TABLES.find("purchases").unwrap();
        assert!(purchases < DROP_TABLES.find("users").unwrap());
        assert!(purchases < DROP_TABLES.find("items").unwrap());
    }
}
