//! Payment entity

use crate::core::resource::Resource;
use serde::{Deserialize, Serialize};
use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;

/// A payment settling an invoice, referenced by its number.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    #[serde(skip_serializing_if = "crate::entities::zero_i64")]
    pub id: i64,

    #[serde(skip_serializing_if = "crate::entities::zero_f64")]
    pub amount: f64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub invoice_number: String,
}

impl Resource for Payment {
    const SINGULAR: &'static str = "payment";
    const PLURAL: &'static str = "payments";
    const TITLE: &'static str = "Payment";
    const COLUMNS: &'static [&'static str] = &["amount", "invoice_number"];
    const MIGRATION: &'static str = "\
        CREATE TABLE IF NOT EXISTS payments (\
            id INTEGER PRIMARY KEY AUTOINCREMENT,\
            amount REAL NOT NULL,\
            invoice_number TEXT NOT NULL\
        )";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.amount).bind(self.invoice_number.clone())
    }
}
