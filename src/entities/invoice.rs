//! Invoice entity

use crate::core::resource::Resource;
use serde::{Deserialize, Serialize};
use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;

/// An invoice raised for a set of purchased items.
///
/// Flat record: the id is assigned by the store at creation time, the
/// remaining fields are scalar business data. The date is carried as free
/// text, matching the wire contract.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    #[serde(skip_serializing_if = "crate::entities::zero_i64")]
    pub id: i64,

    #[serde(skip_serializing_if = "crate::entities::zero_f64")]
    pub amount: f64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub invoice_date: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub items: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub payment_terms: String,
}

impl Resource for Invoice {
    const SINGULAR: &'static str = "invoice";
    const PLURAL: &'static str = "invoices";
    const TITLE: &'static str = "Invoice";
    const COLUMNS: &'static [&'static str] =
        &["amount", "invoice_date", "items", "payment_terms"];
    const MIGRATION: &'static str = "\
        CREATE TABLE IF NOT EXISTS invoices (\
            id INTEGER PRIMARY KEY AUTOINCREMENT,\
            amount REAL NOT NULL,\
            invoice_date TEXT NOT NULL,\
            items TEXT NOT NULL,\
            payment_terms TEXT NOT NULL\
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
        query
            .bind(self.amount)
            .bind(self.invoice_date.clone())
            .bind(self.items.clone())
            .bind(self.payment_terms.clone())
    }
}
