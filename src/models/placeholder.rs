//! The hard-coded dashboard dataset.
//!
//! The fixture is compiled into the binary from `data/placeholder.json` and
//! validated before anything touches the database.

use std::collections::HashSet;

use serde::Deserialize;

use super::{
    customer::Customer,
    invoice::Invoice,
    revenue::{MAX_MONTH_LEN, Revenue},
    seed::SeedTable,
    user::SeedUser,
};
use crate::error::AppError;

const PLACEHOLDER_JSON: &str = include_str!("../../data/placeholder.json");

/// Everything the seed route writes.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderData {
    pub users: Vec<SeedUser>,
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
    pub revenue: Vec<Revenue>,
}

impl PlaceholderData {
    /// Parse and validate the compiled-in fixture.
    pub fn load() -> Result<Self, AppError> {
        Self::from_json(PLACEHOLDER_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let data: PlaceholderData =
            serde_json::from_str(json).map_err(|e| AppError::InvalidSeedData(e.to_string()))?;
        data.validate()?;
        Ok(data)
    }

    /// Rows this dataset contributes to `table`.
    pub fn row_count(&self, table: SeedTable) -> usize {
        match table {
            SeedTable::Users => self.users.len(),
            SeedTable::Customers => self.customers.len(),
            SeedTable::Invoices => self.invoices.len(),
            SeedTable::Revenue => self.revenue.len(),
        }
    }

    /// Check the dataset against the schema's constraints.
    ///
    /// # Errors
    ///
    /// `InvalidSeedData` when:
    /// - a user or customer id or email is duplicated
    /// - two invoices share customer, amount, status and date (same seed id)
    /// - an invoice references an unknown customer or has a negative amount
    /// - a revenue month is duplicated or longer than `VARCHAR(4)`
    pub fn validate(&self) -> Result<(), AppError> {
        let mut user_ids = HashSet::new();
        let mut user_emails = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id) {
                return Err(invalid(format!("duplicate user id {}", user.id)));
            }
            if !user_emails.insert(user.email.as_str()) {
                return Err(invalid(format!("duplicate user email {}", user.email)));
            }
        }

        let mut customer_ids = HashSet::new();
        let mut customer_emails = HashSet::new();
        for customer in &self.customers {
            if !customer_ids.insert(customer.id) {
                return Err(invalid(format!("duplicate customer id {}", customer.id)));
            }
            if !customer_emails.insert(customer.email.as_str()) {
                return Err(invalid(format!(
                    "duplicate customer email {}",
                    customer.email
                )));
            }
        }

        let mut invoice_ids = HashSet::new();
        for invoice in &self.invoices {
            if !invoice_ids.insert(invoice.seed_id()) {
                return Err(invalid(format!(
                    "duplicate invoice for customer {} ({} on {})",
                    invoice.customer_id, invoice.amount, invoice.date
                )));
            }
            if !customer_ids.contains(&invoice.customer_id) {
                return Err(invalid(format!(
                    "invoice references unknown customer {}",
                    invoice.customer_id
                )));
            }
            if invoice.amount < 0 {
                return Err(invalid(format!(
                    "invoice for customer {} has negative amount {}",
                    invoice.customer_id, invoice.amount
                )));
            }
        }

        let mut months = HashSet::new();
        for rev in &self.revenue {
            if rev.month.chars().count() > MAX_MONTH_LEN {
                return Err(invalid(format!("revenue month {:?} is too long", rev.month)));
            }
            if !months.insert(rev.month.as_str()) {
                return Err(invalid(format!("duplicate revenue month {}", rev.month)));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> AppError {
    AppError::InvalidSeedData(message)
}
