//! The quote snapshot handed to the renderer.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle of a quote: pending → sent → accepted | rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    #[serde(alias = "pendente")]
    Pending,
    #[serde(alias = "enviado")]
    Sent,
    #[serde(alias = "aceito")]
    Accepted,
    #[serde(alias = "rejeitado")]
    Rejected,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid quote status: '{0}'")]
pub struct ParseStatusError(pub String);

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 4] = [
        QuoteStatus::Pending,
        QuoteStatus::Sent,
        QuoteStatus::Accepted,
        QuoteStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Accepted => "accepted",
            QuoteStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuoteStatus {
    type Err = ParseStatusError;

    /// Accepts the English names and the legacy Portuguese ones, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "pendente" => Ok(QuoteStatus::Pending),
            "sent" | "enviado" => Ok(QuoteStatus::Sent),
            "accepted" | "aceito" => Ok(QuoteStatus::Accepted),
            "rejected" | "rejeitado" => Ok(QuoteStatus::Rejected),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// One line item. Display order is the order within [`Quote::services`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub quote_id: i64,
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

/// An amount left the range `Decimal` can represent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountOverflow {
    #[error("Subtotal of service {service} is out of range")]
    Subtotal { service: i64 },
    #[error("Total of quote {quote} is out of range")]
    Total { quote: i64 },
}

impl Service {
    /// quantity × unit price.
    pub fn subtotal(&self) -> Result<Decimal, AmountOverflow> {
        self.quantity
            .checked_mul(self.unit_price)
            .ok_or(AmountOverflow::Subtotal { service: self.id })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub title: String,
    pub client_name: String,
    /// Free-form observations printed near the end of the document.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub delivery_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub status: QuoteStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Quote {
    /// Sum of the item subtotals.
    pub fn subtotal(&self) -> Result<Decimal, AmountOverflow> {
        self.services.iter().try_fold(Decimal::ZERO, |acc, service| {
            acc.checked_add(service.subtotal()?)
                .ok_or(AmountOverflow::Total { quote: self.id })
        })
    }

    /// Equal to the subtotal: no discounts or surcharges apply.
    pub fn total(&self) -> Result<Decimal, AmountOverflow> {
        self.subtotal()
    }

    pub fn created_on(&self) -> Option<NaiveDate> {
        self.created_at.map(|ts| ts.date())
    }
}
