//! Validation of a quote before it is created.

use crate::error::ValidationError;
use crate::model::{Quote, QuoteStatus, Service};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_quantity() -> Decimal {
    Decimal::ONE
}

/// A line item as submitted by a client, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDraft {
    #[serde(default, alias = "nome")]
    pub name: String,
    #[serde(default = "default_quantity", alias = "quantidade")]
    pub quantity: Decimal,
    #[serde(default, alias = "preco_unitario")]
    pub unit_price: Decimal,
}

/// A quote as submitted by a client, before validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteDraft {
    #[serde(default, alias = "titulo")]
    pub title: String,
    #[serde(default, alias = "cliente")]
    pub client_name: String,
    #[serde(default, alias = "descricao")]
    pub description: String,
    #[serde(default, alias = "forma_pagamento")]
    pub payment_method: String,
    /// `YYYY-MM-DD`, or blank for no deadline.
    #[serde(default, alias = "prazo_entrega")]
    pub delivery_deadline: String,
    #[serde(default, alias = "servicos")]
    pub services: Vec<ServiceDraft>,
}

/// A line item that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidService {
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

/// A draft that passed validation, with text trimmed and the deadline parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidQuoteDraft {
    pub title: String,
    pub client_name: String,
    pub description: String,
    pub payment_method: String,
    pub delivery_deadline: Option<NaiveDate>,
    pub services: Vec<ValidService>,
}

impl QuoteDraft {
    /// Checks the draft and reports the first problem found.
    ///
    /// Order: title, client, at least one service, deadline format, then each
    /// service's name, quantity and unit price in turn. Service indexes in
    /// errors are 1-based.
    pub fn validate(&self) -> Result<ValidQuoteDraft, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let client_name = self.client_name.trim();
        if client_name.is_empty() {
            return Err(ValidationError::MissingClient);
        }
        if self.services.is_empty() {
            return Err(ValidationError::NoServices);
        }

        let deadline = self.delivery_deadline.trim();
        let delivery_deadline = if deadline.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(deadline, "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidDeadline(deadline.to_string()))?,
            )
        };

        let services = self
            .services
            .iter()
            .enumerate()
            .map(|(i, s)| s.validate(i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidQuoteDraft {
            title: title.to_string(),
            client_name: client_name.to_string(),
            description: self.description.trim().to_string(),
            payment_method: self.payment_method.trim().to_string(),
            delivery_deadline,
            services,
        })
    }
}

impl ServiceDraft {
    fn validate(&self, index: usize) -> Result<ValidService, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingServiceName { index });
        }
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveQuantity { index });
        }
        if self.unit_price <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveUnitPrice { index });
        }
        Ok(ValidService {
            name: name.to_string(),
            quantity: self.quantity,
            unit_price: self.unit_price,
        })
    }
}

impl ValidQuoteDraft {
    /// Builds the stored form of the quote. Services get consecutive ids
    /// starting at `first_service_id`, in submission order. New quotes start
    /// out pending.
    pub fn into_quote(self, id: i64, created_at: NaiveDateTime, first_service_id: i64) -> Quote {
        let services = self
            .services
            .into_iter()
            .zip(first_service_id..)
            .map(|(s, service_id)| Service {
                id: service_id,
                quote_id: id,
                name: s.name,
                quantity: s.quantity,
                unit_price: s.unit_price,
            })
            .collect();
        Quote {
            id,
            title: self.title,
            client_name: self.client_name,
            description: self.description,
            payment_method: self.payment_method,
            delivery_deadline: self.delivery_deadline,
            status: QuoteStatus::Pending,
            created_at: Some(created_at),
            services,
        }
    }
}
