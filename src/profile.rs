//! Identity of the company issuing the quote.

use crate::error::QuoteError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Company details printed in the header and under the issuer's signature.
///
/// Loaded from JSON; fields left out keep their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuerProfile {
    pub name: String,
    /// Text shown in the left header column. `\n` breaks lines.
    pub brand_mark: String,
    pub tax_id: String,
    pub address_lines: Vec<String>,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl Default for IssuerProfile {
    fn default() -> Self {
        Self {
            name: "Eighmen".to_string(),
            brand_mark: "•••\nEIGHMEN".to_string(),
            tax_id: "CNPJ: 00.000.000/0001-00".to_string(),
            address_lines: vec![
                "Rua Exemplo, nº 123, Bairro".to_string(),
                "Cidade - Estado, CEP 00000-000".to_string(),
            ],
            phone: "(11) 99999-9999".to_string(),
            email: "contato@eighmen.com.br".to_string(),
            website: "www.eighmen.com.br".to_string(),
        }
    }
}

impl IssuerProfile {
    pub fn from_json_str(json: &str) -> Result<Self, QuoteError> {
        let profile: IssuerProfile = serde_json::from_str(json)?;
        profile.check()?;
        Ok(profile)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuoteError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let profile = Self::from_json_str(&json)?;
        log::debug!("Loaded issuer profile '{}' from {}", profile.name, path.display());
        Ok(profile)
    }

    fn check(&self) -> Result<(), QuoteError> {
        if self.name.trim().is_empty() {
            return Err(QuoteError::Profile("issuer name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Name, tax id and address, one per line.
    pub fn identity_text(&self) -> String {
        join_present(
            [self.name.as_str(), self.tax_id.as_str()]
                .into_iter()
                .chain(self.address_lines.iter().map(String::as_str)),
        )
    }

    /// Phone, email and website, one per line.
    pub fn contact_text(&self) -> String {
        join_present([self.phone.as_str(), self.email.as_str(), self.website.as_str()])
    }
}

fn join_present<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
