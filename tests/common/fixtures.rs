use chrono::NaiveDate;
use orcamento::{Quote, QuoteStatus, Service};
use rust_decimal::Decimal;

pub fn service(id: i64, name: &str, quantity: Decimal, unit_price: Decimal) -> Service {
    Service {
        id,
        quote_id: 42,
        name: name.to_string(),
        quantity,
        unit_price,
    }
}

/// Quote 42 for "Acme Co", created 2024-01-15, with two services totalling
/// R$ 800,00 and no description.
pub fn scenario_quote() -> Quote {
    Quote {
        id: 42,
        title: "Website".to_string(),
        client_name: "Acme Co".to_string(),
        description: String::new(),
        payment_method: "Pix".to_string(),
        delivery_deadline: NaiveDate::from_ymd_opt(2024, 3, 7),
        status: QuoteStatus::Pending,
        created_at: NaiveDate::from_ymd_opt(2024, 1, 15).and_then(|d| d.and_hms_opt(10, 30, 0)),
        services: vec![
            service(1, "Design", Decimal::new(2, 0), Decimal::new(15000, 2)),
            service(2, "Build", Decimal::ONE, Decimal::new(50000, 2)),
        ],
    }
}

pub fn quote_without_services() -> Quote {
    Quote {
        services: Vec::new(),
        ..scenario_quote()
    }
}

/// Enough line items to push the table past the first page.
pub fn quote_with_many_services(count: i64) -> Quote {
    Quote {
        services: (1..=count)
            .map(|i| {
                service(
                    i,
                    &format!("Service number {}", i),
                    Decimal::ONE,
                    Decimal::new(10000, 2),
                )
            })
            .collect(),
        ..scenario_quote()
    }
}

pub fn scenario_json() -> String {
    r#"{
        "id": 42,
        "title": "Website",
        "client_name": "Acme Co",
        "description": "",
        "created_at": "2024-01-15T10:30:00",
        "status": "pendente",
        "services": [
            {"id": 1, "quote_id": 42, "name": "Design", "quantity": 2, "unit_price": "150.00"},
            {"id": 2, "quote_id": 42, "name": "Build", "quantity": 1, "unit_price": "500.00"}
        ]
    }"#
    .to_string()
}
