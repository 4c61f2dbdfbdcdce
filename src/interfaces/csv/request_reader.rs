use crate::domain::payment::{DEFAULT_CURRENCY, PaymentRequest};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct PaymentRecord {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    #[serde(default)]
    currency: Option<String>,
}

/// Reads payment requests from a CSV source with an `amount,currency` header.
///
/// The currency column may be empty or absent, in which case BRL is used.
/// Each row is validated into a `PaymentRequest`, so negative amounts and
/// malformed currencies surface as `InvalidRequest` for that row only.
pub struct PaymentRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentRequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and validates requests, one item per data row.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader.into_deserialize::<PaymentRecord>().map(|record| {
            let record = record.map_err(PaymentError::from)?;
            let currency = record.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
            PaymentRequest::new(record.amount, currency)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "amount, currency\n50, BRL\n120.50, usd";
        let results: Vec<Result<PaymentRequest>> =
            PaymentRequestReader::new(data.as_bytes()).requests().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.amount(), dec!(50));
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.amount(), dec!(120.50));
        assert_eq!(second.amount().to_string(), "120.50");
        assert_eq!(second.currency().code(), "USD");
    }

    #[test]
    fn test_reader_defaults_currency() {
        let data = "amount,currency\n10,\n20";
        let results: Vec<Result<PaymentRequest>> =
            PaymentRequestReader::new(data.as_bytes()).requests().collect();

        assert_eq!(results.len(), 2);
        for result in results {
            assert_eq!(result.unwrap().currency().code(), "BRL");
        }
    }

    #[test]
    fn test_reader_reports_bad_rows_individually() {
        let data = "amount,currency\nabc,BRL\n-10,BRL\n10,EURO\n5,BRL";
        let results: Vec<Result<PaymentRequest>> =
            PaymentRequestReader::new(data.as_bytes()).requests().collect();

        assert_eq!(results.len(), 4);
        assert!(matches!(results[0], Err(PaymentError::CsvError(_))));
        assert!(matches!(results[1], Err(PaymentError::InvalidRequest(_))));
        assert!(matches!(results[2], Err(PaymentError::InvalidRequest(_))));
        assert!(results[3].is_ok());
    }
}
