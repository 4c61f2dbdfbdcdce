use crate::domain::payment::PaymentResult;
use crate::error::Result;
use std::io::Write;

/// Writes payment results as CSV rows.
///
/// Columns: `id,external_id,status,provider,gross_amount,fee,net_amount`.
pub struct PaymentResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PaymentResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, result: &PaymentResult) -> Result<()> {
        self.writer.serialize(result)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::ProviderOutcome;
    use rust_decimal_macros::dec;

    #[test]
    fn test_writes_header_and_rows() {
        let outcome = ProviderOutcome::new("SP-19283", "success");
        let result = PaymentResult::new(42, &outcome, "SecurePay", dec!(120.50), dec!(4.00));

        let mut buffer = Vec::new();
        {
            let mut writer = PaymentResultWriter::new(&mut buffer);
            writer.write_result(&result).unwrap();
            writer.flush().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("id,external_id,status,provider,gross_amount,fee,net_amount")
        );
        assert_eq!(lines.next(), Some("42,SP-19283,approved,SecurePay,120.50,4.00,116.50"));
        assert_eq!(lines.next(), None);
    }
}
