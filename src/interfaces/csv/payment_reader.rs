use crate::domain::card::ConstrainedCreditCard;
use crate::domain::payment::{Cash, PaymentMethod};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    #[serde(alias = "credit_card")]
    Card,
    Cash,
}

/// One raw CSV row. Which columns are required depends on `kind`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRecord {
    pub kind: PaymentKind,
    pub number: Option<String>,
    pub pin: Option<String>,
    pub amount: Option<Decimal>,
    pub change: Option<Decimal>,
}

impl TryFrom<PaymentRecord> for PaymentMethod {
    type Error = PaymentError;

    fn try_from(record: PaymentRecord) -> Result<Self> {
        match record.kind {
            PaymentKind::Card => {
                let (Some(number), Some(pin)) = (record.number, record.pin) else {
                    return Err(PaymentError::RecordError(
                        "card record requires number and pin".to_string(),
                    ));
                };
                Ok(ConstrainedCreditCard::new(number, pin)?.into())
            }
            PaymentKind::Cash => {
                let (Some(amount), Some(change)) = (record.amount, record.change) else {
                    return Err(PaymentError::RecordError(
                        "cash record requires amount and change".to_string(),
                    ));
                };
                Ok(Cash { amount, change }.into())
            }
        }
    }
}

/// Reads payments from a CSV source.
///
/// Card numbers are validated on the way in, so every yielded
/// `PaymentMethod::CreditCard` has passed the length constraint.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields one result per data row.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentMethod>> {
        self.reader
            .into_deserialize::<PaymentRecord>()
            .map(|result| -> Result<PaymentMethod> { PaymentMethod::try_from(result?) })
    }
}
