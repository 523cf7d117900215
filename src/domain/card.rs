use crate::domain::constraint::{Checks, LengthConstraint};
use crate::domain::payment::{CreditCard, PaymentMethod};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Accepted card number lengths, in characters.
pub const CARD_NUMBER_LENGTH: LengthConstraint = LengthConstraint::new(13, 16);

/// A credit card whose number length has been validated.
///
/// Fields are private; every construction path (including deserialization)
/// goes through [`ConstrainedCreditCard::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CreditCard", into = "CreditCard")]
pub struct ConstrainedCreditCard {
    number: String,
    pin: String,
}

impl ConstrainedCreditCard {
    pub fn new(
        number: impl Into<String>,
        pin: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let number = number.into();
        let pin = pin.into();

        Checks::new("ConstrainedCreditCard")
            .length("number", &number, CARD_NUMBER_LENGTH)
            .finish()?;

        Ok(Self { number, pin })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }
}

impl TryFrom<CreditCard> for ConstrainedCreditCard {
    type Error = ValidationError;

    fn try_from(card: CreditCard) -> Result<Self, Self::Error> {
        Self::new(card.number, card.pin)
    }
}

impl From<ConstrainedCreditCard> for CreditCard {
    fn from(card: ConstrainedCreditCard) -> Self {
        Self {
            number: card.number,
            pin: card.pin,
        }
    }
}

impl From<ConstrainedCreditCard> for PaymentMethod {
    fn from(card: ConstrainedCreditCard) -> Self {
        PaymentMethod::CreditCard(card.into())
    }
}
