use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub number: String,
    pub pin: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cash {
    pub amount: Decimal,
    pub change: Decimal,
}

/// How a payment was made. Exactly one shape applies.
///
/// Matches over this type must name every variant; do not add wildcard arms,
/// so a new variant fails to compile until every consumer handles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentMethod {
    #[serde(alias = "card")]
    CreditCard(CreditCard),
    Cash(Cash),
}

impl From<CreditCard> for PaymentMethod {
    fn from(card: CreditCard) -> Self {
        Self::CreditCard(card)
    }
}

impl From<Cash> for PaymentMethod {
    fn from(cash: Cash) -> Self {
        Self::Cash(cash)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::CreditCard(CreditCard { number, pin }) => {
                write!(f, "Card No. {number} pin {pin}")
            }
            PaymentMethod::Cash(Cash { amount, change }) => {
                write!(f, "Cash {amount} change {change}")
            }
        }
    }
}

/// Formats a payment for display.
pub fn format_payment(pm: &PaymentMethod) -> String {
    pm.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_credit_card() {
        let pm = PaymentMethod::CreditCard(CreditCard {
            number: "0000...".to_string(),
            pin: "000".to_string(),
        });
        assert_eq!(format_payment(&pm), "Card No. 0000... pin 000");
    }

    #[test]
    fn test_format_cash() {
        let pm = PaymentMethod::Cash(Cash {
            amount: dec!(20),
            change: dec!(3.5),
        });
        assert_eq!(format_payment(&pm), "Cash 20 change 3.5");
    }

    #[test]
    fn test_format_keeps_decimal_scale() {
        let pm: PaymentMethod = Cash {
            amount: dec!(20.00),
            change: dec!(0),
        }
        .into();
        assert_eq!(format_payment(&pm), "Cash 20.00 change 0");
    }

    #[test]
    fn test_json_shape() {
        let pm: PaymentMethod = Cash {
            amount: dec!(20),
            change: dec!(3.5),
        }
        .into();
        let json = serde_json::to_value(&pm).unwrap();
        assert_eq!(json["kind"], "cash");
        assert_eq!(json["amount"], "20");
        assert_eq!(json["change"], "3.5");

        let back: PaymentMethod = serde_json::from_value(json).unwrap();
        assert_eq!(back, pm);
    }

    #[test]
    fn test_json_accepts_card_alias() {
        let json = r#"{"kind":"card","number":"0000...","pin":"000"}"#;
        let pm: PaymentMethod = serde_json::from_str(json).unwrap();
        assert!(matches!(pm, PaymentMethod::CreditCard(_)));
        assert_eq!(serde_json::to_value(&pm).unwrap()["kind"], "credit_card");
    }

    #[test]
    fn test_json_credit_card_tag() {
        let json = r#"{"kind":"credit_card","number":"4111111111111111","pin":"1234"}"#;
        let pm: PaymentMethod = serde_json::from_str(json).unwrap();
        assert_eq!(format_payment(&pm), "Card No. 4111111111111111 pin 1234");
    }
}
