/// Credit card details collected at the prompt.
///
/// Nothing is validated: the expiration date is expected as `MM/YY` but kept
/// exactly as typed, and the CVV is held only so the details are complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCardInfo {
    card_number: String,
    expiration_date: String,
    cvv: String,
}

impl CreditCardInfo {
    pub fn new(
        card_number: impl Into<String>,
        expiration_date: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiration_date: expiration_date.into(),
            cvv: cvv.into(),
        }
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn expiration_date(&self) -> &str {
        &self.expiration_date
    }

    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// The masked form of the card number used in every message.
    pub fn last_four(&self) -> &str {
        last_four(&self.card_number)
    }
}

/// PayPal account details collected at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPalInfo {
    email: String,
}

impl PayPalInfo {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Returns the last four characters of `value`, or all of it when shorter.
///
/// Counts characters rather than bytes so multi-byte input never splits.
pub fn last_four(value: &str) -> &str {
    match value.char_indices().rev().nth(3) {
        Some((start, _)) => &value[start..],
        None => value,
    }
}
