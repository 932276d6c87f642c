//! # Enum-Coded Fields
//!
//! The backend sends several closed sets as upper-case strings. Decoding never fails:
//! an unrecognized code maps to a fixed fallback variant per field.
//!
//! | Field | Codes | Fallback |
//! |---|---|---|
//! | transaction / category `type` | `INCOME`, `EXPENSE` | `EXPENSE` |
//! | `budgetType` | `DAILY`, `WEEKLY`, `MONTHLY` | `MONTHLY` |
//! | `fillingPlan` | `DAILY`, `WEEKLY`, `MONTHLY` | `MONTHLY` |
//! | `recurrence` | `NONE`, `DAILY`, `WEEKLY`, `MONTHLY` | `NONE` |
//!
//! The fallbacks are part of the displayed financial meaning (an unknown transaction
//! type shows as an expense), so they must not change.

use std::fmt;

/// A closed set of wire codes with a fallback for unknown values.
pub trait CodeEnum: Sized + Copy + 'static {
    /// Variant used for any code [`parse_code`](CodeEnum::parse_code) does not recognize.
    const FALLBACK: Self;

    /// All variants, in display order.
    const ALL: &'static [Self];

    /// The exact wire code.
    fn code(self) -> &'static str;

    /// Strict decode: `None` for anything but an exact code.
    fn parse_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.code() == code)
    }

    /// Lenient decode applying the fallback policy.
    fn from_code(code: &str) -> Self {
        Self::parse_code(code).unwrap_or_else(|| {
            tracing::debug!(code, fallback = Self::FALLBACK.code(), "Unknown enum code, using fallback");
            Self::FALLBACK
        })
    }

    /// Case-insensitive strict decode, for user input.
    fn parse_input(input: &str) -> Option<Self> {
        Self::parse_code(&input.trim().to_ascii_uppercase())
    }
}

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, fallback = $fallback:ident { $($variant:ident => $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl CodeEnum for $name {
            const FALLBACK: Self = $name::$fallback;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.code())
            }
        }
    };
}

code_enum! {
    /// Direction of money flow. Also used as a category's kind.
    TransactionType, fallback = Expense {
        Income => "INCOME",
        Expense => "EXPENSE",
    }
}

code_enum! {
    /// Period a budget amount covers.
    BudgetType, fallback = Monthly {
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
    }
}

code_enum! {
    /// How often the user plans to top up a savings goal.
    FillingPlan, fallback = Monthly {
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
    }
}

code_enum! {
    /// Repeat schedule of a payment reminder.
    Recurrence, fallback = None {
        None => "NONE",
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
    }
}

impl TransactionType {
    pub fn is_income(self) -> bool {
        self == TransactionType::Income
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_decode() {
        assert_eq!(TransactionType::from_code("INCOME"), TransactionType::Income);
        assert_eq!(BudgetType::from_code("WEEKLY"), BudgetType::Weekly);
        assert_eq!(FillingPlan::from_code("DAILY"), FillingPlan::Daily);
        assert_eq!(Recurrence::from_code("MONTHLY"), Recurrence::Monthly);
    }

    #[test]
    fn test_unknown_codes_use_fallbacks() {
        assert_eq!(TransactionType::from_code("TRANSFER"), TransactionType::Expense);
        assert_eq!(BudgetType::from_code("YEARLY"), BudgetType::Monthly);
        assert_eq!(FillingPlan::from_code(""), FillingPlan::Monthly);
        assert_eq!(Recurrence::from_code("QUARTERLY"), Recurrence::None);
    }

    #[test]
    fn test_wire_decode_is_case_sensitive() {
        assert_eq!(TransactionType::from_code("income"), TransactionType::Expense);
        assert_eq!(TransactionType::parse_input(" income "), Some(TransactionType::Income));
        assert_eq!(BudgetType::parse_input("yearly"), None);
    }

    #[test]
    fn test_code_round_trip() {
        for variant in Recurrence::ALL {
            assert_eq!(Recurrence::from_code(variant.code()), *variant);
        }
        assert_eq!(TransactionType::Income.to_string(), "INCOME");
    }
}
