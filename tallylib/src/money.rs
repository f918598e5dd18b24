//! Exact money arithmetic in integer cents

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// An amount of money stored as whole cents.
///
/// Keeping the smallest currency unit in an integer means sums and
/// per-line extensions stay exact; the decimal point only exists at
/// display time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero cents
    pub const ZERO: Money = Money(0);

    /// Create an amount from a count of cents
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// The amount as whole cents
    pub const fn cents(&self) -> u64 {
        self.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(rhs)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, amount| acc + amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format!("{}.{:02}", self.0 / 100, self.0 % 100);
        match f.width() {
            Some(width) => {
                // Money columns read right-aligned unless asked otherwise
                if f.align() == Some(fmt::Alignment::Left) {
                    write!(f, "{rendered:<width$}")
                } else {
                    write!(f, "{rendered:>width$}")
                }
            }
            None => write!(f, "{rendered}"),
        }
    }
}
