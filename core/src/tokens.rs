// NNS Ledger Client
// Copyright (C) 2019 Monadic GmbH <radicle@monadic.xyz>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! `Tokens` amount type and its parsing tests.

use crate::message;

/// An amount of ICP, counted in e8s (10^-8 ICP).
///
/// ```rust
/// # use nns_ledger_core::Tokens;
/// let amount: Tokens = "3.5".parse().unwrap();
/// assert_eq!(amount, Tokens::from_e8s(350_000_000));
/// assert_eq!(amount.to_string(), "3.50000000");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Tokens {
    e8s: u64,
}

impl Tokens {
    pub const ZERO: Tokens = Tokens { e8s: 0 };
    pub const MAX: Tokens = Tokens { e8s: u64::MAX };

    /// Number of e8s in one ICP.
    pub const SUBDIVIDABLE_BY: u64 = 100_000_000;

    /// Maximum number of digits after the decimal point.
    const DECIMALS: usize = 8;

    /// Fee the ledger charges for a transfer.
    pub const DEFAULT_FEE: Tokens = Tokens { e8s: 10_000 };

    pub const fn from_e8s(e8s: u64) -> Self {
        Tokens { e8s }
    }

    pub const fn e8s(&self) -> u64 {
        self.e8s
    }

    pub fn to_proto(&self) -> message::Icpts {
        message::Icpts { e8s: self.e8s }
    }
}

impl From<message::Icpts> for Tokens {
    fn from(proto: message::Icpts) -> Self {
        Tokens::from_e8s(proto.e8s)
    }
}

impl core::fmt::Display for Tokens {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{}.{:08}",
            self.e8s / Tokens::SUBDIVIDABLE_BY,
            self.e8s % Tokens::SUBDIVIDABLE_BY
        )
    }
}

impl core::str::FromStr for Tokens {
    type Err = TokensParseError;

    /// Parse a decimal ICP amount like `"12"`, `"3.5"` or `".00000001"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (integral, fractional) = match s.split_once('.') {
            Some((integral, fractional)) => (integral, fractional),
            None => (s, ""),
        };

        if integral.is_empty() && fractional.is_empty() {
            return Err(TokensParseError::Empty);
        }
        if !integral
            .chars()
            .chain(fractional.chars())
            .all(|c| c.is_ascii_digit())
        {
            return Err(TokensParseError::InvalidDigit(s.to_string()));
        }
        if fractional.len() > Self::DECIMALS {
            return Err(TokensParseError::TooManyDecimals(fractional.len()));
        }

        let units: u64 = if integral.is_empty() {
            0
        } else {
            integral.parse().map_err(|_| TokensParseError::Overflow)?
        };
        // At most eight digits so this cannot overflow.
        let fraction: u64 = if fractional.is_empty() {
            0
        } else {
            format!("{:0<width$}", fractional, width = Self::DECIMALS)
                .parse()
                .map_err(|_| TokensParseError::Overflow)?
        };

        units
            .checked_mul(Self::SUBDIVIDABLE_BY)
            .and_then(|e8s| e8s.checked_add(fraction))
            .map(Tokens::from_e8s)
            .ok_or(TokensParseError::Overflow)
    }
}

/// Error for strings that do not describe an amount of [Tokens].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TokensParseError {
    #[error("the amount is empty")]
    Empty,

    #[error("the amount {0:?} contains characters other than digits and a single '.'")]
    InvalidDigit(String),

    #[error("the amount has {0} decimals but at most 8 are supported")]
    TooManyDecimals(usize),

    #[error("the amount does not fit into 64 bits of e8s")]
    Overflow,
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(s: &str) -> Result<Tokens, TokensParseError> {
        s.parse()
    }

    #[test]
    fn parse_integral_and_fractional() {
        assert_eq!(parse("3.5"), Ok(Tokens::from_e8s(350_000_000)));
        assert_eq!(parse("7"), Ok(Tokens::from_e8s(700_000_000)));
        assert_eq!(parse("7."), Ok(Tokens::from_e8s(700_000_000)));
        assert_eq!(parse(".5"), Ok(Tokens::from_e8s(50_000_000)));
        assert_eq!(parse("0.00000001"), Ok(Tokens::from_e8s(1)));
        assert_eq!(parse("0"), Ok(Tokens::ZERO));
    }

    #[test]
    fn parse_max() {
        assert_eq!(parse("184467440737.09551615"), Ok(Tokens::MAX));
        assert_eq!(parse("184467440737.09551616"), Err(TokensParseError::Overflow));
        assert_eq!(parse("99999999999999999999"), Err(TokensParseError::Overflow));
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(parse(""), Err(TokensParseError::Empty));
        assert_eq!(parse("."), Err(TokensParseError::Empty));
        assert_eq!(parse("1.000000001"), Err(TokensParseError::TooManyDecimals(9)));
        assert!(matches!(parse("1.2.3"), Err(TokensParseError::InvalidDigit(_))));
        assert!(matches!(parse("-1"), Err(TokensParseError::InvalidDigit(_))));
        assert!(matches!(parse("1e8"), Err(TokensParseError::InvalidDigit(_))));
    }

    #[test]
    fn display() {
        assert_eq!(Tokens::from_e8s(350_000_000).to_string(), "3.50000000");
        assert_eq!(Tokens::from_e8s(1).to_string(), "0.00000001");
        assert_eq!(Tokens::MAX.to_string(), "184467440737.09551615");
    }

    #[test]
    fn display_then_parse() {
        for _ in 0..100 {
            let tokens = Tokens::from_e8s(rand::random());
            assert_eq!(parse(&tokens.to_string()), Ok(tokens));
        }
    }
}
