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

//! `SubAccount` type, and its validation tests.

use candid::Principal;
use core::convert::TryFrom;

/// Selects one of the many ledger accounts a principal controls.
///
/// Always exactly [SubAccount::LENGTH] bytes long.
///
/// ```rust
/// # use nns_ledger_core::SubAccount;
/// assert!(SubAccount::from_bytes(&[0u8; 32]).is_ok());
/// assert!(SubAccount::from_bytes(&[0u8; 31]).is_err());
/// assert_eq!(SubAccount::from_id(0).unwrap(), SubAccount::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SubAccount([u8; SubAccount::LENGTH]);

impl SubAccount {
    pub const LENGTH: usize = 32;

    /// The sub-account used when none is given.
    pub const ZERO: SubAccount = SubAccount([0; SubAccount::LENGTH]);

    /// Fails if `bytes` is not exactly [SubAccount::LENGTH] bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InvalidLength> {
        <[u8; Self::LENGTH]>::try_from(bytes)
            .map(SubAccount)
            .map_err(|_| InvalidLength {
                length: bytes.len(),
            })
    }

    /// Build the sub-account with index `id`, which is stored in the last byte.
    ///
    /// Only indices between 0 and 255 are supported.
    pub fn from_id(id: i64) -> Result<Self, SubAccountIdOutOfRange> {
        let index = u8::try_from(id).map_err(|_| SubAccountIdOutOfRange(id))?;
        let mut bytes = [0u8; Self::LENGTH];
        bytes[Self::LENGTH - 1] = index;
        Ok(SubAccount(bytes))
    }

    /// Derive a sub-account from a principal.
    ///
    /// The first byte holds the length of the principal, followed by the principal bytes. The
    /// remaining bytes are zero. Principals longer than 31 bytes are truncated.
    pub fn from_principal(principal: &Principal) -> Self {
        let principal = principal.as_slice();
        let length = principal.len().min(Self::LENGTH - 1);
        let mut bytes = [0u8; Self::LENGTH];
        bytes[0] = length as u8;
        bytes[1..=length].copy_from_slice(&principal[..length]);
        SubAccount(bytes)
    }

    pub fn to_bytes(&self) -> [u8; Self::LENGTH] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }
}

impl From<[u8; SubAccount::LENGTH]> for SubAccount {
    fn from(bytes: [u8; SubAccount::LENGTH]) -> Self {
        SubAccount(bytes)
    }
}

impl From<&Principal> for SubAccount {
    fn from(principal: &Principal) -> Self {
        SubAccount::from_principal(principal)
    }
}

impl TryFrom<&[u8]> for SubAccount {
    type Error = InvalidLength;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        SubAccount::from_bytes(bytes)
    }
}

impl TryFrom<Vec<u8>> for SubAccount {
    type Error = InvalidLength;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        SubAccount::from_bytes(&bytes)
    }
}

impl AsRef<[u8]> for SubAccount {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Display for SubAccount {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Error for byte blobs that are not exactly [SubAccount::LENGTH] bytes long.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("a sub-account must be {} bytes long, got {length}", SubAccount::LENGTH)]
pub struct InvalidLength {
    pub length: usize,
}

/// Error for sub-account indices outside of `0..=255`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("sub-account index {0} is out of range, expected 0 to 255")]
pub struct SubAccountIdOutOfRange(pub i64);
