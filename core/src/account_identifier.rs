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

//! `AccountIdentifier` is the address of a ledger account.
//!
//! An identifier is the SHA-224 hash of a principal and a [SubAccount], prefixed with the
//! big-endian CRC32 checksum of that hash:
//!
//! ```text
//! crc32(hash) || hash
//! hash = sha224("\x0Aaccount-id" || principal || sub_account)
//! ```
//!
//! The ledger derives identifiers the same way so the derivation must not change.

use candid::Principal;
use core::convert::TryFrom;
use sha2::{Digest, Sha224};

use crate::message;
use crate::SubAccount;

/// Length-prefixed domain separator hashed in front of every principal.
const DOMAIN_SEPARATOR: &[u8] = b"\x0Aaccount-id";

const CHECKSUM_LENGTH: usize = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountIdentifier([u8; AccountIdentifier::LENGTH]);

impl AccountIdentifier {
    pub const LENGTH: usize = 32;

    /// Derive the identifier of the account owned by `principal`.
    ///
    /// Uses [SubAccount::ZERO] if no sub-account is given.
    pub fn new(principal: &Principal, sub_account: Option<SubAccount>) -> Self {
        let mut hasher = Sha224::new();
        hasher.update(DOMAIN_SEPARATOR);
        hasher.update(principal.as_slice());
        hasher.update(sub_account.unwrap_or_default().as_bytes());
        let hash = hasher.finalize();

        let mut bytes = [0u8; Self::LENGTH];
        bytes[CHECKSUM_LENGTH..].copy_from_slice(&hash);
        let checksum = generate_checksum(&bytes[CHECKSUM_LENGTH..]);
        bytes[..CHECKSUM_LENGTH].copy_from_slice(&checksum);
        AccountIdentifier(bytes)
    }

    /// Parse an identifier from its 64 character hex representation and verify its checksum.
    pub fn from_hex(hex_str: &str) -> Result<Self, AccountIdentifierError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_slice(&bytes)
    }

    /// Build an identifier from its raw bytes and verify its checksum.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AccountIdentifierError> {
        let bytes = <[u8; Self::LENGTH]>::try_from(bytes).map_err(|_| {
            AccountIdentifierError::InvalidLength {
                length: bytes.len(),
            }
        })?;

        let found = &bytes[..CHECKSUM_LENGTH];
        let expected = generate_checksum(&bytes[CHECKSUM_LENGTH..]);
        if found != &expected[..] {
            return Err(AccountIdentifierError::InvalidChecksum {
                expected: hex::encode(expected),
                found: hex::encode(found),
            });
        }

        Ok(AccountIdentifier(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn to_bytes(&self) -> [u8; Self::LENGTH] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    /// The checksum-less part of the identifier.
    pub fn hash(&self) -> &[u8] {
        &self.0[CHECKSUM_LENGTH..]
    }

    /// Wire representation used in ledger requests.
    pub fn to_proto(&self) -> message::AccountIdentifier {
        message::AccountIdentifier {
            hash: self.0.to_vec(),
        }
    }
}

/// Big-endian CRC32 of `bytes`.
pub fn generate_checksum(bytes: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(bytes);
    hasher.finalize().to_be_bytes()
}

impl TryFrom<&message::AccountIdentifier> for AccountIdentifier {
    type Error = AccountIdentifierError;

    fn try_from(proto: &message::AccountIdentifier) -> Result<Self, Self::Error> {
        Self::from_slice(&proto.hash)
    }
}

impl TryFrom<String> for AccountIdentifier {
    type Error = AccountIdentifierError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        Self::from_hex(&input)
    }
}

impl From<AccountIdentifier> for String {
    fn from(account_identifier: AccountIdentifier) -> Self {
        account_identifier.to_hex()
    }
}

impl core::str::FromStr for AccountIdentifier {
    type Err = AccountIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl core::fmt::Display for AccountIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for AccountIdentifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Error returned when external data does not describe a valid [AccountIdentifier].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AccountIdentifierError {
    #[error("invalid hex encoding")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("an account identifier must be {} bytes long, got {length}", AccountIdentifier::LENGTH)]
    InvalidLength { length: usize },

    #[error("checksum mismatch, expected {expected} but found {found}")]
    InvalidChecksum { expected: String, found: String },
}
