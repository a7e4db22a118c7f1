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

//! Basic types used to talk to the ICP ledger canister.

pub use candid::Principal;

pub mod message;

pub mod account_identifier;
pub use account_identifier::AccountIdentifier;

pub mod sub_account;
pub use sub_account::SubAccount;

mod tokens;
pub use tokens::{Tokens, TokensParseError};

mod error;
pub use error::TransferError;

/// Index of a block in the ledger.
pub type BlockHeight = u64;

/// Arbitrary number attached to a transfer by its sender.
pub type Memo = u64;

/// Nanoseconds since the UNIX epoch.
pub type TimestampNanos = u64;
