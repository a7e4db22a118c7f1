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

//! Protobuf messages exchanged with the `*_pb` methods of the ledger canister.
//!
//! Field tags follow the ledger's `ledger.proto` and must not change.

use prost::Message as _;

pub use prost::DecodeError;

use crate::{BlockHeight as Height, Memo as MemoValue, SubAccount, TimestampNanos, Tokens};

#[derive(Clone, PartialEq, prost::Message)]
pub struct AccountIdentifier {
    /// All 32 bytes of the identifier, checksum included.
    #[prost(bytes = "vec", tag = "1")]
    pub hash: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Subaccount {
    #[prost(bytes = "vec", tag = "1")]
    pub sub_account: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Memo {
    #[prost(uint64, tag = "1")]
    pub memo: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TimeStamp {
    #[prost(uint64, tag = "1")]
    pub timestamp_nanos: u64,
}

/// Amount of ICP. Called `ICPTs` in the ledger schema.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Icpts {
    #[prost(uint64, tag = "1")]
    pub e8s: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Payment {
    #[prost(message, optional, tag = "1")]
    pub receiver_gets: Option<Icpts>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BlockHeight {
    #[prost(uint64, tag = "1")]
    pub height: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SendRequest {
    #[prost(message, optional, tag = "1")]
    pub memo: Option<Memo>,
    #[prost(message, optional, tag = "2")]
    pub payment: Option<Payment>,
    #[prost(message, optional, tag = "3")]
    pub max_fee: Option<Icpts>,
    #[prost(message, optional, tag = "4")]
    pub from_subaccount: Option<Subaccount>,
    #[prost(message, optional, tag = "5")]
    pub to: Option<AccountIdentifier>,
    #[prost(message, optional, tag = "6")]
    pub created_at: Option<BlockHeight>,
    #[prost(message, optional, tag = "7")]
    pub created_at_time: Option<TimeStamp>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AccountBalanceRequest {
    #[prost(message, optional, tag = "1")]
    pub account: Option<AccountIdentifier>,
}

/// Parameters of a transfer from the caller's account.
///
/// Only `to` and `amount` are required. Optional fields are sent only if they are set. In
/// particular `Some(0)` is sent as a memo of zero, not as a missing memo.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferRequest {
    pub to: crate::AccountIdentifier,
    pub amount: Tokens,
    pub memo: Option<MemoValue>,
    /// Maximum fee the caller is willing to pay. The ledger applies its default if absent.
    pub fee: Option<Tokens>,
    /// Sub-account of the caller to send from. The ledger uses [SubAccount::ZERO] if absent.
    pub from_sub_account: Option<SubAccount>,
    pub created_at_time: Option<TimestampNanos>,
}

impl TransferRequest {
    pub fn new(to: crate::AccountIdentifier, amount: Tokens) -> Self {
        TransferRequest {
            to,
            amount,
            memo: None,
            fee: None,
            from_sub_account: None,
            created_at_time: None,
        }
    }

    pub fn to_proto(&self) -> SendRequest {
        SendRequest {
            memo: self.memo.map(|memo| Memo { memo }),
            payment: Some(Payment {
                receiver_gets: Some(self.amount.to_proto()),
            }),
            max_fee: self.fee.map(|fee| fee.to_proto()),
            from_subaccount: self.from_sub_account.map(|sub_account| Subaccount {
                sub_account: sub_account.to_bytes().to_vec(),
            }),
            to: Some(self.to.to_proto()),
            created_at: None,
            created_at_time: self
                .created_at_time
                .map(|timestamp_nanos| TimeStamp { timestamp_nanos }),
        }
    }
}

/// Argument of the `account_balance_pb` method.
pub fn encode_balance_request(account: &crate::AccountIdentifier) -> Vec<u8> {
    AccountBalanceRequest {
        account: Some(account.to_proto()),
    }
    .encode_to_vec()
}

/// Parse the reply of the `account_balance_pb` method.
pub fn decode_balance_response(bytes: &[u8]) -> Result<Tokens, DecodeError> {
    Icpts::decode(bytes).map(Tokens::from)
}

/// Argument of the `send_pb` method.
pub fn encode_transfer_request(request: &TransferRequest) -> Vec<u8> {
    request.to_proto().encode_to_vec()
}

/// Parse the reply of the `send_pb` method.
pub fn decode_transfer_response(bytes: &[u8]) -> Result<Height, DecodeError> {
    BlockHeight::decode(bytes).map(|block_height| block_height.height)
}
