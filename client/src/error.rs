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

use nns_ledger_core::message::DecodeError;

use crate::backend::CallError;

/// Error that may be returned by any of the [crate::ClientT] methods
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Decoding a protobuf reply of the ledger canister failed
    #[error("Decoding the received data failed")]
    MalformedResponse(#[from] DecodeError),

    /// Encoding a request to or decoding a reply from the NNS dapp canister failed
    ///
    /// The NNS dapp speaks Candid, so its malformed replies end up here and not in
    /// [Error::MalformedResponse].
    #[error("Candid encoding or decoding for the NNS dapp failed: {0}")]
    Candid(#[from] candid::Error),

    /// The canister rejected the call and the reject message did not map to a known error.
    ///
    /// The message is passed on unchanged.
    #[error("{message}")]
    Rejected { message: String },

    /// Error from the underlying transport
    #[error("Error from the underlying transport: {0}")]
    Transport(String),

    /// The caller has no account in the NNS dapp
    #[error("No NNS dapp account found for the caller")]
    AccountNotFound,

    /// The requested sub-account name is too long
    #[error("Sub-account name {name} is too long")]
    NameTooLong { name: String },

    /// The caller reached the maximum number of sub-accounts
    #[error("Sub-account limit exceeded")]
    SubAccountLimitExceeded,
}

impl From<CallError> for Error {
    fn from(error: CallError) -> Self {
        match error {
            CallError::Reject { message } => Error::Rejected { message },
            CallError::Transport(message) => Error::Transport(message),
        }
    }
}
