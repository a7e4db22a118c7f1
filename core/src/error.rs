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

use crate::{BlockHeight, Tokens};

/// Errors describing transfers the ledger refused to apply.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TransferError {
    #[error("the sender is not allowed to send funds")]
    InvalidSender,

    #[error("the transaction duplicates the one in block {duplicate_of}")]
    TxDuplicate { duplicate_of: BlockHeight },

    #[error("insufficient funds, the current balance is {balance}")]
    InsufficientFunds { balance: Tokens },

    #[error("the transaction was created in the future")]
    TxCreatedInFuture,

    #[error("the transaction is older than {allowed_window_secs} seconds")]
    TxTooOld { allowed_window_secs: u64 },
}
