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

//! Recover [TransferError]s from the reject messages of the `send_pb` method.
//!
//! The protobuf interface of the ledger reports failed transfers only as free text. Matching on
//! that text depends on the exact wording of the ledger and is a stopgap until the ledger offers
//! structured errors. All patterns live in this module.

use lazy_static::lazy_static;
use regex::Regex;

use nns_ledger_core::{Tokens, TransferError};

/// Only messages carrying this marker come from the ledger canister itself.
const CANISTER_ERROR_MARKER: &str = "Reject code: 5";

const CREATED_IN_FUTURE: &str = "is in future";

lazy_static! {
    static ref INVALID_SENDER: Regex = Regex::new(r"Sending from (.*) is not allowed").unwrap();
    static ref TX_DUPLICATE: Regex = Regex::new(r"transaction.*duplicate.* in block (\d+)").unwrap();
    static ref INSUFFICIENT_FUNDS: Regex =
        Regex::new(r"debit account.*, current balance: (\d*(\.\d*)?)").unwrap();
    static ref TX_TOO_OLD: Regex = Regex::new(r"older than (\d+)").unwrap();
}

/// Map a reject message to a [TransferError].
///
/// Rules are tried in order and the first match wins. A rule whose captured number cannot be
/// parsed does not match. Returns `None` if no rule matches, in which case the caller should
/// pass the original message on.
pub fn classify(message: &str) -> Option<TransferError> {
    if !message.contains(CANISTER_ERROR_MARKER) {
        return None;
    }

    if INVALID_SENDER.is_match(message) {
        return Some(TransferError::InvalidSender);
    }

    if let Some(duplicate_of) = capture(&TX_DUPLICATE, message) {
        return Some(TransferError::TxDuplicate { duplicate_of });
    }

    if let Some(balance) = capture::<Tokens>(&INSUFFICIENT_FUNDS, message) {
        return Some(TransferError::InsufficientFunds { balance });
    }

    if message.contains(CREATED_IN_FUTURE) {
        return Some(TransferError::TxCreatedInFuture);
    }

    if let Some(allowed_window_secs) = capture(&TX_TOO_OLD, message) {
        return Some(TransferError::TxTooOld {
            allowed_window_secs,
        });
    }

    None
}

/// Parse the first capture group of `regex` in `message`.
fn capture<T: core::str::FromStr>(regex: &Regex, message: &str) -> Option<T> {
    regex
        .captures(message)
        .and_then(|captures| captures.get(1))
        .and_then(|group| group.as_str().parse().ok())
}
