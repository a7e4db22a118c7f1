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

//! Miscellaneous helpers used throughout the client tests.

use prost::Message as _;
use rand::Rng;

use nns_ledger_client::backend::Scripted;
use nns_ledger_client::*;

/// Create a client backed by a [Scripted] backend and return a handle to the backend.
///
/// The handle shares its reply queue and call log with the client.
pub fn scripted_client() -> (Client<Scripted>, Scripted) {
    let backend = Scripted::new();
    (Client::new(backend.clone()), backend)
}

/// Random self-authenticating principal.
pub fn random_principal() -> Principal {
    let mut bytes = [0u8; 29];
    rand::thread_rng().fill(&mut bytes[..28]);
    // Suffix of self-authenticating ids.
    bytes[28] = 0x02;
    Principal::from_slice(&bytes)
}

pub fn random_sub_account() -> SubAccount {
    SubAccount::from(rand::random::<[u8; 32]>())
}

pub fn random_account_identifier() -> AccountIdentifier {
    AccountIdentifier::new(&random_principal(), Some(random_sub_account()))
}

pub fn random_tokens() -> Tokens {
    Tokens::from_e8s(rand::random())
}

/// Reject message as the replica reports errors of the ledger canister.
pub fn canister_reject(details: &str) -> String {
    format!(
        "Call was rejected:\n  Request ID: {}\n  Reject code: 5\n  Reject text: Canister {} trapped explicitly: {}",
        random_hex(32),
        MAINNET_LEDGER_CANISTER_ID.to_text(),
        details
    )
}

/// Reply of `account_balance_pb`.
pub fn balance_reply(balance: Tokens) -> Vec<u8> {
    balance.to_proto().encode_to_vec()
}

/// Reply of `send_pb`.
pub fn transfer_reply(block_height: BlockHeight) -> Vec<u8> {
    message::BlockHeight {
        height: block_height,
    }
    .encode_to_vec()
}

/// Reply of the NNS dapp `create_sub_account` method.
pub fn create_sub_account_reply(response: CreateSubAccountResponse) -> Vec<u8> {
    candid::encode_one(response).unwrap()
}

pub fn sub_account_details(name: &str) -> SubAccountDetails {
    let sub_account = random_sub_account();
    SubAccountDetails {
        name: name.to_string(),
        sub_account: sub_account.to_bytes().to_vec(),
        account_identifier: AccountIdentifier::new(&random_principal(), Some(sub_account))
            .to_hex(),
    }
}

pub fn random_hex(size: usize) -> String {
    (0..size)
        .map(|_| format!("{:x}", rand::thread_rng().gen_range(0, 16)))
        .collect()
}
