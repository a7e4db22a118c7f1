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

//! Client for the ICP ledger canister.
//!
//! [Client] encodes ledger requests, sends them through a [Backend] and decodes the replies. The
//! [Backend] owns the connection and the identity of the caller. [backend::Scripted] provides a
//! backend with canned replies which is useful for testing.
//!
//! Failed transfers are reported as [TransferError] values if the reject message of the ledger
//! can be classified by [reject::classify].
use lazy_static::lazy_static;

pub mod backend;
mod error;
mod interface;
mod nns_dapp;
pub mod reject;

pub use interface::*;

lazy_static! {
    /// Id of the ledger canister on the IC.
    pub static ref MAINNET_LEDGER_CANISTER_ID: Principal =
        Principal::from_text("ryjl3-tyaaa-aaaaa-aaaba-cai").unwrap();

    /// Id of the NNS dapp canister on the IC.
    pub static ref MAINNET_NNS_DAPP_CANISTER_ID: Principal =
        Principal::from_text("qoctq-giaaa-aaaaa-aaaea-cai").unwrap();
}

const ACCOUNT_BALANCE_METHOD: &str = "account_balance_pb";
const SEND_METHOD: &str = "send_pb";

/// Canisters the client talks to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    pub ledger_canister_id: Principal,
    pub nns_dapp_canister_id: Principal,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            ledger_canister_id: MAINNET_LEDGER_CANISTER_ID.clone(),
            nns_dapp_canister_id: MAINNET_NNS_DAPP_CANISTER_ID.clone(),
        }
    }
}

/// Client to interact with the ledger canister through a [Backend].
///
/// Implements [ClientT] for interacting with the ledger.
#[derive(Clone)]
pub struct Client<B> {
    backend: B,
    options: Options,
}

impl<B: Backend> Client<B> {
    /// Create a client that talks to the mainnet canisters.
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, Options::default())
    }

    pub fn with_options(backend: B, options: Options) -> Self {
        Client { backend, options }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

#[async_trait::async_trait]
impl<B: Backend> ClientT for Client<B> {
    async fn account_balance(
        &self,
        account: &AccountIdentifier,
        certified: bool,
    ) -> Result<Tokens, Error> {
        let channel = if certified {
            Channel::Update
        } else {
            Channel::Query
        };
        let arg = message::encode_balance_request(account);
        // The balance endpoint has no error contract, so rejects are never classified.
        let reply = self
            .backend
            .call(
                channel,
                &self.options.ledger_canister_id,
                ACCOUNT_BALANCE_METHOD,
                arg,
            )
            .await
            .map_err(|error| {
                if let CallError::Reject { message } = &error {
                    log::warn!("Balance request for {} rejected: {}", account, message);
                }
                error
            })?;
        Ok(message::decode_balance_response(&reply)?)
    }

    async fn transfer(
        &self,
        request: TransferRequest,
    ) -> Result<Result<BlockHeight, TransferError>, Error> {
        let arg = message::encode_transfer_request(&request);
        let reply = self
            .backend
            .update(&self.options.ledger_canister_id, SEND_METHOD, arg)
            .await;

        match reply {
            Ok(bytes) => Ok(Ok(message::decode_transfer_response(&bytes)?)),
            Err(CallError::Reject { message }) => match reject::classify(&message) {
                Some(transfer_error) => {
                    log::warn!("Transfer to {} failed: {}", request.to, transfer_error);
                    Ok(Err(transfer_error))
                }
                None => {
                    log::warn!("Transfer to {} rejected: {}", request.to, message);
                    Err(Error::Rejected { message })
                }
            },
            Err(error) => Err(error.into()),
        }
    }

    async fn create_sub_account(&self, name: &str) -> Result<SubAccountDetails, Error> {
        nns_dapp::create_sub_account(&self.backend, &self.options.nns_dapp_canister_id, name).await
    }
}
