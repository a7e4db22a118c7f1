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

//! Named sub-accounts managed by the NNS dapp canister.
//!
//! This is not part of the ledger protocol. The NNS dapp keeps its own account records and has
//! to know the caller before it can create sub-accounts for them.

use candid::CandidType;
use serde::Deserialize;

use nns_ledger_core::Principal;

use crate::backend::Backend;
use crate::Error;

/// `create_sub_account` is called at most this many times per [create_sub_account].
const MAX_CREATE_ATTEMPTS: usize = 2;

#[derive(CandidType, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct SubAccountDetails {
    pub name: String,
    pub sub_account: Vec<u8>,
    pub account_identifier: String,
}

/// Reply of the `create_sub_account` method.
#[derive(CandidType, Deserialize, Clone, Debug, Eq, PartialEq)]
pub enum CreateSubAccountResponse {
    Ok(SubAccountDetails),
    AccountNotFound,
    NameTooLong,
    SubAccountLimitExceeded,
}

/// Create a sub-account called `name` for the caller.
///
/// If the NNS dapp does not know the caller yet, the caller is registered with `add_account` and
/// the creation is tried once more.
pub(crate) async fn create_sub_account<B: Backend>(
    backend: &B,
    canister_id: &Principal,
    name: &str,
) -> Result<SubAccountDetails, Error> {
    let mut response = call_create_sub_account(backend, canister_id, name).await?;
    let mut attempts = 1;

    while response == CreateSubAccountResponse::AccountNotFound && attempts < MAX_CREATE_ATTEMPTS {
        log::info!("No NNS dapp account for the caller, registering one");
        add_account(backend, canister_id).await?;
        response = call_create_sub_account(backend, canister_id, name).await?;
        attempts += 1;
    }

    match response {
        CreateSubAccountResponse::Ok(details) => Ok(details),
        CreateSubAccountResponse::AccountNotFound => Err(Error::AccountNotFound),
        CreateSubAccountResponse::NameTooLong => Err(Error::NameTooLong {
            name: name.to_string(),
        }),
        CreateSubAccountResponse::SubAccountLimitExceeded => Err(Error::SubAccountLimitExceeded),
    }
}

async fn call_create_sub_account<B: Backend>(
    backend: &B,
    canister_id: &Principal,
    name: &str,
) -> Result<CreateSubAccountResponse, Error> {
    let arg = candid::encode_one(name.to_string())?;
    let reply = backend
        .update(canister_id, "create_sub_account", arg)
        .await?;
    Ok(candid::decode_one(&reply)?)
}

/// Register the caller with the NNS dapp. The reply carries nothing we need.
async fn add_account<B: Backend>(backend: &B, canister_id: &Principal) -> Result<(), Error> {
    let arg = candid::encode_args(())?;
    backend.update(canister_id, "add_account", arg).await?;
    Ok(())
}
