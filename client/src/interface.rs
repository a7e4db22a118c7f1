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

//! Provide an abstract trait for the ledger client and the necessary types.
//!
//! The [ClientT] trait defines one method for each ledger call the client supports.

pub use nns_ledger_core::*;

pub use crate::backend::{Backend, CallError, Channel};
pub use crate::error::Error;
pub use crate::nns_dapp::{CreateSubAccountResponse, SubAccountDetails};
pub use nns_ledger_core::message::TransferRequest;

/// Trait for clients of the ledger canister.
#[async_trait::async_trait]
pub trait ClientT: Send + Sync {
    /// Fetch the balance of `account`.
    ///
    /// If `certified` is true the balance is fetched with an update call, otherwise with a
    /// faster but uncertified query call.
    ///
    /// ```no_run
    /// # use nns_ledger_client::*;
    /// # async fn example(client: Client<backend::Scripted>, owner: Principal) -> Result<(), Error> {
    /// let account = AccountIdentifier::new(&owner, None);
    /// let balance = client.account_balance(&account, true).await?;
    /// println!("{} ICP", balance);
    /// # Ok(())
    /// # }
    /// ```
    async fn account_balance(
        &self,
        account: &AccountIdentifier,
        certified: bool,
    ) -> Result<Tokens, Error>;

    /// Same as [ClientT::account_balance] with a certified reply.
    async fn account_balance_certified(&self, account: &AccountIdentifier) -> Result<Tokens, Error> {
        self.account_balance(account, true).await
    }

    /// Transfer funds from the caller to `request.to`.
    ///
    /// Returns the height of the block that includes the transfer. If the ledger refused the
    /// transfer for a known reason the inner result holds a [TransferError].
    ///
    /// ```no_run
    /// # use nns_ledger_client::*;
    /// # async fn example(client: Client<backend::Scripted>, to: AccountIdentifier) -> Result<(), Error> {
    /// let request = TransferRequest {
    ///     memo: Some(7),
    ///     ..TransferRequest::new(to, "1.5".parse().unwrap())
    /// };
    /// match client.transfer(request).await? {
    ///     Ok(block_height) => println!("included in block {}", block_height),
    ///     Err(TransferError::InsufficientFunds { balance }) => println!("only {} ICP left", balance),
    ///     Err(error) => println!("transfer failed: {}", error),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn transfer(
        &self,
        request: TransferRequest,
    ) -> Result<Result<BlockHeight, TransferError>, Error>;

    /// Create a named sub-account for the caller through the NNS dapp canister.
    async fn create_sub_account(&self, name: &str) -> Result<SubAccountDetails, Error>;
}
