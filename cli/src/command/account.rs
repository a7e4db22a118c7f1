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

//! Define the commands supported by the CLI related to account identifiers.

use super::*;

/// Account related commands
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    AccountId(ShowAccountId),
    SubAccount(ShowSubAccount),
    CheckAccountId(CheckAccountId),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self) -> Result<(), CommandError> {
        match self {
            Command::AccountId(cmd) => cmd.run().await,
            Command::SubAccount(cmd) => cmd.run().await,
            Command::CheckAccountId(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the ledger account identifier of a principal.
pub struct ShowAccountId {
    #[structopt(value_name = "principal", parse(try_from_str = parse_principal))]
    /// Principal in textual form, e.g. `2vxsx-fae`.
    principal: Principal,

    /// Index of the sub-account, between 0 and 255.
    #[structopt(long, env = "NNS_SUB_ACCOUNT", value_name = "index")]
    sub_account: Option<i64>,
}

#[async_trait::async_trait]
impl CommandT for ShowAccountId {
    async fn run(&self) -> Result<(), CommandError> {
        let sub_account = self.sub_account.map(SubAccount::from_id).transpose()?;
        let account_identifier = AccountIdentifier::new(&self.principal, sub_account);
        log::debug!(
            "derived account identifier for {} and sub-account {:?}",
            self.principal,
            self.sub_account
        );
        println!("{}", account_identifier);
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the sub-account derived from a principal.
pub struct ShowSubAccount {
    #[structopt(value_name = "principal", parse(try_from_str = parse_principal))]
    /// Principal in textual form.
    principal: Principal,
}

#[async_trait::async_trait]
impl CommandT for ShowSubAccount {
    async fn run(&self) -> Result<(), CommandError> {
        println!("{}", SubAccount::from_principal(&self.principal));
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Validate the checksum of a hex encoded account identifier.
pub struct CheckAccountId {
    #[structopt(value_name = "account_identifier")]
    account_identifier: String,
}

#[async_trait::async_trait]
impl CommandT for CheckAccountId {
    async fn run(&self) -> Result<(), CommandError> {
        let account_identifier = AccountIdentifier::from_hex(&self.account_identifier)?;
        println!("✓ {}", account_identifier);
        Ok(())
    }
}
