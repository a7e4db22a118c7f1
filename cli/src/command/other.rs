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

//! Define the commands supported by the CLI that
//! are not related to account identifiers.

use super::*;

/// Other commands, not related to account identifiers.
#[derive(StructOpt, Debug, Clone)]
pub enum Command {
    ClassifyReject(ClassifyReject),
    ParseTokens(ParseTokens),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self) -> Result<(), CommandError> {
        match self {
            Command::ClassifyReject(cmd) => cmd.run().await,
            Command::ParseTokens(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the transfer error a ledger reject message maps to.
pub struct ClassifyReject {
    message: String,
}

#[async_trait::async_trait]
impl CommandT for ClassifyReject {
    async fn run(&self) -> Result<(), CommandError> {
        match reject::classify(&self.message) {
            Some(transfer_error) => println!("{:?}: {}", transfer_error, transfer_error),
            None => println!("unclassified"),
        }
        Ok(())
    }
}

#[derive(StructOpt, Debug, Clone)]
/// Show the number of e8s in a decimal ICP amount.
pub struct ParseTokens {
    #[structopt(value_name = "amount")]
    amount: String,
}

#[async_trait::async_trait]
impl CommandT for ParseTokens {
    async fn run(&self) -> Result<(), CommandError> {
        let tokens: Tokens = self.amount.parse()?;
        println!("{} e8s", tokens.e8s());
        Ok(())
    }
}
