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

//! Define the command line parser and interface.

use nns_ledger_client::account_identifier::AccountIdentifierError;
use nns_ledger_client::sub_account::SubAccountIdOutOfRange;
use nns_ledger_client::TokensParseError;
use structopt::StructOpt;
use thiserror::Error as ThisError;

pub mod logger;

mod command;
use command::{account, other};

/// The type that captures the command line.
#[derive(StructOpt, Clone, Debug)]
#[structopt(max_term_width = 80)]
pub struct CommandLine {
    /// Log more. Repeat for debug and trace output. `RUST_LOG` overrides this.
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u64,

    #[structopt(subcommand)]
    pub command: Command,
}

impl CommandLine {
    pub async fn run(self) -> Result<(), CommandError> {
        self.command.run().await
    }
}

/// The supported [CommandLine] commands.
/// The commands are grouped by domain.
#[derive(StructOpt, Clone, Debug)]
pub enum Command {
    #[structopt(flatten)]
    Account(account::Command),

    #[structopt(flatten)]
    Other(other::Command),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(&self) -> Result<(), CommandError> {
        match self {
            Command::Account(cmd) => cmd.run().await,
            Command::Other(cmd) => cmd.run().await,
        }
    }
}

/// The trait that every command must implement.
#[async_trait::async_trait]
pub trait CommandT {
    async fn run(&self) -> Result<(), CommandError>;
}

/// Error returned by [CommandT::run].
#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error(transparent)]
    InvalidAccountIdentifier(#[from] AccountIdentifierError),

    #[error(transparent)]
    InvalidSubAccount(#[from] SubAccountIdOutOfRange),

    #[error(transparent)]
    InvalidAmount(#[from] TokensParseError),
}
