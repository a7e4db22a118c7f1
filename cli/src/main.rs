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

use nns_ledger_cli::{logger, CommandLine};
use structopt::StructOpt;

#[async_std::main]
async fn main() {
    let cmd_line = CommandLine::from_args();
    logger::init(cmd_line.verbose);
    if let Err(error) = cmd_line.run().await {
        log::error!("{}", error);
        std::process::exit(1);
    }
}
