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

//! Provides [init] to initialize the CLI logger.
use env_logger::fmt::Color;
use log::LevelFilter;
use std::io::Write as _;

/// Initializes [env_logger] with our formatter, writing to stderr.
///
/// `verbosity` is the number of `-v` flags given on the command line and sets the default level.
/// Directives from `RUST_LOG` take precedence.
pub fn init(verbosity: u64) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_filter(verbosity));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder
        .format(format_record)
        .target(env_logger::Target::Stderr)
        .init();
}

fn level_filter(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn format_record(
    formatter: &mut env_logger::fmt::Formatter,
    record: &log::Record,
) -> std::io::Result<()> {
    let now = time::OffsetDateTime::now_local();

    let context = format!(
        "{time}.{ms:03} {level:<5} {target}",
        time = now.format("%H:%M:%S"),
        ms = now.millisecond(),
        level = record.level(),
        target = record.target(),
    );

    writeln!(
        formatter,
        "{context}  {msg}",
        // Intense black renders as grey.
        context = formatter
            .style()
            .set_color(Color::Black)
            .set_intense(true)
            .value(context),
        msg = record.args()
    )
}
