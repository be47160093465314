// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::schema::Category;
use crate::{cli, config, server};
use anyhow::{Context, Result};
use clap::ArgMatches;

pub mod records;
pub mod reports;
pub mod exporter;
pub mod doctor;

pub(crate) fn category_arg(sub: &clap::ArgMatches) -> Result<Category> {
    let name = sub
        .get_one::<String>("category")
        .context("category is required")?;
    Ok(name.trim().parse::<Category>()?)
}

/// Dispatch a parsed command line. The storage root is only touched by
/// subcommands that read or write it.
pub fn run(matches: &ArgMatches) -> Result<()> {
    let open = |sub: &ArgMatches| -> Result<Ledger> { Ok(Ledger::new(config::open_store(sub)?)) };

    match matches.subcommand() {
        Some(("init", sub)) => {
            let ledger = open(sub)?;
            println!("Data files ready in {}", ledger.store().root().display());
        }
        Some(("serve", sub)) => {
            let ledger = open(sub)?;
            let addr = config::bind_addr(sub)?;
            tokio::runtime::Runtime::new()?.block_on(server::serve(ledger, addr))?;
        }
        Some(("list", sub)) => records::list(&open(sub)?, sub)?,
        Some(("add", sub)) => records::add(&open(sub)?, sub)?,
        Some(("rm", sub)) => records::rm(&open(sub)?, sub)?,
        Some(("dashboard", sub)) => reports::dashboard(&open(sub)?, sub)?,
        Some(("goals", sub)) => reports::goals(&open(sub)?, sub)?,
        Some(("export", sub)) => exporter::handle(&open(sub)?, sub)?,
        Some(("doctor", sub)) => doctor::handle(open(sub)?.store())?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
