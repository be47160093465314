// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command, value_parser};

const CATEGORIES: [&str; 4] = ["expenses", "earnings", "investments", "goals"];

fn category_arg() -> Arg {
    Arg::new("category")
        .required(true)
        .value_parser(CATEGORIES)
        .help("expenses | earnings | investments | goals")
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    command!()
        .about("Personal finance tracker: expenses, earnings, investments and savings goals")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .env("FINTRACK_DATA_DIR")
                .help("Directory holding the CSV data files"),
        )
        .subcommand(Command::new("init").about("Create the data directory and files"))
        .subcommand(
            Command::new("serve").about("Run the REST API").arg(
                Arg::new("bind")
                    .long("bind")
                    .env("FINTRACK_BIND")
                    .help("Address to listen on (default 127.0.0.1:5000)"),
            ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List the entries of a category")
                .arg(category_arg()),
        ))
        .subcommand(
            Command::new("add")
                .about("Append an entry to a category")
                .arg(category_arg())
                .arg(
                    Arg::new("set")
                        .long("set")
                        .short('s')
                        .action(ArgAction::Append)
                        .value_name("FIELD=VALUE")
                        .help("Field value, repeatable (e.g. --set amount=12.50)"),
                ),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete the entry at a position")
                .arg(category_arg())
                .arg(
                    Arg::new("index")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("0-based position as shown by `list`"),
                ),
        )
        .subcommand(
            Command::new("dashboard").about("Totals and open goals").arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Print as pretty JSON"),
            ),
        )
        .subcommand(json_flags(
            Command::new("goals").about("All goals with savings progress"),
        ))
        .subcommand(
            Command::new("export")
                .about("Write one category to a file")
                .arg(category_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv | json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("doctor").about("Check data files for problems"))
}
