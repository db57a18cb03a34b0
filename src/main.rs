use std::env;
use std::process::exit;

use log::error;

use stunneler_conf::commands::{self, field::Field};
use stunneler_conf::conf::{resolve_conf_path, ConfDocument};
use stunneler_conf::logging;

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    // `-c <file>` before the subcommand overrides the config location.
    let mut cli_path: Option<String> = None;
    if args.first().map(String::as_str) == Some("-c") {
        if args.len() < 2 {
            usage();
            exit(2);
        }
        cli_path = Some(args.remove(1));
        args.remove(0);
    }
    let path = resolve_conf_path(cli_path);

    // The config's own rem_log_level picks the default filter; RUST_LOG wins.
    let conf_level = ConfDocument::load(&path).ok().and_then(|d| d.log_level().ok());
    logging::init(conf_level);

    let result = match args.first().map(String::as_str) {
        Some("init") => commands::init::run(&path),
        Some("show") => commands::show::run(&path),
        Some("dump") => commands::show::dump(&path),
        Some("get") => match args.get(1).and_then(|f| Field::from_arg(f)) {
            Some(field) => commands::field::get(&path, field),
            None => {
                usage();
                exit(2);
            }
        },
        Some("set") => match (args.get(1).and_then(|f| Field::from_arg(f)), args.get(2)) {
            (Some(field), Some(value)) => commands::field::set(&path, field, value),
            _ => {
                usage();
                exit(2);
            }
        },
        Some("import") => match args.get(1) {
            Some(alias) => commands::import::run(&path, alias),
            None => {
                usage();
                exit(2);
            }
        },
        Some("path") => {
            println!("{}", path.display());
            Ok(())
        }
        Some("help") | None => {
            usage();
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command '{other}'.");
            usage();
            exit(2);
        }
    };

    if let Err(e) = result {
        error!("{e}");
        exit(1);
    }
}

fn usage() {
    println!("Usage: stunneler-conf [-c <file>] <command>");
    println!("  init                 create a fresh config (interactive)");
    println!("  show                 print the recognized fields as a table");
    println!("  dump                 print the raw config JSON");
    println!("  get <field>          print one field (login|address|ssh-key|port|log-level)");
    println!("  set <field> <value>  update one field and save");
    println!("  import <alias>       seed remote fields from ~/.ssh/config");
    println!("  path                 print the active config file path");
}
