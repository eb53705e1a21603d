#[macro_use]
extern crate log;

use avl_collections::avl_tree::Tree;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use std::env;
use std::io::{self, BufRead};
use std::str::FromStr;

const LOG_LEVEL_VAR: &str = "AVL_LOG";

fn log_level() -> LevelFilter {
    match env::var(LOG_LEVEL_VAR) {
        Ok(level) => LevelFilter::from_str(&level).unwrap_or_else(|_| {
            eprintln!("invalid {} value {:?}, using info", LOG_LEVEL_VAR, level);
            LevelFilter::Info
        }),
        Err(_) => LevelFilter::Info,
    }
}

fn parse_keys(args: &[&str]) -> Option<Vec<i64>> {
    args.iter().map(|arg| arg.parse().ok()).collect()
}

fn print_stats(tree: &Tree<i64>) {
    println!(
        "len: {}, height: {}, balance: {}",
        tree.len(),
        tree.height(),
        tree.balance(),
    );
}

fn demo(tree: &mut Tree<i64>) {
    for key in &[5, 3, 6, 7] {
        tree.insert(*key);
    }
    tree.display();
    tree.insert(8);
    tree.display();
}

fn main() {
    if let Err(err) = SimpleLogger::init(log_level(), Config::default()) {
        eprintln!("failed to initialize logger: {}", err);
    }

    let mut tree = Tree::new();
    if env::args().skip(1).any(|arg| arg == "--demo") {
        demo(&mut tree);
        return;
    }

    let input = io::stdin();
    for line in input.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("failed to read input: {}", err);
                break;
            },
        };
        let args: Vec<&str> = line.split_whitespace().collect();
        if args.is_empty() {
            continue;
        }

        match args[0] {
            "insert" => match parse_keys(&args[1..]) {
                Some(keys) => {
                    tree.extend(keys);
                    debug!("tree now holds {} keys", tree.len());
                },
                None => warn!("expected integer keys: {}", line),
            },
            "contains" => match parse_keys(&args[1..]).as_ref().map(Vec::as_slice) {
                Some([key]) => println!("{}", tree.contains(key)),
                _ => warn!("expected a single integer key: {}", line),
            },
            "display" => tree.display(),
            "stats" => print_stats(&tree),
            "validate" => match tree.validate() {
                Ok(()) => println!("ok"),
                Err(err) => println!("invalid: {}", err),
            },
            "quit" => break,
            command => warn!("unknown command: {}", command),
        }
    }

    info!("exiting with {} keys", tree.len());
}
