use clap::{App, Arg};
use hexmill::cli::{self, Command};
use hexmill::Config;
use std::process;
use std::str::FromStr;

fn main() {
    let mut app = App::new("hexmill")
        .version("0.1.0")
        .about("Table-driven fixed-width word arithmetic")
        .arg(
            Arg::with_name("word_size")
                .long("word-size")
                .value_name("2")
                .takes_value(true)
                .global(true)
                .help("Word size in nybbles"),
        );

    for cmd in Command::enumerate().iter() {
        app = app.subcommand(cmd.into_clap_subcommand());
    }

    let matches = app.get_matches();

    let word_size = match matches.value_of("word_size").unwrap_or("2").parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("The word size must be a number of nybbles.");
            process::exit(1);
        }
    };

    let config = match Config::new(word_size) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let (command, submatches) = matches.subcommand();

    let result = match (Command::from_str(command), submatches) {
        (Ok(Command::Facts), Some(submatches)) => cli::facts(&config, submatches),
        (Ok(Command::Eval), Some(submatches)) => cli::eval(&config, submatches),
        _ => {
            eprintln!("Please enter a command. See --help for the list.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}
