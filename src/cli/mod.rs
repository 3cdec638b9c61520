//! CLI commands

use crate::config::Config;
use crate::error::{Error, Result};
use crate::facts::Facts;
use clap::{App, Arg, ArgMatches, SubCommand};
use std::str;

/// Enumeration of all CLI commands
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Facts,
    Eval,
}

impl Command {
    /// Enumerate all commands that hexmill recognizes.
    pub fn enumerate() -> Vec<Self> {
        use Command::*;

        vec![Facts, Eval]
    }

    /// Construct the subcommand object for this particular `Command`.
    pub fn into_clap_subcommand<'a, 'b>(self) -> App<'a, 'b> {
        match self {
            Command::Facts => SubCommand::with_name("facts")
                .about("Dump the per-value fact table for the configured word size")
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .help("Emit the table as JSON instead of text"),
                ),
            Command::Eval => SubCommand::with_name("eval")
                .about("Evaluate one operation on word literals")
                .arg(
                    Arg::with_name("op")
                        .value_name("add")
                        .index(1)
                        .required(true)
                        .help("The operation to apply"),
                )
                .arg(
                    Arg::with_name("operand")
                        .value_name("255u")
                        .multiple(true)
                        .help("Word literals, or a plain count for shifts and rotates"),
                ),
        }
    }
}

impl str::FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "facts" => Ok(Command::Facts),
            "eval" => Ok(Command::Eval),
            _ => Err(()),
        }
    }
}

/// Dump every fact row for the configured width.
pub fn facts(config: &Config, matches: &ArgMatches) -> Result<()> {
    config.build_facts_table()?;

    if matches.is_present("json") {
        let rows: Vec<_> = (0..=config.uint_max())
            .map(|n| config.facts(n))
            .collect::<Result<_>>()?;
        let refs: Vec<&Facts> = rows.iter().map(|r| r.as_ref()).collect();

        println!(
            "{}",
            serde_json::to_string_pretty(&refs).map_err(|e| Error::Domain {
                op: "facts",
                detail: format!("cannot serialize table: {}", e),
            })?
        );

        return Ok(());
    }

    for n in 0..=config.uint_max() {
        let row = config.facts(n)?;
        let log2 = match row.log2 {
            Some(l) => l.to_string(),
            None => "-".to_string(),
        };
        let factors: Vec<String> = row.factors.iter().map(|f| f.to_string()).collect();

        println!(
            "{}\t{}\t{}\tlog2={}\tsqrt={}\tfactors=({})",
            row.hex,
            row.udec,
            row.idec,
            log2,
            row.sqrt,
            factors.join(", ")
        );
    }

    Ok(())
}

fn single_operand<'a>(op: &'static str, operands: &[&'a str]) -> Result<&'a str> {
    match *operands {
        [a] => Ok(a),
        _ => Err(Error::Domain {
            op,
            detail: format!("expected 1 operand, got {}", operands.len()),
        }),
    }
}

fn pair_operands<'a>(op: &'static str, operands: &[&'a str]) -> Result<(&'a str, &'a str)> {
    match *operands {
        [a, b] => Ok((a, b)),
        _ => Err(Error::Domain {
            op,
            detail: format!("expected 2 operands, got {}", operands.len()),
        }),
    }
}

fn parse_count(op: &'static str, s: &str) -> Result<usize> {
    s.parse().map_err(|_| Error::Domain {
        op,
        detail: format!("{} is not a shift count", s),
    })
}

/// Evaluate one operation named on the command line.
pub fn eval(config: &Config, matches: &ArgMatches) -> Result<()> {
    let op = matches.value_of("op").unwrap_or_default();
    let operands: Vec<&str> = matches
        .values_of("operand")
        .map(|vs| vs.collect())
        .unwrap_or_default();

    let output = match op {
        "add" | "sub" | "mul" | "div" | "rem" | "band" | "bor" | "bxor" => {
            let (a, b) = pair_operands("eval", &operands)?;
            let a = config.parse_word(a)?;
            let b = config.parse_word(b)?;

            match op {
                "add" => a.add(&b)?,
                "sub" => a.sub(&b)?,
                "mul" => a.mul(&b)?,
                "div" => a.div(&b)?,
                "rem" => a.rem(&b)?,
                "band" => a.band(&b)?,
                "bor" => a.bor(&b)?,
                _ => a.bxor(&b)?,
            }
            .to_string()
        }
        "divr" => {
            let (a, b) = pair_operands("eval", &operands)?;
            let (q, r) = config.parse_word(a)?.divr(&config.parse_word(b)?)?;

            format!("{}, {}", q, r)
        }
        "shl" | "shr" | "sar" | "rotl" | "rotr" => {
            let (a, n) = pair_operands("eval", &operands)?;
            let a = config.parse_word(a)?;
            let n = parse_count("eval", n)?;

            match op {
                "shl" => a.shl(n),
                "shr" => a.shr(n),
                "sar" => a.sar(n),
                "rotl" => a.rotl(n),
                _ => a.rotr(n),
            }
            .to_string()
        }
        "bnot" | "neg" | "abs" | "inc" | "dec" => {
            let a = config.parse_word(single_operand("eval", &operands)?)?;

            match op {
                "bnot" => a.bnot(),
                "neg" => a.neg(),
                "abs" => a.abs(),
                "inc" => a.inc(),
                _ => a.dec(),
            }
            .to_string()
        }
        "log2" | "sqrt" => {
            let a = config.parse_word(single_operand("eval", &operands)?)?;

            match op {
                "log2" => config.log2(&a)?,
                _ => config.sqrt(&a)?,
            }
            .to_string()
        }
        "factors" => {
            let a = config.parse_word(single_operand("eval", &operands)?)?;
            let factors: Vec<String> = config
                .factors(&a)?
                .iter()
                .map(|w| w.to_string())
                .collect();

            format!("({})", factors.join(", "))
        }
        other => {
            return Err(Error::Domain {
                op: "eval",
                detail: format!("unknown operation {}", other),
            })
        }
    };

    println!("{}", output);

    Ok(())
}
