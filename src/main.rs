#![allow(nonstandard_style)]

use calc_rs::{Calculator, Config, Outcome};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

/// Evaluates arithmetic statements read from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text printed before each statement is read.
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Word that starts a variable declaration.
    #[arg(long, default_value = "let")]
    keyword: String,

    /// Skip the welcome message.
    #[arg(long)]
    no_banner: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self{prompt: args.prompt, keyword: args.keyword, banner: !args.no_banner}
    }
}

fn welcome(config: &Config) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Welcome to calc_rs {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(stdout, "-------------------------------------------------------------")?;
    writeln!(stdout, "Enter:")?;
    writeln!(stdout, "'q' to quit")?;
    writeln!(stdout, "';' to submit an expression")?;
    writeln!(stdout, "'{} name = expression;' to define a variable", config.keyword)?;
    writeln!(stdout, "Ex: {}-1(-1+2)*3;", config.prompt)?;
    writeln!(stdout, "-------------------------------------------------------------")?;
    Ok(())
}

fn run(config: &Config) -> anyhow::Result<()> {
    if config.banner {
        welcome(config)?;
    }

    let mut stdout = std::io::stdout();
    let mut calculator = Calculator::from_reader(std::io::stdin().lock(), config);
    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        match calculator.next_statement() {
            Ok(Outcome::output(output)) => writeln!(stdout, "{output}")?,
            Ok(Outcome::quit) => {
                writeln!(stdout, "******************************")?;
                writeln!(stdout, "Program Terminated by user")?;
                stdout.flush()?;
                return Ok(());
            },
            Ok(Outcome::finished) => {
                writeln!(stdout)?;
                stdout.flush()?;
                return Ok(());
            },
            Err(e) => {
                eprintln!("Error: {e}");
                calculator.recover();
            },
        }
    }
}

fn main() -> ExitCode {
    let config = Config::from(Args::parse());
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => {
            eprintln!("Unknown error");
            ExitCode::from(2)
        },
    }
}
