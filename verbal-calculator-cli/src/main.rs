use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use std::io;
use std::io::BufRead;
use verbal_calculator::interpreter::{lexer, parser, tokens_to_string, Number};

/// Evaluates arithmetic written in words or symbols, such as "five minus seven plus 17 times two"
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. When omitted, expressions are read line by line from stdin
    expression: Option<String>,

    /// Print the recognized tokens before evaluating
    #[clap(long)]
    tokens: bool,

    /// Print the linked expression chain before evaluating
    #[clap(long)]
    chain: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match &args.expression {
        Some(expression) => println!("{}", calculate(&args, expression)?),
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read expression from stdin")?;
                if line.trim().is_empty() {
                    continue;
                }
                match calculate(&args, &line) {
                    Ok(value) => println!("{}", value),
                    Err(error) => eprintln!("error: {:#}", error),
                }
            }
        }
    }

    Ok(())
}

fn calculate(args: &Arguments, text: &str) -> Result<Number> {
    let tokens = lexer::tokenize(text);
    if args.tokens {
        println!("{}", tokens_to_string(&tokens)?);
    }

    let expression = parser::parse(tokens)
        .with_context(|| format!("Could not build an expression from {:?}", text))?;
    debug!("Built expression {}", expression);
    if args.chain {
        print!("{}", expression.format_chain()?);
    }

    expression
        .evaluate()
        .with_context(|| format!("Could not evaluate {:?}", text))
}
