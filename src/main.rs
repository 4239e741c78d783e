// unbrace: translate a JavaScript subset into Python source

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use unbrace::parser::lexer::Lexer;

#[derive(Parser)]
#[command(name = "unbrace")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Translates a JavaScript subset into Python source")]
struct Cli {
    /// Path to the source file to translate
    input: PathBuf,

    /// Write the generated Python here instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the parsed syntax tree instead of generating code
    #[arg(long)]
    ast: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read '{}'", cli.input.display()))?;

    if cli.ast {
        let tokens = Lexer::new(&source).tokenize()?;
        let mut parser = unbrace::parser::parser::Parser::new(tokens);
        let program = parser.parse_program()?;
        println!("{:#?}", program);
        return Ok(());
    }

    let python = unbrace::translate(&source)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", python))
                .with_context(|| format!("cannot write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{}", python),
    }

    Ok(())
}
