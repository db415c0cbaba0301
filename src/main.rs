use anyhow::Result;
use argh::FromArgs;
use minish::Interpreter;

#[derive(FromArgs)]
/// A small interactive command interpreter.
struct Options {
    /// print version information and exit
    #[argh(switch, short = 'V')]
    version: bool,
}

fn main() -> Result<()> {
    let options: Options = argh::from_env();
    if options.version {
        println!("minish {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut shell = Interpreter::new()?;
    let code = shell.repl()?;
    std::process::exit(code);
}
