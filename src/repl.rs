use std::io::{self, Write};

use anyhow::{Context, Result};
use hanlang::{Engine, Interpreter};

const PROMPT: &str = ">> ";

pub fn start(quiet: bool) -> Result<()> {
    let mut engine = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!("{PROMPT}");
        io::stdout().flush().context("failed to flush prompt")?;

        let mut input = String::new();
        let read = stdin
            .read_line(&mut input)
            .context("failed to read line")?;
        if read == 0 {
            return Ok(());
        }

        match engine.run(&input) {
            Ok(rendered) if quiet || rendered.is_empty() => {}
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("{err:#}"),
        }
    }
}
