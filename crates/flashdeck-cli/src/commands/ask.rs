//! The `ask` command.

use anyhow::Result;

use flashdeck_core::console::{expect_line, Console};
use flashdeck_core::practice;

use crate::shell::Shell;

pub fn execute<C: Console>(shell: &mut Shell<C>) -> Result<()> {
    shell.say("How many times to ask?")?;
    let times = loop {
        let line = expect_line(&mut shell.console)?;
        match line.trim().parse::<usize>() {
            Ok(n) => break n,
            Err(_) => shell.say("Please enter an integer!")?,
        }
    };

    practice::run(&mut shell.deck, &mut shell.console, times)?;
    Ok(())
}
