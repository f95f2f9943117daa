//! REPL loop for the topology session.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use lantopo_core::NetworkGraph;

use crate::repl_commands::{handle_command, CommandResult};

/// Runs the interactive loop until `quit` or end of input.
pub fn run(mut graph: NetworkGraph) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;

    println!("{}", "LanTopo - network topology builder".bold());
    println!("Type {} for the command list.\n", "help".cyan());

    loop {
        match editor.readline("lantopo> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                match handle_command(&mut graph, line) {
                    CommandResult::Continue => {}
                    CommandResult::Quit => break,
                    CommandResult::Error(message) => {
                        eprintln!("{} {message}", "error:".red().bold());
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("Bye.");
    Ok(())
}
