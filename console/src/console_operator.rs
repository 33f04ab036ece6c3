use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use tokio::sync::mpsc;
use types::{Command, GameState, Operator};

use crate::parser::{CommandParser, HELP};

/// Interactive operator reading commands from stdin.
#[derive(Debug)]
pub struct ConsoleOperator {
    parser: CommandParser,
    lines: mpsc::UnboundedReceiver<String>,
    /// Set while waiting for input. The session may drop and re-issue the
    /// request on clock ticks; the state is only printed once per command.
    prompted: bool,
}

impl ConsoleOperator {
    pub fn new() -> Self {
        let (tx, lines) = mpsc::unbounded_channel();
        // Stdin is blocking; a plain thread keeps the runtime free to tick
        // the clock while the operator is typing.
        std::thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        log::error!("Error reading line from stdin: {err}");
                        break;
                    }
                }
            }
        });
        Self {
            parser: CommandParser::new(),
            lines,
            prompted: false,
        }
    }
}

impl Default for ConsoleOperator {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt() {
    print!("Your action? >> ");
    let _ = io::stdout().flush();
}

#[async_trait]
impl Operator for ConsoleOperator {
    async fn next_command(&mut self, state: &GameState) -> Option<Command> {
        if !self.prompted {
            println!("{state}");
            prompt();
            self.prompted = true;
        }
        loop {
            let line = self.lines.recv().await?;
            if line.trim().is_empty() {
                prompt();
                continue;
            }
            if line.trim().eq_ignore_ascii_case("help") {
                println!("{HELP}");
                prompt();
                continue;
            }
            match self.parser.parse(&line) {
                Ok(command) => {
                    self.prompted = false;
                    return Some(command);
                }
                Err(err) => {
                    log::error!("Error parsing message from stdin: {err}");
                    println!("{HELP}");
                    prompt();
                }
            }
        }
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}
