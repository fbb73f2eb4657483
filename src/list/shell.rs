use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use rustyline::{error::ReadlineError, Editor};

use super::{command::Command, exit_code, float_list::FloatList};

const HISTORY_FILE: &str = "float_list_history.txt";

/// Owns one list and runs commands against it, writing results to `output`.
pub struct Shell<W> {
    list: FloatList,
    output: W,
}

impl<W> Shell<W>
where
    W: Write,
{
    pub fn new_with_output(output: W) -> Self {
        Self {
            list: FloatList::new(),
            output,
        }
    }

    pub fn list(&self) -> &FloatList {
        &self.list
    }

    pub fn run(&mut self, source: &str) -> Result<()> {
        for (number, line) in source.lines().enumerate() {
            if let Some(command) = Command::parse(number + 1, line)? {
                self.execute(command)?;
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Push(value) => self.list.push(value),
            Command::Get(index) => writeln!(self.output, "{}", self.list.get(index))?,
            Command::Set(index, value) => self.list.set(index, value),
            Command::Len => writeln!(self.output, "{}", self.list.len())?,
            Command::Capacity => writeln!(self.output, "{}", self.list.capacity())?,
            Command::Clear => self.list.clear(),
        }
        Ok(())
    }
}

pub fn run_file(path: &str) -> Result<ExitCode> {
    let source = fs::read_to_string(path)?;
    let mut shell = Shell::new_with_output(io::stdout());
    let result = if let Err(err) = shell.run(&source) {
        eprintln!("Error while running file: {}", err);
        exit_code::data_err()
    } else {
        ExitCode::SUCCESS
    };
    Ok(result)
}

pub fn run_prompt() -> Result<ExitCode> {
    let mut shell = Shell::new_with_output(io::stdout());
    let mut editor = Editor::<()>::new()?;
    load_history(&mut editor);
    loop {
        let readline = editor.readline("> ");
        match readline {
            Ok(line) => {
                editor.add_history_entry(line.as_str());
                // An out-of-range `get`/`set` exits without returning here.
                if let Err(err) = editor.save_history(HISTORY_FILE) {
                    eprintln!("History error: {:?}", err);
                }
                if let Err(err) = shell.run(&line) {
                    eprintln!("Run error: {}", err);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                eprintln!("Readline error: {:?}", err);
                break;
            }
        }
    }
    editor.save_history(HISTORY_FILE)?;
    Ok(ExitCode::SUCCESS)
}

fn load_history(editor: &mut Editor<()>) {
    match editor.load_history(HISTORY_FILE) {
        Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => eprintln!("History error: {:?}", err),
        Ok(()) => {}
    }
}
