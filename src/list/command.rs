use super::{error::CommandError, float_list::Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Push(Value),
    Get(isize),
    Set(isize, Value),
    Len,
    Capacity,
    Clear,
}

impl Command {
    /// Parses one line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: usize, source: &str) -> Result<Option<Self>, CommandError> {
        let source = source.trim();
        if source.is_empty() || source.starts_with('#') {
            return Ok(None);
        }

        let mut words = source.split_whitespace();
        let name = words.next().unwrap_or_default();
        let arguments: Vec<_> = words.collect();

        let command = match (name, arguments.as_slice()) {
            ("push", [value]) => Command::Push(parse_value(line, value)?),
            ("get", [index]) => Command::Get(parse_index(line, index)?),
            ("set", [index, value]) => {
                Command::Set(parse_index(line, index)?, parse_value(line, value)?)
            }
            ("len", []) => Command::Len,
            ("capacity", []) => Command::Capacity,
            ("clear", []) => Command::Clear,
            ("push" | "get" | "set" | "len" | "capacity" | "clear", _) => {
                return Err(CommandError::new(
                    line,
                    &format!("Wrong number of arguments for '{}'.", name),
                ))
            }
            _ => {
                return Err(CommandError::new(
                    line,
                    &format!("Unknown command '{}'.", name),
                ))
            }
        };
        Ok(Some(command))
    }
}

fn parse_value(line: usize, word: &str) -> Result<Value, CommandError> {
    word.parse()
        .map_err(|_| CommandError::new(line, &format!("Expect number, got '{}'.", word)))
}

fn parse_index(line: usize, word: &str) -> Result<isize, CommandError> {
    word.parse()
        .map_err(|_| CommandError::new(line, &format!("Expect index, got '{}'.", word)))
}
