use std::str::FromStr;

/// One line of input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    First,
    Last,
    Next,
    Prev,
    Get,
    Seek(usize),
    Slice(usize, usize),
    Take(usize),
    Skip(usize),
    Set(i64),
    Delete(Option<usize>),
    Replace { at: Option<usize>, values: Vec<i64> },
    Insert { at: Option<usize>, values: Vec<i64> },
    Append(Vec<i64>),
    Prepend(Vec<i64>),
    Swap(usize, usize),
    Chop(usize, usize),
    Sort,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    Arguments {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

pub const HELP: &str = "\
navigation:  first | last | next | prev | get | seek N
extraction:  slice A B | take N | skip N
mutation:    set V | delete [N] | replace [@N] V... | insert [@N] V...
             append V... | prepend V... | chop A B | swap I J | sort
other:       show | help | quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        let command = match name {
            "first" => none("first", &args, Command::First)?,
            "last" => none("last", &args, Command::Last)?,
            "next" => none("next", &args, Command::Next)?,
            "prev" => none("prev", &args, Command::Prev)?,
            "get" => none("get", &args, Command::Get)?,
            "sort" => none("sort", &args, Command::Sort)?,
            "show" => none("show", &args, Command::Show)?,
            "help" => none("help", &args, Command::Help)?,
            "quit" | "exit" => none("quit", &args, Command::Quit)?,
            "seek" => Command::Seek(one("seek", &args)?),
            "take" => Command::Take(one("take", &args)?),
            "skip" => Command::Skip(one("skip", &args)?),
            "set" => Command::Set(one("set", &args)?),
            "slice" => {
                let (a, b) = two("slice", &args)?;
                Command::Slice(a, b)
            }
            "chop" => {
                let (a, b) = two("chop", &args)?;
                Command::Chop(a, b)
            }
            "swap" => {
                let (a, b) = two("swap", &args)?;
                Command::Swap(a, b)
            }
            "delete" => match args.as_slice() {
                [] => Command::Delete(None),
                [index] => Command::Delete(Some(number(index)?)),
                _ => {
                    return Err(CommandError::Arguments {
                        command: "delete",
                        expected: "at most one index",
                    });
                }
            },
            "replace" => {
                let (at, values) = anchored(&args)?;
                Command::Replace { at, values }
            }
            "insert" => {
                let (at, values) = anchored(&args)?;
                Command::Insert { at, values }
            }
            "append" => Command::Append(numbers(&args)?),
            "prepend" => Command::Prepend(numbers(&args)?),
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn none(command: &'static str, args: &[&str], cmd: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(cmd)
    } else {
        Err(CommandError::Arguments {
            command,
            expected: "no arguments",
        })
    }
}

fn one<N: FromStr>(command: &'static str, args: &[&str]) -> Result<N, CommandError> {
    match args {
        [a] => number(a),
        _ => Err(CommandError::Arguments {
            command,
            expected: "one argument",
        }),
    }
}

fn two(command: &'static str, args: &[&str]) -> Result<(usize, usize), CommandError> {
    match args {
        [a, b] => Ok((number(a)?, number(b)?)),
        _ => Err(CommandError::Arguments {
            command,
            expected: "two indices",
        }),
    }
}

/// `@N V...` or just `V...`.
fn anchored(args: &[&str]) -> Result<(Option<usize>, Vec<i64>), CommandError> {
    match args.split_first() {
        Some((first, rest)) if first.starts_with('@') => {
            Ok((Some(number(&first[1..])?), numbers(rest)?))
        }
        _ => Ok((None, numbers(args)?)),
    }
}

fn numbers<N: FromStr>(args: &[&str]) -> Result<Vec<N>, CommandError> {
    args.iter().map(|a| number(a)).collect()
}

fn number<N: FromStr>(word: &str) -> Result<N, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))
}
