use ds_config::CursorConfig;
use ds_core::{Cursor, CursorError, CursorOptions, OrderingHook, sort};

use crate::command::{Command, HELP};

pub enum Outcome {
    Print(String),
    Quit,
}

/// A cursor driven by parsed commands.
pub struct Session {
    cursor: Cursor<i64>,
}

pub fn cursor_options(config: &CursorConfig) -> CursorOptions<i64> {
    let options = CursorOptions::default()
        .with_ordering(OrderingHook::natural())
        .enforce_capacity_on_append(config.enforce_capacity_on_append);

    match config.capacity {
        Some(capacity) => options.with_capacity(capacity),
        None => options,
    }
}

impl Session {
    pub fn new(values: &[i64], config: &CursorConfig) -> Self {
        Self {
            cursor: Cursor::with_options(values, cursor_options(config)),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, CursorError> {
        let c = &mut self.cursor;
        let text = match command {
            Command::First => c.first()?.to_string(),
            Command::Last => c.last()?.to_string(),
            Command::Next => c.next()?.to_string(),
            Command::Prev => c.prev()?.to_string(),
            Command::Get => c.get()?.to_string(),
            Command::Seek(index) => c.seek(index)?.to_string(),
            Command::Slice(start, end) => format!("{:?}", c.slice(start, end)?),
            Command::Take(count) => {
                let (taken, rest) = c.take(count)?;
                *c = rest;
                format!("{taken:?}")
            }
            Command::Skip(count) => {
                *c = c.skip(count)?;
                self.describe()
            }
            Command::Set(value) => {
                c.set(value);
                self.describe()
            }
            Command::Delete(index) => {
                let removed = match index {
                    Some(index) => c.delete_at(index),
                    None => c.delete(),
                };
                match removed {
                    Some(value) => format!("removed {value}"),
                    None => "nothing removed".to_string(),
                }
            }
            Command::Replace { at, values } => {
                let index = at.unwrap_or(c.position());
                *c = c.replace_at(index, values)?;
                self.describe()
            }
            Command::Insert { at, values } => {
                let index = at.unwrap_or(c.position());
                c.insert_at(index, values)?;
                self.describe()
            }
            Command::Append(values) => {
                c.append(values)?;
                self.describe()
            }
            Command::Prepend(values) => {
                c.prepend(values)?;
                self.describe()
            }
            Command::Swap(i, j) => {
                c.swap(i, j);
                self.describe()
            }
            Command::Chop(start, end) => {
                c.chop(start, end)?;
                self.describe()
            }
            Command::Sort => {
                sort::sort(c);
                self.describe()
            }
            Command::Show => self.describe(),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Print(text))
    }

    #[cfg(test)]
    pub fn cursor(&self) -> &Cursor<i64> {
        &self.cursor
    }

    fn describe(&self) -> String {
        format!("{:?} @ {}", self.cursor.as_slice(), self.cursor.position())
    }
}
