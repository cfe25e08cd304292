//! Newline-delimited JSON reader.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::Error;

/// Iterates over one JSON value per line.
#[derive(Debug)]
pub struct JsonlReader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
}

pub type JsonlFileReader = JsonlReader<File>;

impl JsonlFileReader {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        let lines = BufReader::new(handle).lines();
        Ok(Self { lines })
    }
}

impl<T> JsonlReader<T>
where
    T: Read,
{
    pub fn new(src: T) -> Self {
        Self {
            lines: BufReader::new(src).lines(),
        }
    }
}

impl<T> Iterator for JsonlReader<T>
where
    T: Read,
{
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lines.next()? {
            Ok(line) => Some(serde_json::from_str(&line).map_err(Error::Serde)),
            Err(e) => Some(Err(Error::Io(e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::JsonlReader;
    use serde_json::Value;

    #[test]
    fn reads_one_value_per_line() {
        let src = "{\"id\": \"A\"}\n{\"id\": \"B\"}\n".as_bytes();
        let values: Vec<Value> = JsonlReader::new(src).collect::<Result<_, _>>().unwrap();

        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["id"], "A");
        assert_eq!(values[1]["id"], "B");
    }

    #[test]
    fn malformed_line_is_an_error() {
        let src = "{\"id\": \"A\"}\nnot json\n".as_bytes();
        let result: Result<Vec<Value>, _> = JsonlReader::new(src).collect();

        assert!(result.is_err());
    }
}
