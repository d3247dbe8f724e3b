use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

/// `[ a b c ]`
pub fn format_sequence<T: Display>(values: &[T]) -> String {
    let mut s = String::from("[ ");
    for value in values {
        s.push_str(&value.to_string());
        s.push(' ');
    }
    s.push(']');
    s
}

/// Parses a comma and/or whitespace separated list: "2,0,1,3" or "2 0 1 3".
pub fn parse_list<T: FromStr>(input: &str) -> Result<Vec<T>, Error> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(|item| item.parse().map_err(|_| Error::Parse(item.to_owned())))
        .collect()
}

pub fn init_tracing(verbose: u8) {
    if verbose > 0 {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }
}
