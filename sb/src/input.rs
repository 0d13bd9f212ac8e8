//! Blocking line input

use std::io;

/// A source of chat lines, read one per turn
///
/// `read_line` blocks until a full line is available. `Ok(None)` means the
/// stream has ended and no further turns are possible.
pub trait LineSource: Send {
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from the process's standard input
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let n = io::stdin().read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(trim_newline(line)))
    }
}

/// Strip the trailing line terminator, keeping all other whitespace
pub(crate) fn trim_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_newline() {
        assert_eq!(trim_newline("hello\n".to_string()), "hello");
        assert_eq!(trim_newline("hello\r\n".to_string()), "hello");
        assert_eq!(trim_newline("no newline".to_string()), "no newline");
        assert_eq!(trim_newline("\n".to_string()), "");
        assert_eq!(trim_newline("  spaced  \n".to_string()), "  spaced  ");
    }
}
