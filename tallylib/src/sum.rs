//! Reading two numbers and reporting their sum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

use crate::scan::Scanner;
use crate::Result;

/// Prompt printed before the first number is read
pub const FIRST_PROMPT: &str = "Enter first number:";

/// Prompt printed before the second number is read
pub const SECOND_PROMPT: &str = "Enter second number:";

/// Two numbers read from the user, ready to be summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addition {
    /// First number entered
    pub first: i64,
    /// Second number entered
    pub second: i64,
}

impl Addition {
    /// The sum of both numbers, saturating at the i64 bounds
    pub fn sum(&self) -> i64 {
        self.first.saturating_add(self.second)
    }
}

impl fmt::Display for Addition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Addition of {} and {} is {}",
            self.first,
            self.second,
            self.sum()
        )
    }
}

/// Prompt for and read two whitespace-delimited integers.
///
/// Each prompt goes to `output` on its own line and is flushed before
/// the read, so it is visible even when `output` is line-buffered. The
/// numbers may arrive on one line or spread across several.
pub fn prompt_addends<R: Read, W: Write>(input: R, output: &mut W) -> Result<Addition> {
    let mut scanner = Scanner::from_reader(input);

    writeln!(output, "{FIRST_PROMPT}")?;
    output.flush()?;
    let first = scanner.next_i64()?;

    writeln!(output, "{SECOND_PROMPT}")?;
    output.flush()?;
    let second = scanner.next_i64()?;

    Ok(Addition { first, second })
}
