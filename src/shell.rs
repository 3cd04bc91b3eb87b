//! Interactive driver: prompt for three sides, then print the category.
//!
//! The shell is generic over its input and output so it can run against a
//! terminal or an in-memory transcript.

use bigdecimal::BigDecimal;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::config::ShellConfig;
use crate::core::category::Category;
use crate::core::side::{parse_side, Side, SideInput};
use crate::core::triangle::Triangle;
use crate::error::{ParseSideError, ShellError, TriangleError};

const INTRODUCTION: &str = "This program reads three sides of a triangle and determines whether it's equilateral, isosceles, scalene or invalid.";

/// How a shell session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Valid triangle, classified
    Classified(Category),
    /// All sides were read but do not form a triangle
    Rejected(TriangleError),
    /// The user entered zero
    Aborted,
}

/// Prompt-driven session reading sides from `input` and writing prompts,
/// complaints and the verdict to `output`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run one session: read sides A, B and C, then report the result.
    ///
    /// Invalid triangles are an [`Outcome`], not an error; errors are
    /// reserved for I/O failures, closed input and exhausted attempts.
    pub fn run(&mut self) -> Result<Outcome, ShellError> {
        if !self.config.quiet {
            writeln!(self.output, "{}", INTRODUCTION)?;
            writeln!(self.output)?;
        }

        let outcome = self.read_and_classify()?;

        writeln!(self.output)?;
        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        Ok(outcome)
    }

    /// Give back the output sink, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_and_classify(&mut self) -> Result<Outcome, ShellError> {
        let Some(side_a) = self.read_side(Side::A)? else {
            return Ok(Outcome::Aborted);
        };
        let Some(side_b) = self.read_side(Side::B)? else {
            return Ok(Outcome::Aborted);
        };
        let Some(side_c) = self.read_side(Side::C)? else {
            return Ok(Outcome::Aborted);
        };

        writeln!(self.output)?;
        match Triangle::new(side_a, side_b, side_c) {
            Ok(triangle) => {
                let category = triangle.category();
                info!(category = %category, "Classified triangle");
                writeln!(self.output, "This triangle is {}", category)?;
                Ok(Outcome::Classified(category))
            }
            Err(err) => {
                info!(kind = %err.kind(), side = %err.side(), "Invalid triangle");
                writeln!(
                    self.output,
                    "Error - the provided values do not form a valid triangle (best guess: {}).",
                    err
                )?;
                Ok(Outcome::Rejected(err))
            }
        }
    }

    /// Prompt until a positive value or an abort is entered.
    /// `Ok(None)` means the user aborted.
    fn read_side(&mut self, side: Side) -> Result<Option<BigDecimal>, ShellError> {
        let mut attempts = 0;
        loop {
            write!(
                self.output,
                "Enter a positive, decimal value for side {}: ",
                side.letter()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ShellError::InputClosed { side });
            }

            let err = match parse_side(&line) {
                Ok(SideInput::Length(value)) => return Ok(Some(value)),
                Ok(SideInput::Abort) => {
                    info!(side = %side, "User abort");
                    writeln!(self.output, "User abort detected")?;
                    return Ok(None);
                }
                Err(err) => err,
            };

            debug!(side = %side, error = %err, "Invalid side input");
            let complaint = match err {
                ParseSideError::NotANumber(_) => "not a number",
                ParseSideError::Negative(_) => "not positive",
            };
            writeln!(
                self.output,
                "Error - the provided value is {}, try again (or 0 to exit)",
                complaint
            )?;

            attempts += 1;
            if let Some(max) = self.config.max_attempts {
                if attempts >= max {
                    warn!(side = %side, attempts, "Too many invalid attempts");
                    return Err(ShellError::TooManyAttempts { side, attempts });
                }
            }
        }
    }
}
