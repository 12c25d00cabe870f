//! Access script parsing.
//!
//! One access per line:
//!
//! ```text
//! r <addr> [width]          # read; width in bytes (1, 2, 4, 8), default 4
//! w <addr> <value> [width]  # write
//! reset                     # reset every device
//! ```
//!
//! Numbers are decimal or `0x`-prefixed hex and may contain `_` separators.
//! Everything after `#` is ignored.

use thiserror::Error;
use virtfoo_core::common::AccessWidth;

/// A single scripted bus operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Read at a physical address.
    Read {
        /// Physical address.
        addr: u64,
        /// Access size qualifier.
        width: AccessWidth,
    },
    /// Write at a physical address.
    Write {
        /// Physical address.
        addr: u64,
        /// Value placed on the bus.
        val: u64,
        /// Access size qualifier.
        width: AccessWidth,
    },
    /// Reset the platform.
    Reset,
}

/// Script syntax errors. Line numbers are 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The first token is not `r`, `w` or `reset`.
    #[error("line {line}: unknown operation `{op}`")]
    UnknownOp {
        /// Offending line.
        line: usize,
        /// Token that was found.
        op: String,
    },
    /// A required operand is absent.
    #[error("line {line}: missing {operand}")]
    MissingOperand {
        /// Offending line.
        line: usize,
        /// Name of the operand.
        operand: &'static str,
    },
    /// An operand is not a number.
    #[error("line {line}: invalid number `{text}`")]
    BadNumber {
        /// Offending line.
        line: usize,
        /// Token that was found.
        text: String,
    },
    /// The width is not 1, 2, 4 or 8.
    #[error("line {line}: unsupported access width {bytes}")]
    BadWidth {
        /// Offending line.
        line: usize,
        /// Width that was requested.
        bytes: u64,
    },
    /// Extra tokens follow a complete operation.
    #[error("line {line}: unexpected `{text}`")]
    Trailing {
        /// Offending line.
        line: usize,
        /// First extra token.
        text: String,
    },
}

/// Parses a decimal or `0x`-prefixed hexadecimal number.
pub fn parse_number(text: &str) -> Option<u64> {
    let cleaned = text.replace('_', "");
    match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => cleaned.parse().ok(),
    }
}

/// Parses a whole script into `(line_number, op)` pairs, skipping blank and
/// comment-only lines.
///
/// # Errors
///
/// Returns the first [`ScriptError`] encountered.
pub fn parse(text: &str) -> Result<Vec<(usize, Op)>, ScriptError> {
    let mut ops = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let body = raw.split('#').next().unwrap_or_default();
        let mut tokens = body.split_whitespace();
        let Some(op) = tokens.next() else {
            continue;
        };

        let parsed = match op.to_ascii_lowercase().as_str() {
            "r" | "read" => {
                let addr = number(line, tokens.next(), "address")?;
                let width = width(line, tokens.next())?;
                Op::Read { addr, width }
            }
            "w" | "write" => {
                let addr = number(line, tokens.next(), "address")?;
                let val = number(line, tokens.next(), "value")?;
                let width = width(line, tokens.next())?;
                Op::Write { addr, val, width }
            }
            "reset" => Op::Reset,
            _ => {
                return Err(ScriptError::UnknownOp {
                    line,
                    op: op.to_owned(),
                });
            }
        };

        if let Some(extra) = tokens.next() {
            return Err(ScriptError::Trailing {
                line,
                text: extra.to_owned(),
            });
        }
        ops.push((line, parsed));
    }
    Ok(ops)
}

fn number(line: usize, token: Option<&str>, operand: &'static str) -> Result<u64, ScriptError> {
    let text = token.ok_or(ScriptError::MissingOperand { line, operand })?;
    parse_number(text).ok_or_else(|| ScriptError::BadNumber {
        line,
        text: text.to_owned(),
    })
}

fn width(line: usize, token: Option<&str>) -> Result<AccessWidth, ScriptError> {
    let Some(text) = token else {
        return Ok(AccessWidth::Word);
    };
    let bytes = number(line, Some(text), "width")?;
    u32::try_from(bytes)
        .ok()
        .and_then(AccessWidth::from_bytes)
        .ok_or(ScriptError::BadWidth { line, bytes })
}
