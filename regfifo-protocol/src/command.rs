//! Command classification and argument parsing
//!
//! A framed line is matched by literal, case-sensitive prefix against the
//! four known commands. Anything else is not a command and is ignored by
//! the dispatcher without a response.

use crate::hex::parse_hex;

/// Read register: `rr<hex-id>`
pub const READ_REGISTER_PREFIX: &[u8] = b"rr";
/// Write register: `wr<2-hex-id><hex-value>`
pub const WRITE_REGISTER_PREFIX: &[u8] = b"wr";
/// Identification query
pub const IDENTIFY_PREFIX: &[u8] = b"*IDN?";
/// Status query
pub const STATUS_PREFIX: &[u8] = b"sts?";

/// Width of the register identifier field of a write command
pub const WRITE_ID_WIDTH: usize = 2;
/// Maximum width of the value field of a write command
pub const WRITE_VALUE_WIDTH: usize = 10;

/// A recognised command with its parsed arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Read one register
    ReadRegister { id: u32 },
    /// Store `value` into one register
    WriteRegister { id: u32, value: u32 },
    /// Report the device identity
    Identify,
    /// Report all registers and the uptime
    Status,
}

impl Command {
    /// Classify and parse a framed line
    ///
    /// `line` is the logical content of a record. Trailing sentinel bytes
    /// are harmless: they stop the hex parser like any non-hex byte.
    /// Returns `None` for unrecognised lines.
    pub fn parse(line: &[u8]) -> Option<Self> {
        if let Some(args) = line.strip_prefix(READ_REGISTER_PREFIX) {
            Some(Command::ReadRegister {
                id: parse_hex(args),
            })
        } else if let Some(args) = line.strip_prefix(WRITE_REGISTER_PREFIX) {
            let (id_field, rest) = args.split_at(args.len().min(WRITE_ID_WIDTH));
            let value_field = &rest[..rest.len().min(WRITE_VALUE_WIDTH)];
            Some(Command::WriteRegister {
                id: parse_hex(id_field),
                value: parse_hex(value_field),
            })
        } else if line.starts_with(IDENTIFY_PREFIX) {
            Some(Command::Identify)
        } else if line.starts_with(STATUS_PREFIX) {
            Some(Command::Status)
        } else {
            None
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::ReadRegister { .. } => "read",
            Command::WriteRegister { .. } => "write",
            Command::Identify => "identify",
            Command::Status => "status",
        }
    }
}
