//! Response line formatting
//!
//! Every response is one or more CRLF-terminated ASCII lines, each at most
//! [`TX_LINE_MAX`] bytes. Each line is handed to the transport as a single
//! write.

use core::fmt::Write;

use heapless::String;

use crate::identity::Identity;

/// Maximum length of a single response line in bytes
pub const TX_LINE_MAX: usize = 64;

/// Value reported for an unknown register
pub const INVALID_VALUE: u32 = 0xFFFF;

/// A formatted response line
pub type ResponseLine = String<TX_LINE_MAX>;

/// Errors that can occur while formatting a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResponseError {
    /// Formatted line does not fit in [`TX_LINE_MAX`] bytes
    Overflow,
}

/// Format `args` into a fresh line
fn format_line(args: core::fmt::Arguments<'_>) -> Result<ResponseLine, ResponseError> {
    let mut line = ResponseLine::new();
    line.write_fmt(args).map_err(|_| ResponseError::Overflow)?;
    Ok(line)
}

/// Single register value: `0x<hex>\r\n`
pub fn hex_value(value: u32) -> Result<ResponseLine, ResponseError> {
    format_line(format_args!("0x{:x}\r\n", value))
}

/// Answer for an unknown register: `0xffff\r\n`
pub fn invalid_value() -> Result<ResponseLine, ResponseError> {
    hex_value(INVALID_VALUE)
}

/// Identity line: `<mfg>, <model>, <serial>, <fw>/<hw>\r\n`
pub fn identity(id: &Identity) -> Result<ResponseLine, ResponseError> {
    format_line(format_args!(
        "{}, {}, {}, {}/{}\r\n",
        id.manufacturer, id.model, id.serial, id.firmware_version, id.hardware_version
    ))
}

/// First line of the status dump
pub fn status_header() -> Result<ResponseLine, ResponseError> {
    format_line(format_args!("\r\n** Registers **\r\n"))
}

/// One register line of the status dump: `Reg 0x01:\t0x<hex>\r\n`
pub fn status_register(id: u8, value: u32) -> Result<ResponseLine, ResponseError> {
    format_line(format_args!("Reg 0x{:02x}:\t0x{:x}\r\n", id, value))
}

/// Uptime line of the status dump, decimal milliseconds
pub fn status_uptime(millis: u32) -> Result<ResponseLine, ResponseError> {
    format_line(format_args!("Board Millis:\t{}\r\n", millis))
}

/// Header of the drop/timeout counter section
pub fn status_counters_header() -> Result<ResponseLine, ResponseError> {
    format_line(format_args!("** Counters **\r\n"))
}

/// One counter line: `<label>:\t<decimal>\r\n`
pub fn status_counter(label: &str, count: u32) -> Result<ResponseLine, ResponseError> {
    format_line(format_args!("{}:\t{}\r\n", label, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_value() {
        assert_eq!(hex_value(0).unwrap().as_str(), "0x0\r\n");
        assert_eq!(hex_value(0x50).unwrap().as_str(), "0x50\r\n");
        assert_eq!(hex_value(u32::MAX).unwrap().as_str(), "0xffffffff\r\n");
    }

    #[test]
    fn test_invalid_value() {
        assert_eq!(invalid_value().unwrap().as_str(), "0xffff\r\n");
    }

    #[test]
    fn test_identity_line() {
        let id = Identity {
            manufacturer: "ACME",
            model: "RF-1",
            serial: "0042",
            firmware_version: "1.3.8",
            hardware_version: "1.0",
        };
        let line = identity(&id).unwrap();
        assert_eq!(line.as_str(), "ACME, RF-1, 0042, 1.3.8/1.0\r\n");
        assert_eq!(line.len(), id.line_len());
    }

    #[test]
    fn test_identity_overflow() {
        let long = "0123456789012345678901234567890123456789";
        let id = Identity {
            manufacturer: long,
            model: long,
            ..Identity::default()
        };
        assert_eq!(identity(&id), Err(ResponseError::Overflow));
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(status_header().unwrap().as_str(), "\r\n** Registers **\r\n");
        assert_eq!(
            status_register(1, 0xAB).unwrap().as_str(),
            "Reg 0x01:\t0xab\r\n"
        );
        assert_eq!(
            status_uptime(123_456).unwrap().as_str(),
            "Board Millis:\t123456\r\n"
        );
        assert_eq!(
            status_counter("Overflows", 3).unwrap().as_str(),
            "Overflows:\t3\r\n"
        );
    }
}
