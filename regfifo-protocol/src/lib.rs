//! Register Command Protocol
//!
//! This crate defines the ASCII line protocol spoken between a host and the
//! device. It is transport agnostic: the same framing runs over a UART or a
//! USB CDC endpoint.
//!
//! # Protocol Overview
//!
//! Commands are single text lines terminated by `\n`. A `\r` anywhere in
//! the stream is ignored, so both `\n` and `\r\n` endings work.
//!
//! ```text
//! rr<id>              read register          -> 0x<value>\r\n
//! wr<id:2><value>     write register         -> 0x<value>\r\n
//! *IDN?               identification query   -> <mfg>, <model>, <sn>, <fw>/<hw>\r\n
//! sts?                status dump            -> multi-line report
//! ```
//!
//! All numeric arguments are hexadecimal and parsed permissively (parsing
//! stops at the first non-hex character). Unknown commands produce no
//! response; unknown registers answer `0xffff`.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod hex;
pub mod identity;
pub mod line;
pub mod response;

pub use command::Command;
pub use hex::parse_hex;
pub use identity::Identity;
pub use line::{LineEvent, LineFramer};
pub use response::{ResponseError, ResponseLine, INVALID_VALUE, TX_LINE_MAX};
