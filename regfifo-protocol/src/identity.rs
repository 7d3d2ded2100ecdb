//! Device identification record
//!
//! Answered by the `*IDN?` query as
//! `<manufacturer>, <model>, <serial>, <firmware>/<hardware>\r\n`.

/// Fixed identity of the device, set at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Identity {
    /// Manufacturer name
    pub manufacturer: &'static str,
    /// Model name
    pub model: &'static str,
    /// Serial number
    pub serial: &'static str,
    /// Firmware version string
    pub firmware_version: &'static str,
    /// Hardware revision string
    pub hardware_version: &'static str,
}

impl Identity {
    /// Length of the formatted identity line in bytes, terminator included
    pub const fn line_len(&self) -> usize {
        // ", " x3, "/", "\r\n"
        self.manufacturer.len()
            + self.model.len()
            + self.serial.len()
            + self.firmware_version.len()
            + self.hardware_version.len()
            + 9
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            manufacturer: "MFG",
            model: "MODEL",
            serial: "SN",
            firmware_version: "0.0.0",
            hardware_version: "1.0",
        }
    }
}
