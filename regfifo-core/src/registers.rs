//! Register file
//!
//! A small fixed set of 32-bit registers addressed by identifiers 1..=3.
//! Identifiers outside the set are rejected, never created. Values live for
//! the process lifetime and start at zero after reset.

/// Number of registers
pub const REGISTER_COUNT: usize = 3;

/// Register identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterId {
    R1 = 1,
    R2 = 2,
    R3 = 3,
}

impl RegisterId {
    /// All registers in address order
    pub const ALL: [RegisterId; REGISTER_COUNT] = [RegisterId::R1, RegisterId::R2, RegisterId::R3];

    /// Map a parsed identifier to a register
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(RegisterId::R1),
            2 => Some(RegisterId::R2),
            3 => Some(RegisterId::R3),
            _ => None,
        }
    }

    /// Wire identifier
    pub fn raw(self) -> u8 {
        self as u8
    }

    fn index(self) -> usize {
        self as usize - 1
    }
}

/// The device register file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterFile {
    values: [u32; REGISTER_COUNT],
}

impl RegisterFile {
    /// All registers cleared to zero
    pub const fn new() -> Self {
        Self {
            values: [0; REGISTER_COUNT],
        }
    }

    /// Read one register
    pub fn read(&self, id: RegisterId) -> u32 {
        self.values[id.index()]
    }

    /// Write one register
    pub fn write(&mut self, id: RegisterId, value: u32) {
        self.values[id.index()] = value;
    }

    /// Read by raw identifier, `None` for unknown identifiers
    pub fn get(&self, raw: u32) -> Option<u32> {
        RegisterId::from_raw(raw).map(|id| self.read(id))
    }

    /// Write by raw identifier
    ///
    /// Returns `false` (and changes nothing) for unknown identifiers.
    pub fn set(&mut self, raw: u32, value: u32) -> bool {
        match RegisterId::from_raw(raw) {
            Some(id) => {
                self.write(id, value);
                true
            }
            None => false,
        }
    }

    /// Iterate `(id, value)` in address order
    pub fn iter(&self) -> impl Iterator<Item = (RegisterId, u32)> + '_ {
        RegisterId::ALL.into_iter().map(move |id| (id, self.read(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed() {
        let regs = RegisterFile::new();
        for (_, value) in regs.iter() {
            assert_eq!(value, 0);
        }
    }

    #[test]
    fn test_read_write() {
        let mut regs = RegisterFile::new();
        regs.write(RegisterId::R2, 0xDEAD_BEEF);
        assert_eq!(regs.read(RegisterId::R2), 0xDEAD_BEEF);
        assert_eq!(regs.read(RegisterId::R1), 0);
        assert_eq!(regs.read(RegisterId::R3), 0);
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let mut regs = RegisterFile::new();
        assert_eq!(regs.get(0), None);
        assert_eq!(regs.get(4), None);
        assert_eq!(regs.get(0x101), None);
        assert!(!regs.set(9, 1));
        assert_eq!(regs, RegisterFile::new());
    }

    #[test]
    fn test_raw_access() {
        let mut regs = RegisterFile::new();
        assert!(regs.set(3, 7));
        assert_eq!(regs.get(3), Some(7));
        assert_eq!(RegisterId::R3.raw(), 3);
    }

    #[test]
    fn test_iter_order() {
        let mut regs = RegisterFile::new();
        regs.write(RegisterId::R1, 10);
        regs.write(RegisterId::R3, 30);
        let mut iter = regs.iter();
        assert_eq!(iter.next(), Some((RegisterId::R1, 10)));
        assert_eq!(iter.next(), Some((RegisterId::R2, 0)));
        assert_eq!(iter.next(), Some((RegisterId::R3, 30)));
        assert_eq!(iter.next(), None);
    }
}
