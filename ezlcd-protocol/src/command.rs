//! Command framing for the ezLCD+103.
//!
//! Command format:
//! - OPCODE (1 byte): command identifier
//! - PARAMS (0-1021 bytes): fixed layout per opcode, 16-bit values high byte first
//!
//! There is no length or checksum on the wire. The display finds the end of
//! a command from the opcode's parameter layout, and the host marks it by
//! releasing chip select after the last byte.

use heapless::Vec;

/// Maximum parameter bytes in one command
///
/// Sized for the longest command: a 255-vertex polygon (count byte plus
/// four bytes per vertex).
pub const MAX_PARAMS: usize = 1 + 255 * 4;

/// Maximum complete command size (OPCODE + MAX_PARAMS)
pub const MAX_COMMAND_SIZE: usize = 1 + MAX_PARAMS;

/// Errors that can occur while building or encoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Parameters exceed [`MAX_PARAMS`]
    TooManyParams,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Polygon vertex count outside the accepted range
    InvalidVertexCount,
    /// Image path empty, too long, or containing a NUL byte
    InvalidPath,
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooManyParams => write!(f, "Too many command parameters"),
            Self::BufferTooSmall => write!(f, "Buffer too small"),
            Self::InvalidVertexCount => write!(f, "Invalid polygon vertex count"),
            Self::InvalidPath => write!(f, "Invalid image path"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

/// An opcode and its parameter bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command identifier
    pub opcode: u8,
    /// Parameter bytes in wire order
    pub params: Vec<u8, MAX_PARAMS>,
}

impl Command {
    /// Create a command with the given opcode and parameters
    pub fn new(opcode: u8, params: &[u8]) -> Result<Self, CommandError> {
        let mut cmd = Self::opcode_only(opcode);
        cmd.push_bytes(params)?;
        Ok(cmd)
    }

    /// Create a command with no parameters
    pub fn opcode_only(opcode: u8) -> Self {
        Self {
            opcode,
            params: Vec::new(),
        }
    }

    /// Append one byte
    pub fn push_u8(&mut self, value: u8) -> Result<&mut Self, CommandError> {
        self.params
            .push(value)
            .map_err(|_| CommandError::TooManyParams)?;
        Ok(self)
    }

    /// Append a 16-bit value, high byte first
    pub fn push_u16(&mut self, value: u16) -> Result<&mut Self, CommandError> {
        self.push_bytes(&value.to_be_bytes())
    }

    /// Append a signed 16-bit value as two's complement, high byte first
    pub fn push_i16(&mut self, value: i16) -> Result<&mut Self, CommandError> {
        self.push_bytes(&value.to_be_bytes())
    }

    /// Append raw bytes
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self, CommandError> {
        self.params
            .extend_from_slice(bytes)
            .map_err(|_| CommandError::TooManyParams)?;
        Ok(self)
    }

    /// Total bytes on the wire
    pub fn len(&self) -> usize {
        1 + self.params.len()
    }

    /// Always false; a command carries at least its opcode
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true if the command is the opcode alone
    pub fn is_opcode_only(&self) -> bool {
        self.params.is_empty()
    }

    /// Wire bytes in order: opcode, then parameters
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        core::iter::once(self.opcode).chain(self.params.iter().copied())
    }

    /// Encode this command into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, CommandError> {
        let len = self.len();
        let out = buffer.get_mut(..len).ok_or(CommandError::BufferTooSmall)?;
        for (slot, byte) in out.iter_mut().zip(self.bytes()) {
            *slot = byte;
        }
        Ok(len)
    }

    /// Encode this command into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_COMMAND_SIZE>, CommandError> {
        let mut vec = Vec::new();
        vec.push(self.opcode)
            .map_err(|_| CommandError::BufferTooSmall)?;
        vec.extend_from_slice(&self.params)
            .map_err(|_| CommandError::BufferTooSmall)?;
        Ok(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_only_command() {
        let cmd = Command::opcode_only(0x21); // CLEAR
        assert!(cmd.is_opcode_only());
        assert_eq!(cmd.len(), 1);

        let mut buffer = [0u8; 4];
        assert_eq!(cmd.encode(&mut buffer).unwrap(), 1);
        assert_eq!(buffer[0], 0x21);
    }

    #[test]
    fn test_u16_is_big_endian() {
        let mut cmd = Command::opcode_only(0x59);
        cmd.push_u16(0x1234).unwrap();
        assert_eq!(cmd.params.as_slice(), &[0x12, 0x34]);
    }

    #[test]
    fn test_negative_i16_matches_shift_and_mask() {
        let mut cmd = Command::opcode_only(0x33);
        cmd.push_i16(-2).unwrap().push_i16(300).unwrap();
        assert_eq!(cmd.params.as_slice(), &[0xFF, 0xFE, 0x01, 0x2C]);
    }

    #[test]
    fn test_bytes_yields_opcode_first() {
        let cmd = Command::new(0xB1, &[5, 2]).unwrap();
        let mut out = [0u8; 3];
        for (slot, byte) in out.iter_mut().zip(cmd.bytes()) {
            *slot = byte;
        }
        assert_eq!(out, [0xB1, 5, 2]);
        assert_eq!(cmd.encode_to_vec().unwrap().as_slice(), &[0xB1, 5, 2]);
    }

    #[test]
    fn test_buffer_too_small() {
        let cmd = Command::new(0x31, &[1, 2, 3]).unwrap();
        let mut buffer = [0u8; 3];
        assert_eq!(cmd.encode(&mut buffer), Err(CommandError::BufferTooSmall));
    }

    #[test]
    fn test_too_many_params() {
        let params = [0u8; MAX_PARAMS + 1];
        assert_eq!(Command::new(0xA6, &params), Err(CommandError::TooManyParams));

        let mut full = Command::new(0xA6, &[0u8; MAX_PARAMS]).unwrap();
        assert_eq!(full.push_u8(1).err(), Some(CommandError::TooManyParams));
    }
}
