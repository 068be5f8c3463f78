/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bit_buffer::BitBuffer;

pub struct ByteEncoder;

impl ByteEncoder {
    /// Each input byte becomes exactly 8 bits
    pub fn encode(data: &[u8]) -> BitBuffer {
        BitBuffer::from_bytes(data)
    }
}
