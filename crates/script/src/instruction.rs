//! Opcode-by-opcode decoding of raw script bytes.

use crate::opcodes::{MAX_DIRECT_PUSH, OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Instruction<'a> {
    pub opcode: u8,
    pub data: &'a [u8],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InstructionError {
    TruncatedLength,
    TruncatedData,
}

impl std::fmt::Display for InstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstructionError::TruncatedLength => write!(f, "truncated push length"),
            InstructionError::TruncatedData => write!(f, "truncated push data"),
        }
    }
}

impl std::error::Error for InstructionError {}

// Fused after the first decode error.
#[derive(Clone, Debug)]
pub struct Instructions<'a> {
    script: &'a [u8],
    cursor: usize,
    failed: bool,
}

impl<'a> Instructions<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self {
            script,
            cursor: 0,
            failed: false,
        }
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    fn read_len(&mut self, width: usize) -> Result<usize, InstructionError> {
        let bytes = self
            .script
            .get(self.cursor..self.cursor + width)
            .ok_or(InstructionError::TruncatedLength)?;
        self.cursor += width;
        let len = match width {
            1 => bytes[0] as usize,
            2 => u16::from_le_bytes([bytes[0], bytes[1]]) as usize,
            _ => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize,
        };
        Ok(len)
    }

    fn decode(&mut self) -> Result<Instruction<'a>, InstructionError> {
        let opcode = self.script[self.cursor];
        self.cursor += 1;
        let len = match opcode {
            0x01..=MAX_DIRECT_PUSH => opcode as usize,
            OP_PUSHDATA1 => self.read_len(1)?,
            OP_PUSHDATA2 => self.read_len(2)?,
            OP_PUSHDATA4 => self.read_len(4)?,
            _ => 0,
        };
        let end = self
            .cursor
            .checked_add(len)
            .filter(|end| *end <= self.script.len())
            .ok_or(InstructionError::TruncatedData)?;
        let data = &self.script[self.cursor..end];
        self.cursor = end;
        Ok(Instruction { opcode, data })
    }
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Result<Instruction<'a>, InstructionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.script.len() {
            return None;
        }
        let result = self.decode();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

pub fn instructions(script: &[u8]) -> Instructions<'_> {
    Instructions::new(script)
}
