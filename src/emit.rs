use super::modes::{AddressingMode, ResolvedMode};
use super::rules::ILLEGAL_MNEMONIC;
use super::*;

/// One finished table entry, written out as soon as it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeDescriptor {
    pub opcode: u8,
    pub mnemonic: String,
    pub mode: ResolvedMode,
    pub size: u8,
    pub cycles: Option<u8>,
    /// text after the `//`
    pub comment: String,
}
impl OpcodeDescriptor {
    /// Stand-in for an opcode the listing doesn't mention.
    pub fn placeholder(opcode: u8, with_cycles: bool) -> Self {
        OpcodeDescriptor {
            opcode,
            mnemonic: ILLEGAL_MNEMONIC.to_string(),
            mode: ResolvedMode::plain(AddressingMode::Illegal),
            size: 1,
            cycles: if with_cycles { Some(1) } else { None },
            comment: format!("{:02x} illegal/unknown opcode", opcode),
        }
    }
}
impl fmt::Display for OpcodeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = format!(".{}", self.mnemonic);
        match self.cycles {
            Some(cycles) => write!(
                f,
                "    {{ {:>5}, {}, {}, .{:<20} }}, // {}",
                name, self.size, cycles, self.mode, self.comment
            ),
            None => write!(
                f,
                "    {{ {:>5}, {}, .{:<22} }}, // {}",
                name, self.size, self.mode, self.comment
            ),
        }
    }
}

/// What surrounds the records in the output.
#[derive(Debug, Clone, Copy)]
pub enum Framing {
    /// just the records, for pasting into a table defined elsewhere
    Bare,
    /// a complete array declaration
    Array {
        preamble: &'static str,
        epilogue: &'static str,
    },
}
impl Framing {
    pub fn begin(&self, out: &mut dyn io::Write) -> io::Result<()> {
        match self {
            Framing::Bare => Ok(()),
            Framing::Array { preamble, .. } => writeln!(out, "{}", preamble),
        }
    }
    pub fn end(&self, out: &mut dyn io::Write) -> io::Result<()> {
        match self {
            Framing::Bare => Ok(()),
            Framing::Array { epilogue, .. } => writeln!(out, "{}", epilogue),
        }
    }
}
