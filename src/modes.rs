//! Addressing modes as the debugger tables name them, and the per-variant tables that map
//! the listing's printed operand column (`abs,X`, `(zp),Y`, `src,dest`, ...) onto them.
//!
//! A listing token that isn't in the variant's table is never passed through; the run
//! stops with `ErrorKind::UnknownAddressingMode` so the table and listing get fixed together.
use super::*;

use lazy_static::lazy_static;

/// All the addressing modes a descriptor can carry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum AddressingMode {
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Accumulator,
    Immediate,
    Implied,
    Dp,
    DpX,
    DpY,
    DpXIndirect,
    DpIndirect,
    DpIndirectLong,
    DpIndirectY,
    DpIndirectLongY,
    AbsoluteXIndirect,
    AbsoluteIndirect,
    AbsoluteIndirectLong,
    AbsoluteLong,
    AbsoluteLongX,
    BlockMove,
    PcRelative,
    PcRelativeLong,
    SRelative,
    SRelativeIndirectY,
    Zp,
    ZpX,
    ZpY,
    ZpXIndirect,
    ZpAndRelative,
    ZpIndirectY,
    ZpIndirect,
    /// unimplemented/illegal opcode
    Illegal,
}
impl AddressingMode {
    /// The identifier the generated tables use for this mode
    pub fn ident(self) -> &'static str {
        match self {
            AddressingMode::Absolute => "Absolute",
            AddressingMode::AbsoluteX => "Absolute_X",
            AddressingMode::AbsoluteY => "Absolute_Y",
            AddressingMode::Accumulator => "Accumulator",
            AddressingMode::Immediate => "Immediate",
            AddressingMode::Implied => "Implied",
            AddressingMode::Dp => "DP",
            AddressingMode::DpX => "DP_X",
            AddressingMode::DpY => "DP_Y",
            AddressingMode::DpXIndirect => "DP_X_Indirect",
            AddressingMode::DpIndirect => "DP_Indirect",
            AddressingMode::DpIndirectLong => "DP_Indirect_Long",
            AddressingMode::DpIndirectY => "DP_Indirect_Y",
            AddressingMode::DpIndirectLongY => "DP_Indirect_Long_Y",
            AddressingMode::AbsoluteXIndirect => "Absolute_X_Indirect",
            AddressingMode::AbsoluteIndirect => "Absolute_Indirect",
            AddressingMode::AbsoluteIndirectLong => "Absolute_Indirect_Long",
            AddressingMode::AbsoluteLong => "Absolute_Long",
            AddressingMode::AbsoluteLongX => "Absolute_Long_X",
            AddressingMode::BlockMove => "BlockMove",
            AddressingMode::PcRelative => "PC_Relative",
            AddressingMode::PcRelativeLong => "PC_Relative_Long",
            AddressingMode::SRelative => "S_Relative",
            AddressingMode::SRelativeIndirectY => "S_Relative_Indirect_Y",
            AddressingMode::Zp => "ZP",
            AddressingMode::ZpX => "ZP_X",
            AddressingMode::ZpY => "ZP_Y",
            AddressingMode::ZpXIndirect => "ZP_X_Indirect",
            AddressingMode::ZpAndRelative => "ZP_and_Relative",
            AddressingMode::ZpIndirectY => "ZP_Indirect_Y",
            AddressingMode::ZpIndirect => "ZP_Indirect",
            AddressingMode::Illegal => "Illegal",
        }
    }
}

/// Bank register an absolute operand is relative to (65816 only).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bank {
    /// data bank register
    Data,
}
impl Bank {
    pub fn suffix(self) -> &'static str {
        match self {
            Bank::Data => "_DBR",
        }
    }
}

/// An addressing mode plus the bank context the listing token implies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResolvedMode {
    pub mode: AddressingMode,
    pub bank: Option<Bank>,
}
impl ResolvedMode {
    pub const fn plain(mode: AddressingMode) -> Self { ResolvedMode { mode, bank: None } }
    pub const fn banked(mode: AddressingMode, bank: Bank) -> Self { ResolvedMode { mode, bank: Some(bank) } }
}
impl fmt::Display for ResolvedMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // pad so callers can line modes up in columns
        match self.bank {
            Some(bank) => f.pad(&format!("{}{}", self.mode.ident(), bank.suffix())),
            None => f.pad(self.mode.ident()),
        }
    }
}

pub type ModeTable = HashMap<&'static str, ResolvedMode>;

use AddressingMode::*;

// Tokens both listings share; `abs` differs per variant so it lives with each table.
const SHARED_TOKENS: &[(&str, ResolvedMode)] = &[
    ("abs,X", ResolvedMode::plain(AbsoluteX)),
    ("abs,Y", ResolvedMode::plain(AbsoluteY)),
    ("acc", ResolvedMode::plain(Accumulator)),
    ("imm", ResolvedMode::plain(Immediate)),
    ("imp", ResolvedMode::plain(Implied)),
    ("dir", ResolvedMode::plain(Dp)),
    ("dir,X", ResolvedMode::plain(DpX)),
    ("dir,Y", ResolvedMode::plain(DpY)),
    ("(dir,X)", ResolvedMode::plain(DpXIndirect)),
    ("(dir)", ResolvedMode::plain(DpIndirect)),
    ("[dir]", ResolvedMode::plain(DpIndirectLong)),
    ("(dir),Y", ResolvedMode::plain(DpIndirectY)),
    ("[dir],Y", ResolvedMode::plain(DpIndirectLongY)),
    ("(abs,X)", ResolvedMode::plain(AbsoluteXIndirect)),
    ("(abs)", ResolvedMode::plain(AbsoluteIndirect)),
    ("[abs]", ResolvedMode::plain(AbsoluteIndirectLong)),
    ("long", ResolvedMode::plain(AbsoluteLong)),
    ("long,X", ResolvedMode::plain(AbsoluteLongX)),
    ("src,dest", ResolvedMode::plain(BlockMove)),
    ("rel8", ResolvedMode::plain(PcRelative)),
    ("rel16", ResolvedMode::plain(PcRelativeLong)),
    ("stk,S", ResolvedMode::plain(SRelative)),
    ("(stk,S),Y", ResolvedMode::plain(SRelativeIndirectY)),
];

// The W65C02S data sheet names its operands after zero page.
const ZERO_PAGE_TOKENS: &[(&str, ResolvedMode)] = &[
    ("abs", ResolvedMode::plain(Absolute)),
    ("rel", ResolvedMode::plain(PcRelative)),
    ("(zp,X)", ResolvedMode::plain(ZpXIndirect)),
    ("zp", ResolvedMode::plain(Zp)),
    ("zp,X", ResolvedMode::plain(ZpX)),
    ("zp,Y", ResolvedMode::plain(ZpY)),
    ("zp,rel", ResolvedMode::plain(ZpAndRelative)),
    ("(zp),Y", ResolvedMode::plain(ZpIndirectY)),
    ("(zp)", ResolvedMode::plain(ZpIndirect)),
];

// On the 65816 a plain absolute operand is relative to the data bank.
const BANKED_TOKENS: &[(&str, ResolvedMode)] = &[("abs", ResolvedMode::banked(Absolute, Bank::Data))];

lazy_static! {
    pub static ref W65C02_MODES: ModeTable = SHARED_TOKENS.iter().chain(ZERO_PAGE_TOKENS).copied().collect();
    pub static ref W65C816_MODES: ModeTable = SHARED_TOKENS.iter().chain(BANKED_TOKENS).copied().collect();
}

/// Map a listing's addressing-mode token to its mode; `line` is only used for the error.
pub fn lookup(table: &ModeTable, token: &str, line: usize) -> Result<ResolvedMode, Error> {
    table.get(token).copied().ok_or_else(|| {
        line_err!(
            line,
            ErrorKind::UnknownAddressingMode,
            format!("unknown addressing mode \"{}\"", token)
        )
    })
}
