//! The two supported instruction-set dialects. Each one is just data: where its listing keeps
//! the columns, which mode table and special-case rules it uses, and how its output is framed.
use super::emit::Framing;
use super::listing::{Layout, OpcodeRow};
use super::modes::{self, ModeTable};
use super::rules::{self, Rule};

use lazy_static::lazy_static;

/// What the trailing `//` comment of each record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// opcode, the listing's descriptive text, and the raw length/cycle columns
    Listing,
    /// just the opcode
    OpcodeOnly,
}

pub struct Variant {
    pub name: &'static str,
    pub layout: Layout,
    pub modes: &'static ModeTable,
    /// applied in order after the mode lookup
    pub rules: &'static [&'static Rule],
    pub framing: Framing,
    pub comment: CommentStyle,
}
impl Variant {
    pub fn comment(&self, row: &OpcodeRow) -> String {
        match self.comment {
            CommentStyle::Listing => format!(
                "{:02x} {:<14} {}  {}",
                row.opcode,
                row.description(),
                row.size_src,
                row.cycles_src
            ),
            CommentStyle::OpcodeOnly => format!("{:02x}", row.opcode),
        }
    }
}

static W65C02_RULES: &[&Rule] = &[&rules::BIT_INDEX, &rules::PER_LONG_RELATIVE, &rules::ILLEGAL];
static W65C816_RULES: &[&Rule] = &[
    &rules::PER_LONG_RELATIVE,
    &rules::JUMP_ABSOLUTE,
    &rules::STRIP_BANK,
    &rules::ILLEGAL,
];

lazy_static! {
    pub static ref W65C02: Variant = Variant {
        name: "W65C02S",
        layout: Layout {
            mnemonic: 5,
            cycles: true
        },
        modes: &modes::W65C02_MODES,
        rules: W65C02_RULES,
        framing: Framing::Bare,
        comment: CommentStyle::Listing,
    };
    pub static ref W65C816: Variant = Variant {
        name: "W65C816S",
        layout: Layout {
            mnemonic: 6,
            cycles: false
        },
        modes: &modes::W65C816_MODES,
        rules: W65C816_RULES,
        framing: Framing::Array {
            preamble: "\nCPU_w65c816_opcodes : [256]CPU_w65c816_debug = {",
            epilogue: "\n}\n",
        },
        comment: CommentStyle::OpcodeOnly,
    };
}
