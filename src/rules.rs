//! Per-mnemonic special cases, kept as ordered tables of (predicate, transform) pairs so the
//! order they apply in is visible in one place. Each variant lists the rules it needs; they
//! run top to bottom on a `Draft` and a later rule sees what earlier ones produced.
use super::modes::{AddressingMode, Bank, ResolvedMode};

/// A descriptor under construction: the uppercased mnemonic, the mode from the generic
/// table lookup, and the token following the mnemonic in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft<'a> {
    pub mnemonic: String,
    pub mode: ResolvedMode,
    pub operand: Option<&'a str>,
}

pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Draft) -> bool,
    /// a failed transform leaves the row malformed; the message says why
    pub apply: fn(&mut Draft) -> Result<(), String>,
}

/// Mnemonics whose opcode encodes a bit index the listing prints in the operand column.
pub const BIT_INDEX_MNEMONICS: &[&str] = &["BBS", "BBR", "RMB", "SMB"];

/// The listing's placeholder for a missing opcode, and what it turns into.
pub const PLACEHOLDER: &str = "-";
pub const ILLEGAL_MNEMONIC: &str = "ILL";

/// `BBS` + `3,zp,rel` becomes `BBS3`
pub static BIT_INDEX: Rule = Rule {
    name: "bit index",
    applies: |d| BIT_INDEX_MNEMONICS.contains(&d.mnemonic.as_str()),
    apply: |d| {
        let operand = d.operand.ok_or_else(|| format!("{} without a bit number", d.mnemonic))?;
        let bit = operand.split(',').next().unwrap_or_default();
        match bit.as_bytes() {
            [b @ b'0'..=b'7'] => {
                d.mnemonic.push(*b as char);
                Ok(())
            }
            _ => Err(format!("bad bit number \"{}\" for {}", bit, d.mnemonic)),
        }
    },
};

/// PER pushes a 16-bit relative address no matter how the listing prints it.
pub static PER_LONG_RELATIVE: Rule = Rule {
    name: "PER is long relative",
    applies: |d| d.mnemonic == "PER",
    apply: |d| {
        d.mode = ResolvedMode::plain(AddressingMode::PcRelativeLong);
        Ok(())
    },
};

/// JMP/JSR absolute operands are in the program bank, not the data bank.
pub static JUMP_ABSOLUTE: Rule = Rule {
    name: "JMP/JSR absolute",
    applies: |d| {
        matches!(d.mnemonic.as_str(), "JMP" | "JSR")
            && d.mode == ResolvedMode::banked(AddressingMode::Absolute, Bank::Data)
    },
    apply: |d| {
        d.mode = ResolvedMode::plain(AddressingMode::Absolute);
        Ok(())
    },
};

/// The 65816 descriptor format has no notion of bank context.
pub static STRIP_BANK: Rule = Rule {
    name: "strip bank",
    applies: |d| d.mode.bank.is_some(),
    apply: |d| {
        d.mode.bank = None;
        Ok(())
    },
};

/// Must come last: illegal opcodes never keep a meaningful mode.
pub static ILLEGAL: Rule = Rule {
    name: "illegal opcode",
    applies: |d| d.mnemonic == PLACEHOLDER,
    apply: |d| {
        d.mnemonic = ILLEGAL_MNEMONIC.to_string();
        d.mode = ResolvedMode::plain(AddressingMode::Illegal);
        Ok(())
    },
};

/// Run the rules in order. Stops at the first transform that fails.
pub fn apply(rules: &[&Rule], draft: &mut Draft) -> Result<(), String> {
    for rule in rules {
        if (rule.applies)(draft) {
            (rule.apply)(draft).map_err(|e| format!("{} ({})", e, rule.name))?;
        }
    }
    Ok(())
}
