//! Reading the opcode listing: picking out the opcode rows and splitting them into fields.
//!
//! A row starts with the opcode as exactly two uppercase hex digits and a space, e.g.
//! ```text
//! 00 1 8  imp      1  BRK  force break
//! ```
//! Everything else (headers, blank lines, commentary) is ignored. Field positions are fixed
//! by the variant's `Layout`.
use super::*;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_OPCODE_ROW: Regex = Regex::new(r"^[0-9A-F]{2} ").unwrap();
}

/// Where the interesting columns sit in one variant's listing.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// index of the mnemonic; it and everything after it is the descriptive text
    pub mnemonic: usize,
    /// the variant's descriptors carry the cycle count
    pub cycles: bool,
}
impl Layout {
    pub const OPCODE: usize = 0;
    pub const SIZE: usize = 1;
    pub const CYCLES: usize = 2;
    pub const MODE: usize = 3;
}

/// One opcode row split into its fields. Borrowed from the source line.
#[derive(Debug)]
pub struct OpcodeRow<'a> {
    pub opcode: u8,
    pub size: u8,
    /// leading digit of the cycle column, if the layout tracks cycles
    pub cycles: Option<u8>,
    pub size_src: &'a str,
    pub cycles_src: &'a str,
    pub mode_token: &'a str,
    /// the mnemonic column followed by the rest of the row
    pub text: Vec<&'a str>,
}
impl<'a> OpcodeRow<'a> {
    pub fn mnemonic(&self) -> &'a str { self.text[0] }
    /// The token right after the mnemonic (e.g. `0,zp,rel` for BBR0)
    pub fn operand(&self) -> Option<&'a str> { self.text.get(1).copied() }
    pub fn description(&self) -> String { self.text.join(" ") }
}

/// True if the line is an opcode row; everything else in a listing is skipped.
pub fn is_opcode_row(line: &str) -> bool { RE_OPCODE_ROW.is_match(line) }

/// Split an opcode row into its fields. Rows that don't fit the layout come back as
/// `ErrorKind::MalformedRow`, which callers report and skip.
pub fn tokenize<'a>(line: &'a str, line_num: usize, layout: &Layout) -> Result<OpcodeRow<'a>, Error> {
    let t: Vec<&str> = line.split_whitespace().collect();
    if t.len() < 2 || t.len() <= layout.mnemonic {
        return Err(malformed_row!(line_num, "too few fields: {}", t.len()));
    }
    let opcode = u8::from_str_radix(t[Layout::OPCODE], 16)
        .map_err(|_| malformed_row!(line_num, "bad opcode \"{}\"", t[Layout::OPCODE]))?;
    let size = t[Layout::SIZE]
        .parse::<u8>()
        .ok()
        .filter(|&s| s > 0)
        .ok_or_else(|| malformed_row!(line_num, "bad instruction length \"{}\"", t[Layout::SIZE]))?;
    let cycles = if layout.cycles {
        Some(leading_digit(t[Layout::CYCLES]).ok_or_else(|| {
            malformed_row!(line_num, "bad cycle count \"{}\"", t[Layout::CYCLES])
        })?)
    } else {
        None
    };
    let mnemonic = t[layout.mnemonic];
    if mnemonic != "-" && !mnemonic.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(malformed_row!(line_num, "bad mnemonic \"{}\"", mnemonic));
    }
    Ok(OpcodeRow {
        opcode,
        size,
        cycles,
        size_src: t[Layout::SIZE],
        cycles_src: t[Layout::CYCLES],
        mode_token: t[Layout::MODE],
        text: t[layout.mnemonic..].to_vec(),
    })
}

// Cycle columns look like `5`, `2*` or `7-m`; only the first digit is kept and a second
// digit right after it means the column isn't one we understand.
fn leading_digit(s: &str) -> Option<u8> {
    let mut chars = s.chars();
    let d = chars.next()?.to_digit(10)?;
    match chars.next() {
        Some(c) if c.is_ascii_digit() => None,
        _ => Some(d as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: Layout = Layout { mnemonic: 5, cycles: true };
    const LONG: Layout = Layout { mnemonic: 6, cycles: false };

    #[test]
    fn classifier() {
        assert!(is_opcode_row("00 1 8  imp      1  BRK  force break"));
        assert!(is_opcode_row("FF "));
        assert!(!is_opcode_row("ff 3 5  zp,rel   3  BBS  7,zp,rel"));
        assert!(!is_opcode_row("0F\t3 5  zp,rel"));
        assert!(!is_opcode_row("F 1 2 imp"));
        assert!(!is_opcode_row("Op Len Cyc Mode"));
        assert!(!is_opcode_row(""));
        assert!(!is_opcode_row(" 00 1 8 imp"));
    }
    #[test]
    fn brk_row() -> Result<(), Error> {
        let row = tokenize("00 1 8  imp      1  BRK  force break", 3, &SHORT)?;
        assert_eq!(row.opcode, 0x00);
        assert_eq!(row.size, 1);
        assert_eq!(row.cycles, Some(8));
        assert_eq!(row.mode_token, "imp");
        assert_eq!(row.mnemonic(), "BRK");
        assert_eq!(row.operand(), Some("force"));
        assert_eq!(row.description(), "BRK force break");
        Ok(())
    }
    #[test]
    fn long_layout_ignores_cycle_column() -> Result<(), Error> {
        let row = tokenize("FC 3 8-x (abs,X)  ----  e  JSR  (addr,X)", 1, &LONG)?;
        assert_eq!(row.opcode, 0xfc);
        assert_eq!(row.cycles, None);
        assert_eq!(row.cycles_src, "8-x");
        assert_eq!(row.mnemonic(), "JSR");
        Ok(())
    }
    #[test]
    fn single_token_is_malformed() {
        let e = tokenize("0A ", 7, &SHORT).unwrap_err();
        assert_eq!(e.kind, ErrorKind::MalformedRow);
        assert_eq!(e.line, Some(7));
        assert_eq!(e.msg, "too few fields: 1");
    }
    #[test]
    fn short_rows_are_malformed() {
        let e = tokenize("0A 1 2 acc 1", 1, &SHORT).unwrap_err();
        assert_eq!(e.kind, ErrorKind::MalformedRow);
        let e = tokenize("0A 1 2 acc 1 ASL", 1, &LONG).unwrap_err();
        assert_eq!(e.kind, ErrorKind::MalformedRow);
    }
    #[test]
    fn odd_fields_are_malformed() {
        for line in [
            "0A x 2 acc 1 ASL",
            "0A 0 2 acc 1 ASL",
            "0A 1 12 acc 1 ASL",
            "0A 1 - acc 1 ASL",
            "0A 1 2 acc 1 AS1",
        ] {
            let e = tokenize(line, 1, &SHORT).unwrap_err();
            assert_eq!(e.kind, ErrorKind::MalformedRow, "{}", line);
        }
    }
    #[test]
    fn cycle_column_keeps_first_digit() {
        assert_eq!(leading_digit("5*"), Some(5));
        assert_eq!(leading_digit("7-m"), Some(7));
        assert_eq!(leading_digit("2"), Some(2));
        assert_eq!(leading_digit("10"), None);
        assert_eq!(leading_digit(""), None);
    }
    #[test]
    fn placeholder_mnemonic_passes() -> Result<(), Error> {
        let row = tokenize("02 2 2  imm  2  -  -", 1, &SHORT)?;
        assert_eq!(row.mnemonic(), "-");
        Ok(())
    }
}
