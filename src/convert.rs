//! Turning an opcode listing into descriptor records. The conversion is a single forward
//! pass: each line is classified, split, resolved and normalized on its own, and its record
//! is written before the next line is read.
use super::config::FillArgs;
use super::emit::OpcodeDescriptor;
use super::listing;
use super::modes;
use super::rules::{self, Draft};
use super::variant::Variant;
use super::*;

use std::fs::File;
use std::io::{BufRead, BufReader};

/// What a finished run did.
#[derive(Debug, Default)]
pub struct Report {
    /// records built from listing rows
    pub records: usize,
    /// placeholder records added by --fill/--fill-end
    pub filled: usize,
    /// rows that were reported and skipped
    pub malformed: Vec<Error>,
}

pub struct Converter<'v> {
    variant: &'v Variant,
    fill: FillArgs,
}
impl<'v> Converter<'v> {
    pub fn new(variant: &'v Variant, fill: FillArgs) -> Self { Converter { variant, fill } }

    fn filling(&self) -> bool { self.fill.fill || self.fill.fill_end.is_some() }

    /// Build the descriptor for one opcode row. `MalformedRow` errors are recoverable,
    /// `UnknownAddressingMode` is not.
    pub fn describe(&self, line: &str, line_num: usize) -> Result<OpcodeDescriptor, Error> {
        let row = listing::tokenize(line, line_num, &self.variant.layout)?;
        let mode = modes::lookup(self.variant.modes, row.mode_token, line_num)?;
        let mut draft = Draft {
            mnemonic: row.mnemonic().to_ascii_uppercase(),
            mode,
            operand: row.operand(),
        };
        rules::apply(self.variant.rules, &mut draft).map_err(|e| malformed_row!(line_num, "{}", e))?;
        Ok(OpcodeDescriptor {
            opcode: row.opcode,
            mnemonic: draft.mnemonic,
            mode: draft.mode,
            size: row.size,
            cycles: row.cycles,
            comment: self.variant.comment(&row),
        })
    }

    /// Convert a whole listing, writing records to `out` in input order.
    pub fn convert<R: BufRead>(&self, input: R, out: &mut dyn io::Write) -> Result<Report, Error> {
        let mut report = Report::default();
        // next opcode a placeholder could be needed for; 0x100 once the table is full
        let mut next = 0u16;
        self.variant.framing.begin(out)?;
        for (i, line) in input.lines().enumerate() {
            let line = line?;
            if !listing::is_opcode_row(&line) {
                continue;
            }
            match self.describe(&line, i + 1) {
                Ok(desc) => {
                    let opcode = desc.opcode as u16;
                    if self.filling() {
                        report.filled += self.fill_until(&mut next, opcode, out)?;
                    }
                    writeln!(out, "{}", desc)?;
                    next = next.max(opcode + 1);
                    report.records += 1;
                }
                Err(mut e) if e.kind == ErrorKind::MalformedRow => {
                    e.msg = format!("bad line {} ({})", line.trim_end(), e.msg);
                    warn!("{}", e);
                    report.malformed.push(e);
                }
                Err(e) => return Err(e),
            }
        }
        if let Some(end) = self.fill.fill_end {
            report.filled += self.fill_until(&mut next, end as u16 + 1, out)?;
        }
        self.variant.framing.end(out)?;
        Ok(report)
    }

    pub fn convert_file(&self, path: &Path, out: &mut dyn io::Write) -> Result<Report, Error> {
        let file = File::open(path)
            .map_err(|e| Error::new(ErrorKind::IO, None, &format!("{}: {}", path.display(), e)))?;
        verbose_println!("Converting {} listing {}", self.variant.name, path.display());
        self.convert(BufReader::new(file), out)
    }

    // emit placeholders for every opcode from *next up to (not including) stop
    fn fill_until(&self, next: &mut u16, stop: u16, out: &mut dyn io::Write) -> Result<usize, Error> {
        let mut count = 0;
        while *next < stop {
            writeln!(
                out,
                "{}",
                OpcodeDescriptor::placeholder(*next as u8, self.variant.layout.cycles)
            )?;
            *next += 1;
            count += 1;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{W65C02, W65C816};

    fn run(variant: &Variant, fill: FillArgs, src: &str) -> Result<(Report, Vec<String>), Error> {
        let mut out = Vec::new();
        let report = Converter::new(variant, fill).convert(src.as_bytes(), &mut out)?;
        let text = String::from_utf8_lossy(&out).to_string();
        Ok((report, text.lines().map(|l| l.to_string()).collect()))
    }

    const W65C02_LISTING: &str = "\
W65C02S opcodes, ordered

Op Len Cyc Mode   Len Mnem Operand/description
00 1 8  imp      1  BRK  force break
0F 3 5  zp,rel   3  BBR  0,zp,rel  branch on bit 0 reset
07 2 5  zp       2  rmb  0,zp  reset memory bit 0
0A 1 2  acc      1  ASL  A
02 2 2  imm      2  -    -
EA 1 2  imp      1  NOP
";

    #[test]
    fn w65c02_records_in_input_order() -> Result<(), Error> {
        let (report, lines) = run(&W65C02, FillArgs::default(), W65C02_LISTING)?;
        assert_eq!(report.records, 6);
        assert_eq!(report.filled, 0);
        assert!(report.malformed.is_empty());
        assert_eq!(
            lines,
            vec![
                "    {  .BRK, 1, 8, .Implied              }, // 00 BRK force break 1  8",
                "    { .BBR0, 3, 5, .ZP_and_Relative      }, // 0f BBR 0,zp,rel branch on bit 0 reset 3  5",
                "    { .RMB0, 2, 5, .ZP                   }, // 07 rmb 0,zp reset memory bit 0 2  5",
                "    {  .ASL, 1, 2, .Accumulator          }, // 0a ASL A          1  2",
                "    {  .ILL, 2, 2, .Illegal              }, // 02 - -            2  2",
                "    {  .NOP, 1, 2, .Implied              }, // ea NOP            1  2",
            ]
        );
        Ok(())
    }
    #[test]
    fn brk_descriptor() -> Result<(), Error> {
        let c = Converter::new(&W65C02, FillArgs::default());
        let d = c.describe("00 1 8  imp      1  BRK  force break", 1)?;
        assert_eq!(d.opcode, 0x00);
        assert_eq!(d.mnemonic, "BRK");
        assert_eq!(d.mode, modes::ResolvedMode::plain(modes::AddressingMode::Implied));
        assert_eq!(d.size, 1);
        assert_eq!(d.cycles, Some(8));
        Ok(())
    }
    #[test]
    fn malformed_rows_are_skipped() -> Result<(), Error> {
        let src = "00 1 8  imp  1  BRK\n0A \n0F 3 5 zp,rel 3 BBR 9,zp,rel\nEA 1 2  imp  1  NOP\n";
        let (report, lines) = run(&W65C02, FillArgs::default(), src)?;
        assert_eq!(report.records, 2);
        assert_eq!(report.malformed.len(), 2);
        assert_eq!(report.malformed[0].line, Some(2));
        assert_eq!(report.malformed[1].line, Some(3));
        assert!(report.malformed.iter().all(|e| e.kind == ErrorKind::MalformedRow));
        assert_eq!(report.malformed[0].to_string(), "line 2: bad line 0A (too few fields: 1)");
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("// ea NOP            1  2"));
        Ok(())
    }
    #[test]
    fn unknown_mode_aborts() {
        let src = "00 1 8  imp  1  BRK\n05 2 3  dirr  2  ORA zp\nEA 1 2  imp  1  NOP\n";
        let mut out = Vec::new();
        let e = Converter::new(&W65C02, FillArgs::default())
            .convert(src.as_bytes(), &mut out)
            .unwrap_err();
        assert_eq!(e.kind, ErrorKind::UnknownAddressingMode);
        assert_eq!(e.line, Some(2));
        // nothing after the bad row was written
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.lines().count(), 1);
        assert!(!text.contains("NOP"));
    }
    #[test]
    fn unknown_mode_is_fatal_even_for_illegal_rows() {
        let c = Converter::new(&W65C02, FillArgs::default());
        let e = c.describe("02 2 2  bogus  2  -  -", 1).unwrap_err();
        assert_eq!(e.kind, ErrorKind::UnknownAddressingMode);
    }
    #[test]
    fn w65c816_is_framed_and_bank_free() -> Result<(), Error> {
        let src = "\
4C 3 3  abs      --- - JMP  addr
20 3 6  abs      --- - JSR  addr
AD 3 4  abs      nz- m LDA  addr
62 3 6  rel16    --- - PER  label
6C 3 5  (abs)    --- - JMP  (addr)
54 3 7  src,dest --- x MVN  src,dest
";
        let (report, lines) = run(&W65C816, FillArgs::default(), src)?;
        assert_eq!(report.records, 6);
        assert_eq!(
            lines,
            vec![
                "",
                "CPU_w65c816_opcodes : [256]CPU_w65c816_debug = {",
                "    {  .JMP, 3, .Absolute               }, // 4c",
                "    {  .JSR, 3, .Absolute               }, // 20",
                "    {  .LDA, 3, .Absolute               }, // ad",
                "    {  .PER, 3, .PC_Relative_Long       }, // 62",
                "    {  .JMP, 3, .Absolute_Indirect      }, // 6c",
                "    {  .MVN, 3, .BlockMove              }, // 54",
                "",
                "}",
                "",
            ]
        );
        Ok(())
    }
    #[test]
    fn per_is_long_relative_even_when_listed_short() -> Result<(), Error> {
        let c = Converter::new(&W65C02, FillArgs::default());
        let d = c.describe("62 3 6  rel  3  PER  label", 1)?;
        assert_eq!(d.mode.to_string(), "PC_Relative_Long");
        Ok(())
    }
    #[test]
    fn fill_covers_gaps_and_tail() -> Result<(), Error> {
        let src = "01 2 6  (zp,X)  2  ORA  (zp,X)\n04 2 5  zp  2  TSB  zp\n02 2 2  imm  2  -  -\n";
        let fill = FillArgs {
            fill: false,
            fill_end: Some(0x06),
        };
        let (report, lines) = run(&W65C02, fill, src)?;
        assert_eq!(report.records, 3);
        // 00 before the first row, 02 and 03 before 04, then 05 and 06 at the end
        assert_eq!(report.filled, 5);
        let opcodes: Vec<&str> = lines.iter().map(|l| &l[l.find("// ").unwrap() + 3..][..2]).collect();
        assert_eq!(opcodes, vec!["00", "01", "02", "03", "04", "02", "05", "06"]);
        assert!(lines[0].contains(".ILL, 1, 1, .Illegal"));
        Ok(())
    }
    #[test]
    fn plain_fill_stops_at_last_row() -> Result<(), Error> {
        let fill = FillArgs {
            fill: true,
            fill_end: None,
        };
        let (report, lines) = run(&W65C816, fill, "02 2 8 imm - - COP const\n")?;
        assert_eq!(report.filled, 2);
        assert!(lines.iter().any(|l| l.ends_with("// 02")));
        assert!(!lines.iter().any(|l| l.ends_with("// 03")));
        Ok(())
    }
    #[test]
    fn fill_end_through_ff() -> Result<(), Error> {
        let fill = FillArgs {
            fill: false,
            fill_end: Some(0xff),
        };
        let (report, _) = run(&W65C816, fill, "FF 4 5 long,X - m SBC long,X\n")?;
        assert_eq!(report.records, 1);
        assert_eq!(report.filled, 0xff);
        Ok(())
    }
}
