//! A grep-alike for source trees that tags each hit with the procedure it was found in.
//!
//! Procedures are recognized by declarations of the form
//! ```text
//! cpu_reset :: proc(cpu: ^CPU) {
//! ```
//! and the most recent one stays current until the next (across files, too). Lines inside
//! `/* ... */` blocks and hits on `//` comment lines are never reported.
use super::*;

use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};

lazy_static! {
    static ref RE_PROC: Regex = Regex::new(r"^([0-9A-Za-z_]+) +::.+proc").unwrap();
}

pub struct Grep {
    pattern: Regex,
    with_filename: bool,
    in_comment: bool,
    proc: String,
}
impl Grep {
    pub fn new(pattern: &str, with_filename: bool) -> Result<Self, Error> {
        let pattern =
            Regex::new(pattern).map_err(|e| Error::new(ErrorKind::Pattern, None, &format!("bad pattern: {}", e)))?;
        Ok(Grep {
            pattern,
            with_filename,
            in_comment: false,
            proc: String::new(),
        })
    }

    /// Feed one line; returns the text to print if it is a hit.
    pub fn scan_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim_end();
        if line.starts_with("/*") {
            self.in_comment = true;
        }
        if line.ends_with("*/") {
            self.in_comment = false;
        }
        if self.in_comment {
            return None;
        }
        if let Some(c) = RE_PROC.captures(line) {
            self.proc = c[1].to_string();
        }
        if !self.pattern.is_match(line) {
            return None;
        }
        let line = line.trim_start();
        if line.starts_with("//") {
            return None;
        }
        Some(format!("{:<32} {}", self.proc, line))
    }

    /// Search one input, writing hits to `out`. Returns the number of hits.
    pub fn search<R: BufRead>(&mut self, name: &str, input: R, out: &mut dyn io::Write) -> Result<usize, Error> {
        let mut hits = 0;
        for line in input.lines() {
            if let Some(hit) = self.scan_line(&line?) {
                if self.with_filename {
                    writeln!(out, "{}: {}", name, hit)?;
                } else {
                    writeln!(out, "{}", hit)?;
                }
                hits += 1;
            }
        }
        Ok(hits)
    }
}

/// Search each file in turn ('-', or no files at all, means stdin).
pub fn run(pattern: &str, files: &[String], with_filename: bool, out: &mut dyn io::Write) -> Result<usize, Error> {
    let mut grep = Grep::new(pattern, with_filename)?;
    let mut hits = 0;
    if files.is_empty() {
        return grep.search("-", io::stdin().lock(), out);
    }
    for f in files {
        if f == "-" {
            hits += grep.search(f, io::stdin().lock(), out)?;
        } else {
            verbose_println!("Searching {}", f);
            let file = File::open(f).map_err(|e| Error::new(ErrorKind::IO, None, &format!("{}: {}", f, e)))?;
            hits += grep.search(f, BufReader::new(file), out)?;
        }
    }
    Ok(hits)
}
