use crate::Result;
use crate::timing::table::TimingTable;
use anyhow::{Context, bail};
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;

/// Parse a timing file into a table.
///
/// Expected columns (whitespace-separated):
/// op_index  nanoseconds
///
/// Example:
/// 0   1325706
/// 1   799440     # trailing comments are allowed
pub fn parse_timing_file(path: &str) -> Result<TimingTable> {
    let text = fs::read_to_string(path).with_context(|| format!("read timing file {}", path))?;
    parse_timings(&text, path)
}

/// Parse timing text; `origin` only appears in error messages.
pub fn parse_timings(text: &str, origin: &str) -> Result<TimingTable> {
    let re = Regex::new(r"^\s*(\d+)\s+(\d+)\s*$")?;

    let mut out = BTreeMap::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let line = match line.split_once('#') {
            Some((data, _comment)) => data,
            None => line,
        };

        if line.trim().is_empty() {
            continue;
        }

        let Some(caps) = re.captures(line) else {
            bail!(
                "timing parse error at {}:{}: cannot parse line: {:?}",
                origin,
                lno,
                line.trim()
            );
        };

        let op_index: usize = caps[1]
            .parse()
            .with_context(|| format!("bad op index at {}:{}", origin, lno))?;
        let nanos: u64 = caps[2]
            .parse()
            .with_context(|| format!("bad duration at {}:{}", origin, lno))?;

        if out.insert(op_index, nanos).is_some() {
            bail!(
                "duplicate op index in timing file at {}:{}: {}",
                origin,
                lno,
                op_index
            );
        }
    }

    Ok(TimingTable::new(out))
}
