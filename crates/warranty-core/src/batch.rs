//! Bulk operations: minting consecutive codes and auditing code lists.

use crate::checksum::inspect_warranty_code;
use crate::code::{BaseNumber, WarrantyCode, MAX_BASE_INDEX};
use crate::error::{Rejection, WarrantyError};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::io::{self, BufRead};

/// Mint `count` consecutive warranty codes starting at `start`.
///
/// The whole range must fit below `99999`; nothing is returned otherwise.
pub fn generate_range(start: BaseNumber, count: u32) -> Result<Vec<WarrantyCode>, WarrantyError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let last = u64::from(start.index()) + u64::from(count) - 1;
    if last > u64::from(MAX_BASE_INDEX) {
        return Err(WarrantyError::RangeOverflow {
            start: start.to_string(),
            count,
        });
    }

    let mut codes = Vec::with_capacity(count as usize);
    let mut base = Some(start);
    while let Some(b) = base {
        codes.push(WarrantyCode::generate(b));
        if codes.len() == count as usize {
            break;
        }
        base = b.successor();
    }
    tracing::debug!(start = %start, count, "generated warranty code range");
    Ok(codes)
}

/// Verification result for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number in the input.
    pub line: usize,
    /// The line with surrounding whitespace trimmed.
    pub input: String,
    pub result: Result<WarrantyCode, Rejection>,
}

impl LineOutcome {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

impl Serialize for LineOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("LineOutcome", 4)?;
        s.serialize_field("line", &self.line)?;
        s.serialize_field("input", &self.input)?;
        s.serialize_field("valid", &self.is_valid())?;
        let reason = self.result.as_ref().err().map(|r| r.to_string());
        s.serialize_field("reason", &reason)?;
        s.end()
    }
}

/// Outcomes for every checked line, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub outcomes: Vec<LineOutcome>,
}

impl VerifyReport {
    pub fn valid_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.outcomes.len() - self.valid_count()
    }

    pub fn is_all_valid(&self) -> bool {
        self.outcomes.iter().all(LineOutcome::is_valid)
    }
}

/// Check one warranty code per line.
///
/// Blank lines and lines starting with `#` are skipped but still counted
/// for line numbering. A line that is not valid UTF-8 is rejected with
/// [`Rejection::InvalidUtf8`]; only I/O failures abort the report.
pub fn verify_lines<R: BufRead>(reader: R) -> io::Result<VerifyReport> {
    let mut report = VerifyReport::default();
    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line = idx + 1;
        let decoded = String::from_utf8_lossy(&raw);
        let input = decoded.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }
        let result = match std::str::from_utf8(&raw) {
            Ok(_) => inspect_warranty_code(input),
            Err(_) => {
                tracing::debug!(line, "rejected warranty code: invalid UTF-8");
                Err(Rejection::InvalidUtf8)
            }
        };
        report.outcomes.push(LineOutcome {
            line,
            input: input.to_string(),
            result,
        });
    }
    tracing::debug!(
        checked = report.outcomes.len(),
        invalid = report.invalid_count(),
        "verified warranty code list"
    );
    Ok(report)
}
