// Three-address code instruction record

use std::fmt;

/// Value used where an operand cannot be resolved.
pub const UNKNOWN_VALUE: &str = "unknown";

/// One TAC instruction: `op arg1 arg2 result`
///
/// An `op` ending in `:` is a label pseudo-op and carries no operands.
/// Empty strings mark unused fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub op: String,
    pub arg1: String,
    pub arg2: String,
    pub result: String,
}

impl Instruction {
    pub fn new(
        op: impl Into<String>,
        arg1: impl Into<String>,
        arg2: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            op: op.into(),
            arg1: arg1.into(),
            arg2: arg2.into(),
            result: result.into(),
        }
    }

    /// Label pseudo-op for `name` (rendered `name:`).
    pub fn label(name: &str) -> Self {
        Self::new(format!("{}:", name), "", "", "")
    }

    /// Unconditional jump to `target`.
    pub fn goto(target: &str) -> Self {
        Self::new("goto", "", "", target)
    }

    pub fn is_label(&self) -> bool {
        self.op.ends_with(':')
    }

    /// Label name without the trailing colon, for label pseudo-ops.
    pub fn label_name(&self) -> Option<&str> {
        self.op.strip_suffix(':')
    }
}

/// Space-separated non-empty fields, e.g. `if x goto L1` or `= 5 x`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [&self.op, &self.arg1, &self.arg2, &self.result];
        let mut first = true;
        for field in fields.iter().filter(|s| !s.is_empty()) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(field)?;
            first = false;
        }
        Ok(())
    }
}
