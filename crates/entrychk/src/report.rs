//! Report rendering: human text or a JSON receipt.

use serde::Serialize;

use entrychk_types::{SourceMetrics, ValidationError};

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "entrychk".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Receipt for a `size` run.
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    pub tool: ToolInfo,
    pub file: String,
    #[serde(flatten)]
    pub metrics: SourceMetrics,
    pub rule_2a_limit: u64,
    pub rule_2b_limit: u64,
    pub rule_2a_over: bool,
    pub rule_2b_over: bool,
}

impl SizeReport {
    pub fn new(file: String, metrics: SourceMetrics, rule_2a_limit: u64, rule_2b_limit: u64) -> Self {
        Self {
            tool: ToolInfo::current(),
            file,
            metrics,
            rule_2a_limit,
            rule_2b_limit,
            rule_2a_over: metrics.rule_2a_size > rule_2a_limit,
            rule_2b_over: metrics.rule_2b_size > rule_2b_limit,
        }
    }

    pub fn over_limit(&self) -> bool {
        self.rule_2a_over || self.rule_2b_over
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{}: rule_2a_size {} (limit {}), rule_2b_size {} (limit {})\n",
            self.file,
            self.metrics.rule_2a_size,
            self.rule_2a_limit,
            self.metrics.rule_2b_size,
            self.rule_2b_limit
        ));
        if self.rule_2a_over {
            out.push_str("warning: source exceeds the Rule 2a limit\n");
        }
        if self.rule_2b_over {
            out.push_str("warning: source exceeds the Rule 2b limit\n");
        }
        for (flag, note) in [
            (self.metrics.char_warning, "high-bit byte(s) detected"),
            (self.metrics.nul_warning, "NUL byte(s) detected"),
            (
                self.metrics.trigraph_warning,
                "unknown or invalid trigraph(s) detected",
            ),
            (self.metrics.wordbuf_warning, "word buffer overflow detected"),
            (self.metrics.ungetc_warning, "pushback overflow detected"),
        ] {
            if flag {
                out.push_str(&format!("warning: {note}\n"));
            }
        }
        out
    }
}

/// Receipt for a document validation run.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub tool: ToolInfo,
    pub file: String,
    /// Which schema was applied: "info" or "author".
    pub kind: &'static str,
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl DocumentReport {
    pub fn new(file: String, kind: &'static str, errors: Vec<ValidationError>) -> Self {
        Self {
            tool: ToolInfo::current(),
            file,
            kind,
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.valid {
            out.push_str(&format!("{}: {} document is valid\n", self.file, self.kind));
        } else {
            out.push_str(&format!(
                "{}: {} document is invalid ({} problem(s))\n",
                self.file,
                self.kind,
                self.errors.len()
            ));
            for err in &self.errors {
                out.push_str(&format!("  {err}\n"));
            }
        }
        out
    }
}
