//! # entrychk-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `entrychk`.
//! It contains only data types, Serde definitions, diagnostic code constants
//! and the compiled-in version strings the checkers compare against.
//!
//! ## What belongs here
//! * Pure data structs (source metrics, numeric/string records, errors)
//! * Serialization/Deserialization logic
//! * Diagnostic code ranges and assignments
//! * Compiled-in format/tool version constants
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Lexing, parsing or validation logic

pub mod codes;
pub mod version;

use serde::{Deserialize, Serialize};

/// Metrics produced by rule-counting a C source.
///
/// `rule_2a_size` is the raw byte count of the input (after pushback
/// resolution); `rule_2b_size` is the weighted significant-token count.
/// The warning flags are monotonic within a single run: once set they
/// stay set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMetrics {
    pub rule_2a_size: u64,
    pub rule_2b_size: u64,
    /// A byte with bit 7 set was seen.
    pub char_warning: bool,
    /// A NUL byte was seen.
    pub nul_warning: bool,
    /// A `??x` sequence with `x` not one of the nine recognized trigraphs.
    pub trigraph_warning: bool,
    /// An identifier overflowed the internal word buffer.
    pub wordbuf_warning: bool,
    /// The pushback stack overflowed and dropped its oldest byte.
    pub ungetc_warning: bool,
}

impl SourceMetrics {
    /// True if any anomaly flag is set.
    pub fn any_warning(&self) -> bool {
        self.char_warning
            || self.nul_warning
            || self.trigraph_warning
            || self.wordbuf_warning
            || self.ungetc_warning
    }
}

/// Source position of a token or parse node, 1-based line/column plus the
/// byte offset and byte length of the lexeme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
    pub length: usize,
}

/// One projection of a numeric literal into a fixed-width integer type.
///
/// When the literal does not fit, `fits` is false and `value` is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fit<T> {
    pub fits: bool,
    pub value: T,
}

impl<T: Default> Fit<T> {
    pub fn none() -> Self {
        Self {
            fits: false,
            value: T::default(),
        }
    }

    pub fn of(value: T) -> Self {
        Self { fits: true, value }
    }
}

/// One projection of a numeric literal into a floating-point width.
///
/// `is_integral` is true when the converted value equals an integer
/// numerically (so `1.0e2` is integral, `0.5` is not).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatFit {
    pub fits: bool,
    pub value: f64,
    pub is_integral: bool,
}

impl FloatFit {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of(value: f64) -> Self {
        Self {
            fits: true,
            value,
            is_integral: value.fract() == 0.0 && value.is_finite(),
        }
    }
}

/// The result of probing a JSON numeric literal against every integer and
/// floating-point width the toolkit exposes.
///
/// The fixed-width projections are portable; the C-alias projections
/// (`c_int`, `size`, `off`, ...) use the documented LP64 mapping and exist
/// so documents written by the C lineage of this toolkit keep their
/// meaning. `extended` mirrors `float64`: the widest float parse available
/// here is an `f64`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericRecord {
    /// Original literal bytes, whitespace-trimmed.
    pub as_str: String,
    pub is_negative: bool,
    pub is_floating: bool,
    pub is_e_notation: bool,

    pub int8: Fit<i8>,
    pub uint8: Fit<u8>,
    pub int16: Fit<i16>,
    pub uint16: Fit<u16>,
    pub int32: Fit<i32>,
    pub uint32: Fit<u32>,
    pub int64: Fit<i64>,
    pub uint64: Fit<u64>,

    pub c_int: Fit<i32>,
    pub c_uint: Fit<u32>,
    pub c_long: Fit<i64>,
    pub c_ulong: Fit<u64>,
    pub c_longlong: Fit<i64>,
    pub c_ulonglong: Fit<u64>,
    pub size: Fit<u64>,
    pub ssize: Fit<i64>,
    pub off: Fit<i64>,
    pub intmax: Fit<i64>,
    pub uintmax: Fit<u64>,

    pub float32: FloatFit,
    pub float64: FloatFit,
    pub extended: FloatFit,
}

impl NumericRecord {
    /// True if at least one integer or float width accepted the literal.
    pub fn converted(&self) -> bool {
        self.int8.fits
            || self.uint8.fits
            || self.int16.fits
            || self.uint16.fits
            || self.int32.fits
            || self.uint32.fits
            || self.int64.fits
            || self.uint64.fits
            || self.float32.fits
            || self.float64.fits
            || self.extended.fits
    }
}

/// A decoded JSON string: the original lexeme (between the quotes, escapes
/// intact) and the decoded byte form. Non-UTF-8 input bytes pass through
/// into `decoded` unchanged, so the decoded form is bytes, not `String`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    pub as_str: String,
    pub decoded: Vec<u8>,
    pub decoded_len: usize,
    /// False when escape expansion failed (for example a lone surrogate).
    pub converted: bool,
}

impl StringRecord {
    /// Decoded form as UTF-8, when it is valid UTF-8.
    pub fn decoded_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.decoded).ok()
    }
}

/// A single semantic validation failure.
///
/// `code` identifies the check that failed (see [`codes`]); `node` is the
/// arena index of the offending parse node; `function_name` names the
/// predicate that reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub code: i32,
    pub node: usize,
    pub depth: u32,
    pub function_name: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{JSON-{:04}}} depth {}: {}: {}",
            self.code, self.depth, self.function_name, self.message
        )
    }
}
