//! Numeric width probing for JSON number literals.
//!
//! One widest-integer parse (`i128`/`u128`) and one widest-float parse
//! (`f64`) feed explicit range-checked projections into every width the
//! toolkit exposes. The fixed-width projections are portable; the C-alias
//! projections use the documented LP64 mapping. Nothing here assumes any
//! platform's actual C widths.

use entrychk_types::{Fit, FloatFit, NumericRecord};

/// Non-strict float comparison tolerance: one part in 2^22. Zero compares
/// exactly.
pub const MATCH_PRECISION: f64 = 4_194_304.0;

/// True when `a` and `b` match to within one part in 2^22.
pub fn fuzzy_match(a: f64, b: f64) -> bool {
    if a == 0.0 || b == 0.0 {
        return a == b;
    }
    ((a - b) / a).abs() <= 1.0 / MATCH_PRECISION
}

fn fit_signed<T>(value: i128, min: i128, max: i128, cast: impl Fn(i128) -> T) -> Fit<T>
where
    T: Default,
{
    if (min..=max).contains(&value) {
        Fit::of(cast(value))
    } else {
        Fit::none()
    }
}

fn fit_unsigned<T>(value: i128, max: u128, cast: impl Fn(u128) -> T) -> Fit<T>
where
    T: Default,
{
    if value >= 0 && (value as u128) <= max {
        Fit::of(cast(value as u128))
    } else {
        Fit::none()
    }
}

/// Fill every integer projection of `record` from the widest parse.
fn project_integer(record: &mut NumericRecord, value: i128) {
    record.int8 = fit_signed(value, i8::MIN as i128, i8::MAX as i128, |v| v as i8);
    record.uint8 = fit_unsigned(value, u8::MAX as u128, |v| v as u8);
    record.int16 = fit_signed(value, i16::MIN as i128, i16::MAX as i128, |v| v as i16);
    record.uint16 = fit_unsigned(value, u16::MAX as u128, |v| v as u16);
    record.int32 = fit_signed(value, i32::MIN as i128, i32::MAX as i128, |v| v as i32);
    record.uint32 = fit_unsigned(value, u32::MAX as u128, |v| v as u32);
    record.int64 = fit_signed(value, i64::MIN as i128, i64::MAX as i128, |v| v as i64);
    record.uint64 = fit_unsigned(value, u64::MAX as u128, |v| v as u64);

    // C-alias projections, LP64 mapping.
    record.c_int = record.int32;
    record.c_uint = record.uint32;
    record.c_long = record.int64;
    record.c_ulong = record.uint64;
    record.c_longlong = record.int64;
    record.c_ulonglong = record.uint64;
    record.size = record.uint64;
    record.ssize = record.int64;
    record.off = record.int64;
    record.intmax = record.int64;
    record.uintmax = record.uint64;
}

/// Fill the float projections of `record` from the widest float parse.
fn project_float(record: &mut NumericRecord, value: f64) {
    if !value.is_finite() {
        return;
    }
    record.float64 = FloatFit::of(value);
    // The widest float parse available is f64; `extended` mirrors it.
    record.extended = FloatFit::of(value);
    let narrowed = value as f32;
    // Overflow to infinity or underflow to zero means f32 cannot hold it.
    let f32_ok = narrowed.is_finite() && (value == 0.0 || narrowed != 0.0);
    if f32_ok {
        record.float32 = FloatFit::of(narrowed as f64);
    }
}

/// Probe a number lexeme against every integer and float width.
///
/// The lexeme has already matched the JSON number grammar; `decode` only
/// classifies and converts. A literal that fits no width at all comes
/// back with `converted() == false`; that is recorded, not an error.
pub fn decode(lexeme: &str) -> NumericRecord {
    let trimmed = lexeme.trim();
    let mut record = NumericRecord {
        as_str: trimmed.to_string(),
        is_negative: trimmed.starts_with('-'),
        is_floating: trimmed.contains('.'),
        is_e_notation: trimmed.contains(['e', 'E']),
        ..NumericRecord::default()
    };

    if !record.is_floating && !record.is_e_notation {
        if let Ok(value) = trimmed.parse::<i128>() {
            project_integer(&mut record, value);
        }
    }

    // Every literal also gets float projections; `0` must fit all widths
    // and an over-wide integer may still be usable as a float.
    if let Ok(value) = trimmed.parse::<f64>() {
        project_float(&mut record, value);
    }
    record
}
