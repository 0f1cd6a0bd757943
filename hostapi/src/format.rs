//! Number formatting and field padding for the `print_*` imports.
//!
//! Integers print in plain base 10. Reals print as the shortest decimal that
//! round-trips to the same `f64`, laid out with the same thresholds a
//! JavaScript `Number` uses when converted to a string: positional notation
//! for decimal exponents in `[-7, 21)` and `d.ddde±x` outside that range.

/// Alignment selected by the sign of a field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Text first, spaces on the right. Selected by a negative width.
    Left,
    /// Spaces first, text on the right. Selected by a zero or positive width.
    Right,
}

impl Alignment {
    /// Split a signed field width into an alignment and a column count.
    pub fn from_width(width: i32) -> (Self, usize) {
        let columns = width.unsigned_abs() as usize;
        if width < 0 {
            (Self::Left, columns)
        } else {
            (Self::Right, columns)
        }
    }
}

/// Format a signed integer in base 10.
pub fn format_int(value: i32) -> String {
    value.to_string()
}

/// Format a real as its shortest round-trippable decimal representation.
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value == 0.0 {
        // Covers negative zero as well.
        return "0".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e-7".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    // value = 0.digits * 10^point
    let k = digits.len() as i32;
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        let zeros = "0".repeat((point - k) as usize);
        format!("{digits}{zeros}")
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < point && point <= 0 {
        let zeros = "0".repeat((-point) as usize);
        format!("0.{zeros}{digits}")
    } else {
        let exp = point - 1;
        let exp_sign = if exp < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", exp.unsigned_abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", exp.unsigned_abs())
        }
    };

    format!("{sign}{body}")
}

/// Largest run of spaces handed to the sink in one call.
const PAD_CHUNK: usize = 4096;

/// Write `text` padded with spaces to `abs(width)` characters.
///
/// Negative widths left-align, others right-align. Text that is already at
/// least as wide as the field is written unchanged. The field can be as wide
/// as `2^31` columns, so padding is emitted in bounded pieces through `write`
/// rather than built as one string.
pub fn write_padded<E>(
    text: &str,
    width: i32,
    mut write: impl FnMut(&str) -> Result<(), E>,
) -> Result<(), E> {
    let (alignment, columns) = Alignment::from_width(width);
    let mut fill = columns.saturating_sub(text.chars().count());

    if alignment == Alignment::Left {
        write(text)?;
    }
    if fill > 0 {
        let spaces = " ".repeat(fill.min(PAD_CHUNK));
        while fill > 0 {
            let n = fill.min(spaces.len());
            write(&spaces[..n])?;
            fill -= n;
        }
    }
    if alignment == Alignment::Right {
        write(text)?;
    }
    Ok(())
}
