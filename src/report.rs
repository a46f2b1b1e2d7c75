use std::fmt;
use std::path::PathBuf;

use crate::nccopy::measure::Measurement;

/// Outcome of one successful nccopy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub input: PathBuf,
    pub level: u32,
    pub truncate_unlimited: bool,
    pub shuffle: bool,
    pub measurement: Measurement,
    /// Size of the copy written by nccopy.
    pub orig_size: u64,
    /// Size of the input file.
    pub comp_size: u64,
}

impl RunResult {
    /// `orig_size / comp_size`, i.e. copy size over input size.
    pub fn ratio(&self) -> f64 {
        self.orig_size as f64 / self.comp_size as f64
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.measurement;
        write!(
            f,
            "{} d = {} Conv unlim: {} Shuffle: {} {} s {} s {} s {} Kb {}",
            self.input.display(),
            self.level,
            self.truncate_unlimited as u8,
            self.shuffle as u8,
            m.elapsed,
            m.kernel,
            m.user,
            m.max_rss_kb,
            significant(self.ratio(), 4),
        )
    }
}

/// General number formatting with `digits` significant digits.
///
/// Fixed notation when the decimal exponent is in `[-4, digits - 1)`, with
/// trailing zeros removed but one fractional digit kept (`4.0`, `0.25`);
/// scientific otherwise (`1.234e+03`).
pub fn significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let digits = digits.max(1);
    // Round first, the exponent may change (9.99995 -> 1.000e1).
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits as i32 - 1 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exp.abs());
    }

    let decimals = (digits as i32 - 1 - exp).max(0) as usize;
    let fixed = format!("{:.*}", decimals, value);
    let fixed = trim_fraction(&fixed);
    if fixed.contains('.') {
        fixed.to_string()
    } else {
        format!("{}.0", fixed)
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
