use super::error::RunError;

/// Format string handed to `time -f`.
///
///   %e  elapsed real time (seconds)
///   %S  CPU-seconds spent in kernel mode
///   %U  CPU-seconds spent in user mode
///   %M  maximum resident set size (KiB)
pub const TIME_FORMAT: &str = "%e %S %U %M";

/// Resource usage reported by the time wrapper, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub elapsed: String,
    pub kernel: String,
    pub user: String,
    pub max_rss_kb: String,
}

impl Measurement {
    /// Parses the last non-empty line of `text`, which must hold exactly
    /// the four fields of [`TIME_FORMAT`].
    pub fn parse(text: &str) -> Result<Self, RunError> {
        let line = text
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("");

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [elapsed, kernel, user, max_rss_kb] => Ok(Measurement {
                elapsed: elapsed.to_string(),
                kernel: kernel.to_string(),
                user: user.to_string(),
                max_rss_kb: max_rss_kb.to_string(),
            }),
            _ => Err(RunError::Measurement {
                text: text.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_fields() {
        let m = Measurement::parse("1.52 0.10 1.38 20480\n").unwrap();
        assert_eq!(m.elapsed, "1.52");
        assert_eq!(m.kernel, "0.10");
        assert_eq!(m.user, "1.38");
        assert_eq!(m.max_rss_kb, "20480");
    }

    #[test]
    fn uses_last_non_empty_line() {
        let text = "NcGetAtt: warning\n\n0.01 0.00 0.01 3120\n\n";
        let m = Measurement::parse(text).unwrap();
        assert_eq!(m.elapsed, "0.01");
        assert_eq!(m.max_rss_kb, "3120");
    }

    #[test]
    fn fields_are_not_reformatted() {
        let m = Measurement::parse("0:01.50 .1 1e0 x").unwrap();
        assert_eq!(m.elapsed, "0:01.50");
        assert_eq!(m.kernel, ".1");
        assert_eq!(m.user, "1e0");
        assert_eq!(m.max_rss_kb, "x");
    }

    #[test]
    fn rejects_wrong_field_count() {
        for bad in ["", "\n\n", "1.0 2.0 3.0", "1 2 3 4 5"] {
            match Measurement::parse(bad) {
                Err(RunError::Measurement { text }) => assert_eq!(text, bad),
                other => panic!("expected measurement error for {:?}, got {:?}", bad, other),
            }
        }
    }
}
