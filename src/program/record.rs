use std::{
    fmt,
    ops::{Add, AddAssign},
};

pub const YEAR_COLUMN: usize = 0;
pub const REGION_COLUMN: usize = 2;
pub const COUNT_COLUMN: usize = 7;

/// A whole number read from the census, or NaN when the field was missing or
/// held no leading digits. NaN absorbs every addition it takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count(Option<i64>);

impl Count {
    pub const ZERO: Count = Count(Some(0));
    pub const NAN: Count = Count(None);

    pub fn new(value: i64) -> Self {
        Count(Some(value))
    }

    pub fn parse(field: Option<&str>) -> Self {
        Count(field.and_then(parse_leading_int))
    }

    pub fn is_nan(self) -> bool {
        self.0.is_none()
    }

    pub fn as_f64(self) -> f64 {
        self.0.map_or(f64::NAN, |v| v as f64)
    }
}

impl Default for Count {
    fn default() -> Self {
        Count::ZERO
    }
}

impl Add for Count {
    type Output = Count;

    // Overflow lands on NaN rather than wrapping.
    fn add(self, rhs: Count) -> Count {
        match (self.0, rhs.0) {
            (Some(a), Some(b)) => Count(a.checked_add(b)),
            _ => Count::NAN,
        }
    }
}

impl AddAssign for Count {
    fn add_assign(&mut self, rhs: Count) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("NaN"),
        }
    }
}

/// Reads the integer at the start of `text`: leading whitespace, an optional
/// sign, then as many ASCII digits as follow. Trailing text is ignored.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut result: i64 = 0;
    for byte in digits[..end].bytes() {
        let digit = (byte - b'0') as i64;
        result = result.checked_mul(10)?;
        result = if negative {
            result.checked_sub(digit)?
        } else {
            result.checked_add(digit)?
        };
    }

    Some(result)
}

/// The three columns the ranking needs out of one census line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub year: Option<i64>,
    /// `None` when the line is too short to have a region column.
    pub region: Option<&'a str>,
    pub count: Count,
}

impl<'a> Record<'a> {
    /// Plain comma split. Quotes and escapes are not understood.
    pub fn parse(line: &'a str) -> Self {
        let mut fields = line.split(',');

        let year = fields.nth(YEAR_COLUMN).and_then(parse_leading_int);
        let region = fields.nth(REGION_COLUMN - YEAR_COLUMN - 1);
        let count = Count::parse(fields.nth(COUNT_COLUMN - REGION_COLUMN - 1));

        Self {
            year,
            region,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_leading_int, Count, Record};

    mod leading_int {
        use super::*;

        #[test]
        fn plain_digits() {
            assert_eq!(parse_leading_int("2010"), Some(2010));
            assert_eq!(parse_leading_int("0"), Some(0));
        }

        #[test]
        fn sign_and_whitespace() {
            assert_eq!(parse_leading_int("  -42"), Some(-42));
            assert_eq!(parse_leading_int("+7"), Some(7));
            assert_eq!(parse_leading_int("\t15"), Some(15));
        }

        #[test]
        fn stops_at_first_non_digit() {
            assert_eq!(parse_leading_int("123abc"), Some(123));
            assert_eq!(parse_leading_int("150\r"), Some(150));
            assert_eq!(parse_leading_int("12.9"), Some(12));
        }

        #[test]
        fn no_digits() {
            assert_eq!(parse_leading_int(""), None);
            assert_eq!(parse_leading_int("abc"), None);
            assert_eq!(parse_leading_int("-"), None);
            assert_eq!(parse_leading_int("- 1"), None);
        }

        #[test]
        fn out_of_range() {
            assert_eq!(parse_leading_int("9223372036854775807"), Some(i64::MAX));
            assert_eq!(parse_leading_int("-9223372036854775808"), Some(i64::MIN));
            assert_eq!(parse_leading_int("9223372036854775808"), None);
        }
    }

    mod count {
        use super::*;

        #[test]
        fn nan_absorbs_additions() {
            let mut total = Count::ZERO;
            total += Count::new(5);
            assert_eq!(total, Count::new(5));
            total += Count::NAN;
            assert!(total.is_nan());
            total += Count::new(1);
            assert!(total.is_nan());
        }

        #[test]
        fn overflow_is_nan() {
            assert!((Count::new(i64::MAX) + Count::new(1)).is_nan());
        }

        #[test]
        fn display() {
            assert_eq!(Count::new(-3).to_string(), "-3");
            assert_eq!(Count::NAN.to_string(), "NaN");
        }

        #[test]
        fn as_f64() {
            assert_eq!(Count::new(150).as_f64(), 150.0);
            assert!(Count::NAN.as_f64().is_nan());
        }
    }

    mod record {
        use super::*;

        #[test]
        fn picks_fixed_columns() {
            let record = Record::parse("2010,,TokyoPref,,,,,100");
            assert_eq!(
                record,
                Record {
                    year: Some(2010),
                    region: Some("TokyoPref"),
                    count: Count::new(100),
                }
            );
        }

        #[test]
        fn ignores_extra_columns() {
            let record = Record::parse("2015,13,Tokyo,a,b,c,d,150,999,x");
            assert_eq!(record.year, Some(2015));
            assert_eq!(record.region, Some("Tokyo"));
            assert_eq!(record.count, Count::new(150));
        }

        #[test]
        fn header_line_has_no_year() {
            let record = Record::parse("year,code,region,total,m,f,age0,age15");
            assert_eq!(record.year, None);
            assert_eq!(record.region, Some("region"));
            assert!(record.count.is_nan());
        }

        #[test]
        fn short_line_leaves_fields_absent() {
            let record = Record::parse("2010,1");
            assert_eq!(record.year, Some(2010));
            assert_eq!(record.region, None);
            assert!(record.count.is_nan());

            let record = Record::parse("2010,1,Osaka,4");
            assert_eq!(record.region, Some("Osaka"));
            assert!(record.count.is_nan());
        }

        #[test]
        fn empty_line() {
            let record = Record::parse("");
            assert_eq!(record.year, None);
            assert_eq!(record.region, None);
            assert!(record.count.is_nan());
        }

        #[test]
        fn empty_region_is_present() {
            let record = Record::parse("2010,,,,,,,8");
            assert_eq!(record.region, Some(""));
            assert_eq!(record.count, Count::new(8));
        }
    }
}
