//! Column-oriented CSV loader: every column is one series, empty fields are
//! gaps.  Floats are parsed without allocation via `lexical-core`.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

/// One chartable series; `None` marks a gap.
pub type Series = Vec<Option<f64>>;

/// Anything numeric that can be widened to a chart value.  Wide integers
/// may round to the nearest `f64`.
pub trait Value: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_value {
    ($($t:ty),*) => {$(
        impl Value for $t {
            #[inline]
            #[allow(
                clippy::cast_precision_loss,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadColumnCount { want: usize, got: usize },
    BadFloat { column: usize, text: String },
    NoData,
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadColumnCount { want, got } => {
                write!(f, "line {}: expected {want} columns, got {got}", self.line)
            }
            ParseErrorKind::BadFloat { column, text } => write!(
                f,
                "line {}: invalid value '{}' in column {}",
                self.line,
                text,
                column + 1
            ),
            ParseErrorKind::NoData => f.write_str("no data rows found"),
        }
    }
}
impl Error for ParseCsvError {}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Rewrite U+2212 (−) to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

/// Empty field → gap, otherwise a finite float.
#[inline]
fn parse_field(bytes: &[u8], line: usize, column: usize) -> Result<Option<f64>, ParseCsvError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    match lexical_core::parse::<f64>(bytes) {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(ParseCsvError {
            line,
            kind: ParseErrorKind::BadFloat {
                column,
                text: String::from_utf8_lossy(bytes).into_owned(),
            },
        }),
    }
}

fn split_fields(buf: &[u8]) -> impl Iterator<Item = &[u8]> {
    buf.split(|&b| b == b',').map(trim)
}

// --- Ingest ---
const BUF_CAP: usize = 1 << 16;

pub fn read_series<R: Read>(src: R) -> Result<Vec<Series>, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut columns: Vec<Series> = Vec::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if trim(&buf).is_empty() || buf[0] == b'#' {
            continue;
        }

        // header row: first non-empty field is not a number
        if !saw_first {
            saw_first = true;
            let is_header = split_fields(&buf)
                .find(|f| !f.is_empty())
                .is_some_and(|f| lexical_core::parse::<f64>(f).is_err());
            let width = split_fields(&buf).count();
            columns = vec![Vec::new(); width];
            if is_header {
                continue;
            }
        }

        let got = split_fields(&buf).count();
        if got != columns.len() {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount {
                    want: columns.len(),
                    got,
                },
            });
        }
        for (col, field) in split_fields(&buf).enumerate() {
            columns[col].push(parse_field(field, line_no, col)?);
        }
    }

    if columns.first().is_none_or(Vec::is_empty) {
        return Err(ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::NoData,
        });
    }
    Ok(columns)
}

pub fn read_series_from_path(path: &str) -> Result<Vec<Series>, ParseCsvError> {
    if path == "-" {
        read_series(std::io::stdin())
    } else {
        use std::fs::File;
        read_series(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_become_series() {
        let csv = "a,b\n1,10\n2,\n3,30\n";
        let s = read_series(csv.as_bytes()).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s[0], vec![Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(s[1], vec![Some(10.0), None, Some(30.0)]);
    }

    #[test]
    fn headerless_comments_and_unicode_minus() {
        let csv = "# temps\r\n\u{2212}1.5\r\n\n2\r\n";
        let s = read_series(csv.as_bytes()).unwrap();
        assert_eq!(s, vec![vec![Some(-1.5), Some(2.0)]]);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = read_series("1,2\n3\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadColumnCount { want: 2, got: 1 }
        ));
    }

    #[test]
    fn bad_float_reports_column() {
        let err = read_series("1,2\n3,abc\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadFloat { column: 1, .. }));
        assert!(err.to_string().contains("column 2"));
    }

    #[test]
    fn header_only_is_no_data() {
        let err = read_series("x,y\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NoData));
    }
}
