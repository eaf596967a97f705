use crate::consts::{JANUARY, MIN_DAY, TOKEN_MARKER};
use crate::{CalendarDate, ParseError};

/// A recognized `%X` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `%Y`: the year as a plain decimal; exactly four digits on parse.
    Year,
    /// `%m`: two-digit zero-padded month; one or two digits on parse.
    Month,
    /// `%d`: two-digit zero-padded day; one or two digits on parse.
    Day,
}

impl Token {
    const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'Y' => Some(Self::Year),
            'm' => Some(Self::Month),
            'd' => Some(Self::Day),
            _ => None,
        }
    }

    /// Digit-run widths the token accepts, in matching preference order.
    const fn widths(self) -> &'static [usize] {
        match self {
            Self::Year => &[4],
            Self::Month | Self::Day => &[2, 1],
        }
    }

    fn render(self, date: CalendarDate) -> String {
        match self {
            Self::Year => date.year().to_string(),
            Self::Month => format!("{:02}", date.month()),
            Self::Day => format!("{:02}", date.day()),
        }
    }
}

/// One compiled piece of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(char),
    Token(Token),
}

/// A compiled token format, reusable for both rendering and parsing.
/// Compiling the same pattern always yields the same segment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pattern: String,
    segments: Vec<Segment>,
}

/// Field values captured during a match, before validation.
#[derive(Debug, Clone, Copy, Default)]
struct RawFields {
    year: Option<u16>,
    month: Option<u8>,
    day: Option<u8>,
}

impl RawFields {
    #[allow(clippy::cast_possible_truncation)]
    fn set(&mut self, token: Token, value: u16) {
        match token {
            Token::Year => self.year = Some(value),
            // Month and day runs are at most two digits, so they fit u8.
            Token::Month => self.month = Some(value as u8),
            Token::Day => self.day = Some(value as u8),
        }
    }
}

impl FormatSpec {
    /// Compiles a token format string. `%%` becomes a literal percent, an
    /// unrecognized `%X` produces nothing, and a trailing lone marker stays
    /// a literal.
    pub fn compile(pattern: &str) -> Self {
        let mut segments = Vec::with_capacity(pattern.len());
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            if c != TOKEN_MARKER {
                segments.push(Segment::Literal(c));
                continue;
            }
            match chars.next() {
                Some(TOKEN_MARKER) => segments.push(Segment::Literal(TOKEN_MARKER)),
                Some(marker) => {
                    if let Some(token) = Token::from_marker(marker) {
                        segments.push(Segment::Token(token));
                    }
                }
                None => segments.push(Segment::Literal(TOKEN_MARKER)),
            }
        }
        Self {
            pattern: pattern.to_owned(),
            segments,
        }
    }

    /// The source pattern this spec was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Renders a date through the compiled segments.
    pub fn format(&self, date: CalendarDate) -> String {
        let mut out = String::with_capacity(self.pattern.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(c) => out.push(*c),
                Segment::Token(token) => out.push_str(&token.render(date)),
            }
        }
        out
    }

    /// Parses input text against the compiled segments, anchored at both
    /// ends. Fields absent from the pattern default to the current year,
    /// January, day 1; captured fields are then validated so that a
    /// calendar-invalid combination (Feb 30, month 13, ...) is rejected
    /// rather than rolled into an adjacent month.
    ///
    /// # Errors
    /// `EmptyInput` for blank input, `NoMatch` when the text does not fit
    /// the pattern, or the field error of the first invalid captured value.
    pub fn parse(&self, input: &str) -> Result<CalendarDate, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut fields = RawFields::default();
        if !match_segments(&self.segments, trimmed, &mut fields) {
            return Err(ParseError::NoMatch {
                format: self.pattern.clone(),
                input: trimmed.to_owned(),
            });
        }

        let year = fields
            .year
            .unwrap_or_else(|| CalendarDate::today().year());
        let month = fields.month.unwrap_or(JANUARY);
        let day = fields.day.unwrap_or(MIN_DAY);
        CalendarDate::new(year, month, day)
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::compile(crate::consts::DEFAULT_DATE_FORMAT)
    }
}

/// Matches `input` against `segments`, consuming all of it. Tokens try
/// their widths greedily and backtrack, so `%m%d` still matches `"111"`.
fn match_segments(segments: &[Segment], input: &str, fields: &mut RawFields) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return input.is_empty();
    };
    match first {
        Segment::Literal(c) => input
            .strip_prefix(*c)
            .is_some_and(|remainder| match_segments(rest, remainder, fields)),
        Segment::Token(token) => {
            let bytes = input.as_bytes();
            for &width in token.widths() {
                if bytes.len() < width || !bytes[..width].iter().all(u8::is_ascii_digit) {
                    continue;
                }
                let value = bytes[..width]
                    .iter()
                    .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
                fields.set(*token, value);
                if match_segments(rest, &input[width..], fields) {
                    return true;
                }
            }
            false
        }
    }
}
