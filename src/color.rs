//! Color parsing for user input and theme files.
//!
//! Two textual encodings are accepted: `#RRGGBB` and `r,g,b`. Parsing and
//! range validation are separate steps so callers can report a malformed
//! string differently from an out-of-range channel.

use crate::error::ColorError;
use crossterm::style::{Color, SetBackgroundColor, SetForegroundColor};
use crossterm::Command;
use std::fmt;
use std::num::IntErrorKind;

/// A validated 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Escape sequence that sets this color as the terminal foreground.
    pub fn fg_escape(self) -> String {
        ansi(SetForegroundColor(self.into()))
    }

    /// Escape sequence that sets this color as the terminal background.
    pub fn bg_escape(self) -> String {
        ansi(SetBackgroundColor(self.into()))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Three parsed but not yet range-checked channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelTriple(pub [i64; 3]);

/// Parse `#RRGGBB` (case-insensitive).
///
/// Two hex digits can never exceed 255, so the result needs no range check.
pub fn parse_hex(input: &str) -> Result<Rgb, ColorError> {
    let Some(hex) = input.strip_prefix('#') else {
        return Err(ColorError::Format(format!(
            "`{input}` must start with `#`"
        )));
    };
    if hex.len() != 6 {
        return Err(ColorError::Format(format!(
            "`{input}` must have exactly 6 hex digits"
        )));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::Format(format!(
            "`{input}` contains a non-hex character"
        )));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| ColorError::Format(format!("`{input}` is not valid hex")))
    };
    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Parse `r,g,b` decimal channels. Whitespace around each value is ignored.
pub fn parse_triple(input: &str) -> Result<ChannelTriple, ColorError> {
    let tokens: Vec<&str> = input.split(',').map(str::trim).collect();
    if tokens.len() != 3 {
        return Err(ColorError::Format(format!(
            "expected 3 comma-separated values, got {}",
            tokens.len()
        )));
    }
    let mut channels = [0i64; 3];
    for (slot, token) in channels.iter_mut().zip(&tokens) {
        *slot = parse_channel(token)?;
    }
    Ok(ChannelTriple(channels))
}

/// Integers beyond `i64` saturate so range validation still rejects them as
/// out of range rather than malformed.
fn parse_channel(token: &str) -> Result<i64, ColorError> {
    token.parse::<i64>().or_else(|err| match err.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(ColorError::Format(format!("`{token}` is not an integer"))),
    })
}

/// Reject any channel outside `0..=255`.
pub fn validate_channels(triple: ChannelTriple) -> Result<Rgb, ColorError> {
    let [r, g, b] = triple.0;
    match (u8::try_from(r), u8::try_from(g), u8::try_from(b)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Rgb::new(r, g, b)),
        _ => Err(ColorError::Range(triple.0)),
    }
}

/// Parse either encoding, choosing by the leading `#`.
pub fn parse_color(input: &str) -> Result<Rgb, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorError::Format("color value cannot be empty".to_string()));
    }
    if trimmed.starts_with('#') {
        return parse_hex(trimmed);
    }
    validate_channels(parse_triple(trimmed)?)
}

/// Render a crossterm command as its raw ANSI text.
pub(crate) fn ansi(command: impl Command) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = command.write_ansi(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_mixed_case() {
        assert_eq!(parse_hex("#0aFf10").expect("hex"), Rgb::new(10, 255, 16));
    }

    #[test]
    fn parse_hex_rejects_bad_shapes() {
        for bad in ["0aff10", "#0aff1", "#0aff100", "#0agf10", "#"] {
            let err = parse_hex(bad).expect_err("must reject");
            assert!(matches!(err, ColorError::Format(_)), "{bad}: {err:?}");
        }
    }

    #[test]
    fn parse_hex_rejects_multibyte_input_without_panicking() {
        assert!(matches!(parse_hex("#ééé"), Err(ColorError::Format(_))));
    }

    #[test]
    fn parse_triple_tolerates_whitespace() {
        assert_eq!(
            parse_triple(" 1, 2 ,3 ").expect("triple"),
            ChannelTriple([1, 2, 3])
        );
    }

    #[test]
    fn parse_triple_rejects_wrong_count_and_non_numbers() {
        assert!(matches!(parse_triple("1,2"), Err(ColorError::Format(_))));
        assert!(matches!(parse_triple("1,2,3,4"), Err(ColorError::Format(_))));
        assert!(matches!(parse_triple("1,x,3"), Err(ColorError::Format(_))));
    }

    #[test]
    fn validate_channels_flags_out_of_range() {
        assert_eq!(
            validate_channels(ChannelTriple([300, 10, 10])),
            Err(ColorError::Range([300, 10, 10]))
        );
        assert_eq!(
            validate_channels(ChannelTriple([-1, 0, 0])),
            Err(ColorError::Range([-1, 0, 0]))
        );
        assert_eq!(
            validate_channels(ChannelTriple([0, 128, 255])),
            Ok(Rgb::new(0, 128, 255))
        );
    }

    #[test]
    fn parse_color_dispatches_on_prefix() {
        assert_eq!(parse_color("#010203"), Ok(Rgb::new(1, 2, 3)));
        assert_eq!(parse_color("4, 5, 6"), Ok(Rgb::new(4, 5, 6)));
        assert!(matches!(parse_color("300,10,10"), Err(ColorError::Range(_))));
        assert!(matches!(parse_color("  "), Err(ColorError::Format(_))));
    }

    #[test]
    fn oversized_channels_are_range_errors() {
        let err = parse_color("99999999999999999999,0,0").expect_err("must reject");
        assert_eq!(err, ColorError::Range([i64::MAX, 0, 0]));
        let err = parse_color("0,-99999999999999999999,0").expect_err("must reject");
        assert_eq!(err, ColorError::Range([0, i64::MIN, 0]));
        assert!(matches!(
            parse_color("1e3,0,0"),
            Err(ColorError::Format(_))
        ));
    }

    #[test]
    fn escapes_use_truecolor_sequences() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(rgb.fg_escape(), "\x1b[38;2;1;2;3m");
        assert_eq!(rgb.bg_escape(), "\x1b[48;2;1;2;3m");
        assert_eq!(rgb.to_hex(), "#010203");
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_matches_manual_pair_decoding(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255, upper in any::<bool>()) {
                let mut text = format!("#{r:02x}{g:02x}{b:02x}");
                if upper {
                    text = text.to_ascii_uppercase();
                }
                let parsed = parse_hex(&text).expect("valid hex");
                let pair = |i: usize| u8::from_str_radix(&text[i..i + 2], 16).expect("pair");
                prop_assert_eq!(parsed, Rgb::new(pair(1), pair(3), pair(5)));
            }

            #[test]
            fn triple_accepts_exactly_the_byte_range(r in -50i64..300, g in -50i64..300, b in -50i64..300) {
                let result = parse_color(&format!("{r},{g},{b}"));
                let in_range = [r, g, b].iter().all(|c| (0..=255).contains(c));
                prop_assert_eq!(result.is_ok(), in_range);
            }
        }
    }
}
