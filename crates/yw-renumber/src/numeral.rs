//! Numeral formatting for chapter headings
//!
//! Converts a positive chapter number into Arabic digits, lowercase Roman
//! numerals, or English words, then applies a letter-case transform to the
//! result.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Largest value expressible with the classic Roman symbol table.
pub const ROMAN_MAX: u32 = 3999;

/// Largest value that can be spelled out in English words.
pub const ENGLISH_MAX: u32 = 999_999;

const ROMAN: [(u32, &str); 13] = [
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

const ZERO_TO_TWENTY: [&str; 21] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
];

/// Indexed by the tens digit; only 3..=9 are looked up here.
const TENS: [&str; 10] =
    ["", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{value} cannot be written as {style} numeral (supported range: 1 to {max})")]
    OutOfRange { value: u32, style: NumberingStyle, max: u32 },
}

/// Textual representation of a chapter number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingStyle {
    #[default]
    Arabic,
    Roman,
    English,
}

impl NumberingStyle {
    /// Get the display name for this style
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberingStyle::Arabic => "arabic",
            NumberingStyle::Roman => "roman",
            NumberingStyle::English => "english",
        }
    }

    /// Largest number this style can represent
    pub fn max_value(&self) -> u32 {
        match self {
            NumberingStyle::Arabic => u32::MAX,
            NumberingStyle::Roman => ROMAN_MAX,
            NumberingStyle::English => ENGLISH_MAX,
        }
    }

    /// Parse from string, accepting names and the legacy `0`/`1`/`2` codes
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "arabic" | "digits" => Some(NumberingStyle::Arabic),
            "1" | "roman" => Some(NumberingStyle::Roman),
            "2" | "english" | "words" | "written" => Some(NumberingStyle::English),
            _ => None,
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        vec!["arabic", "roman", "english"]
    }
}

impl fmt::Display for NumberingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NumberingStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NumberingStyle::from_str_flexible(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid numbering style: {}", s)))
    }
}

/// Letter case applied to the formatted numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingCase {
    Upper,
    #[default]
    Capitalized,
    Lower,
}

impl NumberingCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberingCase::Upper => "upper",
            NumberingCase::Capitalized => "capitalized",
            NumberingCase::Lower => "lower",
        }
    }

    /// Parse from string, accepting names and the legacy `0`/`1`/`2` codes
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "upper" | "uppercase" => Some(NumberingCase::Upper),
            "1" | "capitalized" | "capitalised" | "title" => Some(NumberingCase::Capitalized),
            "2" | "lower" | "lowercase" => Some(NumberingCase::Lower),
            _ => None,
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        vec!["upper", "capitalized", "lower"]
    }
}

impl fmt::Display for NumberingCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NumberingCase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NumberingCase::from_str_flexible(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid numbering case: {}", s)))
    }
}

/// Format `n` in the given style and case.
///
/// Zero and values beyond what the style can represent are rejected rather
/// than producing an empty or truncated numeral.
pub fn format_number(
    n: u32,
    style: NumberingStyle,
    case: NumberingCase,
) -> Result<String, FormatError> {
    let numeral = match style {
        NumberingStyle::Arabic => to_arabic(n)?,
        NumberingStyle::Roman => to_roman(n)?,
        NumberingStyle::English => to_english(n)?,
    };
    Ok(apply_case(&numeral, case))
}

/// Decimal digits
pub fn to_arabic(n: u32) -> Result<String, FormatError> {
    check_range(n, NumberingStyle::Arabic)?;
    Ok(n.to_string())
}

/// Lowercase Roman numeral in subtractive notation
pub fn to_roman(n: u32) -> Result<String, FormatError> {
    check_range(n, NumberingStyle::Roman)?;

    let mut result = String::new();
    let mut remaining = n;
    for (value, symbol) in ROMAN {
        let factor = remaining / value;
        result.push_str(&symbol.repeat(factor as usize));
        remaining %= value;
        if remaining == 0 {
            break;
        }
    }
    Ok(result)
}

/// Lowercase English words, e.g. `121` -> `"one hundred twenty one"`
pub fn to_english(n: u32) -> Result<String, FormatError> {
    check_range(n, NumberingStyle::English)?;
    Ok(english(n))
}

// Caller guarantees n <= ENGLISH_MAX.
fn english(n: u32) -> String {
    match n {
        0..=20 => ZERO_TO_TWENTY[n as usize].to_string(),
        21..=99 if n % 10 == 0 => TENS[(n / 10) as usize].to_string(),
        21..=99 => format!("{} {}", english(n - n % 10), english(n % 10)),
        100..=999 => with_remainder(format!("{} hundred", english(n / 100)), n % 100),
        _ => with_remainder(format!("{} thousand", english(n / 1000)), n % 1000),
    }
}

fn with_remainder(head: String, remainder: u32) -> String {
    if remainder == 0 {
        head
    } else {
        format!("{} {}", head, english(remainder))
    }
}

fn check_range(n: u32, style: NumberingStyle) -> Result<(), FormatError> {
    let max = style.max_value();
    if n == 0 || n > max {
        return Err(FormatError::OutOfRange { value: n, style, max });
    }
    Ok(())
}

/// Apply a letter-case transform to a formatted numeral
pub fn apply_case(numeral: &str, case: NumberingCase) -> String {
    match case {
        NumberingCase::Upper => numeral.to_uppercase(),
        NumberingCase::Capitalized => {
            let mut chars = numeral.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        }
        // Numerals are built lowercase already.
        NumberingCase::Lower => numeral.to_string(),
    }
}
