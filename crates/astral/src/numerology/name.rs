//! Pythagorean name numerology and the life path number.
//!
//! Names are folded to plain ASCII letters before scoring: accents are
//! stripped via canonical decomposition, case is ignored and anything that is
//! not a letter a-z is dropped.

use chrono::{Datelike, NaiveDate};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::numerology::reducer::reduce;

// a=1 .. i=9, j=1 .. r=9, s=1 .. z=8
const LETTER_VALUES: [u64; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // a-i
    1, 2, 3, 4, 5, 6, 7, 8, 9, // j-r
    1, 2, 3, 4, 5, 6, 7, 8, // s-z
];

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Lowercase ASCII letters of `name` after diacritic stripping.
pub fn normalize_name(name: &str) -> Vec<char> {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

pub fn letter_value(letter: char) -> u64 {
    if letter.is_ascii_lowercase() {
        LETTER_VALUES[(letter as u8 - b'a') as usize]
    } else {
        0
    }
}

fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter)
}

fn sum_letters(name: &str, keep: impl Fn(char) -> bool) -> u64 {
    normalize_name(name)
        .into_iter()
        .filter(|c| keep(*c))
        .map(letter_value)
        .sum()
}

/// Sum of every letter, reduced.
pub fn expression_number(name: &str) -> u64 {
    reduce(sum_letters(name, |_| true))
}

/// Sum of the vowels, reduced.
pub fn soul_urge_number(name: &str) -> u64 {
    reduce(sum_letters(name, is_vowel))
}

/// Sum of the consonants, reduced.
pub fn personality_number(name: &str) -> u64 {
    reduce(sum_letters(name, |c| !is_vowel(c)))
}

/// Life path number from a calendar date.
///
/// Day, month and year are each reduced on their own before the three are
/// summed and reduced again. Reducing the raw `day + month + year` sum instead
/// loses master numbers (29 Feb 2016 is 22 here, 4 the naive way).
/// Any zero component yields the 0 sentinel.
pub fn life_path_number(day: u32, month: u32, year: u32) -> u64 {
    if day == 0 || month == 0 || year == 0 {
        return 0;
    }
    let total = reduce(day as u64) + reduce(month as u64) + reduce(year as u64);
    reduce(total)
}

pub fn life_path_from_date(date: NaiveDate) -> u64 {
    match u32::try_from(date.year()) {
        Ok(year) => life_path_number(date.day(), date.month(), year),
        Err(_) => 0,
    }
}

/// Parse a `YYYY-MM-DD` date and compute its life path; unparseable input is 0.
pub fn life_path_from_str(date: &str) -> u64 {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => life_path_from_date(parsed),
        Err(_) => 0,
    }
}
