//! Conversion between US civil registrations and Mode-S codes.
//!
//! The FAA assigns every registration from `N1` to `N99999` a fixed address in the block
//! `A00001..=ADF7C7`. Registrations are ordered depth first: each digit position opens a
//! bucket holding every longer registration below it, and a registration may end in a
//! suffix of one or two letters in place of further digits. Letters skip `I` and `O`.

use crate::server::model::identifier::{ModeS, NNumber};

const LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Letters then digits, the alphabet of the fifth character
const FINAL_CHARS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ0123456789";

/// Addresses taken by the letter suffixes of one prefix, including the bare prefix
const SUFFIX_SIZE: u32 = 1 + LETTERS.len() as u32 * (1 + LETTERS.len() as u32);

/// Addresses below a digit at each position, the first position counting from 1
const BUCKETS: [u32; 4] = [101_711, 10_111, 951, 35];

const US_BLOCK_START: u32 = 0xA0_0000;
const US_BLOCK_LAST: u32 = 0xDF7C7;

fn letter_index(c: u8) -> Option<u32> {
    LETTERS.iter().position(|&l| l == c).map(|i| i as u32)
}

/// Offset of a letter suffix within its prefix, zero for no suffix
fn suffix_offset(suffix: &[u8]) -> Option<u32> {
    match suffix {
        [] => Some(0),
        [first] => Some(letter_index(*first)? * 25 + 1),
        [first, second] => Some(letter_index(*first)? * 25 + letter_index(*second)? + 2),
        _ => None,
    }
}

/// Letter suffix stored at `offset`, the inverse of [`suffix_offset`]
fn suffix_at(offset: u32) -> String {
    if offset == 0 {
        return String::new();
    }

    let offset = offset - 1;
    let mut suffix = String::from(LETTERS[(offset / 25) as usize] as char);
    if offset % 25 != 0 {
        suffix.push(LETTERS[(offset % 25 - 1) as usize] as char);
    }

    suffix
}

/// Mode-S code assigned to a US registration
///
/// # Arguments
/// - `n_number` (&[`NNumber`]): registration to convert
///
/// # Returns
/// - `Some(String)`: Six character uppercase Mode-S code
/// - `None`: If the registration is not one the FAA can assign
pub fn n_number_to_mode_s(n_number: &NNumber) -> Option<String> {
    let chars = n_number.as_str().as_bytes().get(1..)?;

    if !matches!(chars.first(), Some(b'1'..=b'9')) {
        return None;
    }

    let mut address = 1;

    for (position, &c) in chars.iter().enumerate() {
        if position == 4 {
            let index = FINAL_CHARS.iter().position(|&f| f == c)? as u32;
            address += index + 1;
        } else if c.is_ascii_uppercase() {
            address += suffix_offset(&chars[position..])?;
            break;
        } else {
            let digit = DIGITS.iter().position(|&d| d == c)? as u32;
            address += match position {
                0 => (digit - 1) * BUCKETS[0],
                _ => digit * BUCKETS[position] + SUFFIX_SIZE,
            };
        }
    }

    Some(format!("{:06X}", US_BLOCK_START + address))
}

/// US registration assigned to a Mode-S code
///
/// # Returns
/// - `Some(String)`: Registration such as `N925XJ`
/// - `None`: If the code lies outside the US civil block
pub fn mode_s_to_n_number(mode_s: &ModeS) -> Option<String> {
    let value = u32::from_str_radix(mode_s.as_str(), 16).ok()?;
    let address = value.checked_sub(US_BLOCK_START)?;

    if !(1..=US_BLOCK_LAST).contains(&address) {
        return None;
    }

    let mut remainder = address - 1;
    let mut n_number = String::from("N");

    for (position, bucket) in BUCKETS.into_iter().enumerate() {
        let digit = remainder / bucket;
        remainder %= bucket;

        match position {
            0 => n_number.push_str(&(digit + 1).to_string()),
            _ => n_number.push_str(&digit.to_string()),
        }

        if position == 3 {
            if remainder > 0 {
                n_number.push(FINAL_CHARS[(remainder - 1) as usize] as char);
            }
            return Some(n_number);
        }

        if remainder < SUFFIX_SIZE {
            n_number.push_str(&suffix_at(remainder));
            return Some(n_number);
        }
        remainder -= SUFFIX_SIZE;
    }

    Some(n_number)
}
