// Copyright 2025 the winfont-codec authors.
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Read and write .fd font description files.
//!
//! The format is line oriented: the first whitespace-separated word of a
//! line is the keyword, the remainder its value. Lines starting with `#`
//! and blank lines are comments. Glyph bitmaps are drawn as rows of `x`
//! (or `#`) for set pixels and `.` (or `-`) for clear ones.

use std::{collections::BTreeMap, fmt, fmt::Write};

use crate::{
    error::FdParseError,
    font::{Char, Font, CHAR_COUNT},
    utils::bool_str,
};

/// Widest glyph a packed scanline can represent.
const MAX_GLYPH_WIDTH: u16 = 64;

/// Writes the .fd form of a font description.
pub fn write<W: Write>(font: &Font, out: &mut W) -> fmt::Result {
    writeln!(out, "# .fd font description generated by winfont-codec.")?;
    writeln!(out)?;
    writeln!(out, "facename {}", font.facename)?;
    writeln!(out, "copyright {}", font.copyright)?;
    writeln!(out)?;
    writeln!(out, "ascent {}", font.ascent)?;
    writeln!(out, "charset {}", font.charset)?;
    writeln!(out, "exleading {}", font.exleading)?;
    writeln!(out, "font_width {}", font.width)?;
    writeln!(out, "height {}", font.height)?;
    writeln!(out, "inleading {}", font.inleading)?;
    writeln!(out, "pointsize {}", font.pointsize)?;
    writeln!(out, "res_x {}", font.res_x)?;
    writeln!(out, "res_y {}", font.res_y)?;
    writeln!(out, "weight {}", font.weight)?;
    writeln!(out, "italic {}", bool_str(font.italic))?;
    writeln!(out, "strikeout {}", bool_str(font.strikeout))?;
    writeln!(out, "underline {}", bool_str(font.underline))?;
    for (i, glyph) in font.chars.iter().enumerate() {
        writeln!(out, "char {i}")?;
        writeln!(out, "width {}", glyph.width)?;
        if glyph.width != 0 {
            for &row in &glyph.data {
                for bit in (0..glyph.width).rev() {
                    out.write_char(if row & (1_u64 << bit) != 0 {
                        'x'
                    } else {
                        '.'
                    })?;
                }
                writeln!(out)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Parses a .fd font description.
pub fn parse(text: &str) -> Result<Font, FdParseError> {
    let mut font = Font::default();
    let mut chars: BTreeMap<usize, Char> = BTreeMap::new();
    let mut current: Option<usize> = None;
    let mut data_y = 0_usize;

    for (number, raw) in text.lines().enumerate() {
        let line = number + 1;
        let s = raw.trim_start_matches(' ');
        if s.is_empty() || s.starts_with('#') {
            continue;
        }
        let (key, value) = match s.find(' ') {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, ""),
        };
        match key {
            "facename" => font.facename = value.to_string(),
            "copyright" => {
                if value.len() > 59 {
                    return Err(FdParseError::CopyrightTooLong(value.len()));
                }
                font.copyright = value.to_string();
            }
            "ascent" => font.ascent = parse_int(value, line)?,
            "charset" => font.charset = parse_int(value, line)? as u8,
            "exleading" => font.exleading = parse_int(value, line)?,
            "font_width" => font.width = parse_int(value, line)?,
            "height" => font.height = parse_int(value, line)?,
            "inleading" => font.inleading = parse_int(value, line)?,
            "pointsize" => font.pointsize = parse_int(value, line)?,
            "res_x" => font.res_x = parse_int(value, line)?,
            "res_y" => font.res_y = parse_int(value, line)?,
            "weight" => font.weight = parse_int(value, line)?,
            "italic" => font.italic = value == "yes",
            "underline" => font.underline = value == "yes",
            "strikeout" => font.strikeout = value == "yes",
            "char" => {
                let index = usize::from(parse_int(value, line)?);
                chars.insert(index, Char::blank(font.height));
                current = Some(index);
                data_y = 0;
            }
            "width" => {
                let glyph = current
                    .and_then(|i| chars.get_mut(&i))
                    .ok_or_else(|| stray(key, line))?;
                let width = parse_int(value, line)?;
                if width > MAX_GLYPH_WIDTH {
                    return Err(FdParseError::GlyphTooWide(width));
                }
                glyph.width = width;
            }
            _ => {
                // Anything else must be a bitmap row for the current glyph.
                let glyph = current
                    .and_then(|i| chars.get_mut(&i))
                    .ok_or_else(|| stray(key, line))?;
                let width = usize::from(glyph.width);
                let mut value = 0_u64;
                let mut bits = 0_usize;
                for ch in key.chars() {
                    let bit = match ch {
                        '.' | '-' | '0' => 0_u64,
                        'x' | '#' | '1' => 1,
                        _ => return Err(stray(key, line)),
                    };
                    // Keep the leading `width` bits; a longer row only has
                    // its tail dropped, a shorter one is left-aligned.
                    if bits < width {
                        value = (value << 1) | bit;
                    }
                    bits += 1;
                }
                if bits < width {
                    value <<= width - bits;
                }
                if data_y >= glyph.data.len() {
                    return Err(FdParseError::TooManyRows { line });
                }
                glyph.data[data_y] = value;
                data_y += 1;
            }
        }
    }

    if font.pointsize == 0 {
        // Pixel height less internal leading at 72 points per inch over
        // the nominal 96 dpi, rounded half to even.
        let numerator =
            u32::from(font.height.saturating_sub(font.inleading)) * 72;
        let quotient = numerator / 96;
        let remainder = numerator % 96;
        let round_up = remainder > 48 || (remainder == 48 && quotient % 2 == 1);
        font.pointsize = (quotient + u32::from(round_up)) as u16;
    }

    let missing: Vec<u16> = (0..CHAR_COUNT as u16)
        .filter(|&i| !chars.contains_key(&usize::from(i)))
        .collect();
    if !missing.is_empty() {
        return Err(FdParseError::MissingChars(missing));
    }
    font.chars = (0..CHAR_COUNT).filter_map(|i| chars.remove(&i)).collect();
    tracing::trace!("parsed .fd description of {:?}", font.facename);
    Ok(font)
}

fn parse_int(value: &str, line: usize) -> Result<u16, FdParseError> {
    value.parse().map_err(|_| FdParseError::InvalidInteger {
        value: value.to_string(),
        line,
    })
}

fn stray(keyword: &str, line: usize) -> FdParseError {
    FdParseError::UnknownKeyword {
        keyword: keyword.to_string(),
        line,
    }
}

#[cfg(test)]
#[path = "fd_test.rs"]
mod tests;
