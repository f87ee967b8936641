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

//! The in-memory font description shared by all codecs.

use serde::Serialize;

/// Number of character cells in a font; glyphs are indexed by byte value.
pub const CHAR_COUNT: usize = 256;

/// A single glyph bitmap.
///
/// Each scanline packs the glyph bits left-to-right with the leftmost pixel
/// in the most-significant bit of the `width`-bit field; bits at and above
/// bit `width` are zero. Widths beyond 64 pixels are not representable and
/// are rejected by the decoders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Char {
    /// Cell width in pixels; 0 for an empty cell.
    pub width: u16,
    /// One packed scanline per pixel row, exactly `Font::height` entries.
    pub data: Vec<u64>,
}

impl Char {
    /// Creates a zero-width glyph with `height` blank scanlines.
    pub fn blank(height: u16) -> Self {
        Self {
            width: 0,
            data: vec![0; height as usize],
        }
    }
}

/// An in-memory Windows raster font.
///
/// Values are created by the FNT or .fd decoder and treated as immutable by
/// the encoders and the JSON projection. A well-formed font has exactly
/// [`CHAR_COUNT`] glyphs, each with `height` scanlines, and a weight in
/// 1..=1000 (400 is normal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Font {
    /// Face name, printable ASCII or Windows-1252.
    pub facename: String,
    /// Copyright string; at most 59 bytes once encoded, to fit the fixed
    /// 60-byte header slot with its terminator.
    pub copyright: String,
    /// Nominal point size.
    pub pointsize: u16,
    /// Fixed cell width in pixels, or 0 for a variable-pitch font.
    pub width: u16,
    /// Cell height in pixels.
    pub height: u16,
    /// Distance from the cell top to the baseline, in pixels.
    pub ascent: u16,
    /// Horizontal resolution in dpi.
    pub res_x: u16,
    /// Vertical resolution in dpi.
    pub res_y: u16,
    /// Internal leading, in pixels.
    pub inleading: u16,
    /// External leading, in pixels.
    pub exleading: u16,
    /// Italic style flag.
    pub italic: bool,
    /// Underline style flag.
    pub underline: bool,
    /// Strikeout style flag.
    pub strikeout: bool,
    /// Weight, 1..=1000; 400 is normal.
    pub weight: u16,
    /// Character set code; 0 is ANSI.
    pub charset: u8,
    /// Glyphs indexed by byte value, exactly [`CHAR_COUNT`] entries.
    pub chars: Vec<Char>,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            facename: String::from("(unknown)"),
            copyright: String::from("(unknown)"),
            pointsize: 0,
            width: 0,
            height: 0,
            ascent: 0,
            res_x: 96,
            res_y: 96,
            inleading: 0,
            exleading: 0,
            italic: false,
            underline: false,
            strikeout: false,
            weight: 400,
            charset: 0,
            chars: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "font_test.rs"]
mod tests;
