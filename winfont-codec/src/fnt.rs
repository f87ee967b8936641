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

//! Read and write .FNT raster-font resources.
//!
//! The bitmap is stored column-major: for every 8-pixel column group the
//! file holds one byte per scanline, top to bottom, before moving to the
//! next group. The decoder folds those bytes back into per-scanline
//! integers with the leftmost pixel in the most-significant bit of the
//! `width`-bit field.

use std::io::{Cursor, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::{
    error::FontIoError,
    font::{Char, Font, CHAR_COUNT},
    utils::{asciz, decode_windows_1252, encode_windows_1252, u8_at},
    writer::FontWriter,
    FontDataRead, FontDataWrite,
};

pub mod header;

use self::header::{
    FntHeader, CHAR_TABLE_V2, CHAR_TABLE_V3, FNT_VERSION_2, FNT_VERSION_3,
    OFF_BITS_OFFSET, OFF_FACE, OFF_SIZE,
};

/// Widest glyph a packed scanline can represent.
const MAX_GLYPH_WIDTH: u16 = 64;

/// Decodes a FNT resource into a [`Font`].
pub fn decode(fnt: &[u8]) -> Result<Font, FontIoError> {
    let mut reader = Cursor::new(fnt);
    let header = FntHeader::from_reader(&mut reader)?;
    if header.dfType & 1 != 0 {
        return Err(FontIoError::VectorFontUnsupported);
    }
    let version = header.dfVersion;
    if version != FNT_VERSION_2 && version != FNT_VERSION_3 {
        return Err(FontIoError::UnknownFntVersion(version));
    }
    let off_facename = header.dfFace;
    if off_facename as usize > fnt.len() {
        return Err(FontIoError::FaceNameOutOfRange(off_facename));
    }
    let copyright = decode_windows_1252(asciz(&header.dfCopyright));
    let facename = decode_windows_1252(asciz(&fnt[off_facename as usize..]));
    tracing::trace!(
        "decoding FNT version 0x{version:04x}, face {facename:?}"
    );

    let (ct_start, ct_entry) = if version == FNT_VERSION_2 {
        (CHAR_TABLE_V2, 4)
    } else {
        (CHAR_TABLE_V3, 6)
    };
    let height = header.dfPixHeight;
    let first = usize::from(header.dfFirstChar);
    let last = usize::from(header.dfLastChar);
    let mut chars = vec![Char::blank(height); CHAR_COUNT];
    for (i, glyph) in chars.iter_mut().enumerate().take(last + 1).skip(first)
    {
        reader.seek(SeekFrom::Start(
            (ct_start + ct_entry * (i - first)) as u64,
        ))?;
        let width = reader.read_u16::<LittleEndian>()?;
        let off = if ct_entry == 4 {
            usize::from(reader.read_u16::<LittleEndian>()?)
        } else {
            reader.read_u32::<LittleEndian>()? as usize
        };
        if width > MAX_GLYPH_WIDTH {
            return Err(FontIoError::GlyphTooWide(width));
        }
        glyph.width = width;
        let groups = (usize::from(width) + 7) / 8;
        for j in 0..usize::from(height) {
            let mut line = 0_u64;
            for k in 0..groups {
                let byte =
                    u64::from(u8_at(fnt, off + k * usize::from(height) + j)?);
                line |= if usize::from(width) >= 8 * (k + 1) {
                    byte << (usize::from(width) - 8 * (k + 1))
                } else {
                    byte >> (8 * (k + 1) - usize::from(width))
                };
            }
            glyph.data[j] = line;
        }
    }
    Ok(Font {
        facename,
        copyright,
        pointsize: header.dfPoints,
        width: header.dfPixWidth,
        height,
        ascent: header.dfAscent,
        res_x: header.dfHorizRes,
        res_y: header.dfVertRes,
        inleading: header.dfInternalLeading,
        exleading: header.dfExternalLeading,
        italic: header.dfItalic != 0,
        underline: header.dfUnderline != 0,
        strikeout: header.dfStrikeOut != 0,
        weight: header.dfWeight,
        charset: header.dfCharSet,
        chars,
    })
}

/// Encodes a [`Font`] as a 3.00 FNT resource.
///
/// Assumes a well-formed font (see [`Font`]); an invariant violation such
/// as a missing glyph entry is a programmer error.
pub fn encode(font: &Font) -> Result<Vec<u8>, FontIoError> {
    // Average width is defined by Windows to be the width of 'X'.
    let avgwidth = font.chars[usize::from(b'X')].width;
    let mut maxwidth = 0_u16;
    let mut fixed = true;
    for glyph in &font.chars {
        if glyph.width != avgwidth {
            fixed = false;
        }
        maxwidth = maxwidth.max(glyph.width);
    }
    // Byte columns per bitmap row, rounded up to an even count. An
    // all-blank font legitimately comes out at zero.
    let widthbytes =
        (((i32::from(maxwidth) - 1).div_euclid(16) + 1) * 2) as usize;

    let mut copyright = encode_windows_1252(&font.copyright);
    copyright.resize(60, 0);
    let mut header = FntHeader {
        dfPoints: font.pointsize,
        dfAscent: font.ascent,
        dfInternalLeading: font.inleading,
        dfExternalLeading: font.exleading,
        dfItalic: u8::from(font.italic),
        dfUnderline: u8::from(font.underline),
        dfStrikeOut: u8::from(font.strikeout),
        dfWeight: font.weight,
        dfCharSet: font.charset,
        dfPixWidth: if fixed { avgwidth } else { 0 },
        dfPixHeight: font.height,
        dfPitchAndFamily: u8::from(!fixed),
        dfAvgWidth: avgwidth,
        dfMaxWidth: maxwidth,
        dfWidthBytes: widthbytes as u16,
        ..FntHeader::default()
    };
    header.dfCopyright.copy_from_slice(&copyright);

    let mut writer = FontWriter::new();
    header.write(&mut writer)?;
    // The 3.00 extension area.
    writer.u32(0); // bitmap-data offset, patched below
    writer.u8(0); // reserved
    writer.u32(if fixed { 1 } else { 2 }); // dfFlags
    writer.u16(0); // Aspace
    writer.u16(0); // Bspace
    writer.u16(0); // Cspace
    writer.u32(0); // colour pointer
    writer.zeros(16); // dfReserved1

    let offset_chartbl = writer.len();
    debug_assert_eq!(offset_chartbl, CHAR_TABLE_V3);
    // 257 entries: 256 characters plus the sentinel.
    let offset_bitmaps = offset_chartbl + 257 * 6;
    writer.patch_u32(OFF_BITS_OFFSET, offset_bitmaps as u32);

    let empty: &[u64] = &[];
    let mut bitmaps = Vec::new();
    for i in 0..=CHAR_COUNT {
        let (width, rows) = match font.chars.get(i) {
            Some(glyph) => (glyph.width, glyph.data.as_slice()),
            // The sentinel entry carries the average width and no ink.
            None => (avgwidth, empty),
        };
        writer.u16(width);
        writer.u32((offset_bitmaps + bitmaps.len()) as u32);
        for group in 0..widthbytes {
            for k in 0..usize::from(font.height) {
                let line = rows.get(k).copied().unwrap_or(0);
                bitmaps.push(column_byte(line, width, group));
            }
        }
    }
    writer.bytes(&bitmaps);

    let off_facename = writer.len();
    writer.patch_u32(OFF_FACE, off_facename as u32);
    writer.bytes(&encode_windows_1252(&font.facename));
    writer.u8(0);
    let total = writer.len();
    writer.patch_u32(OFF_SIZE, total as u32);
    Ok(writer.into_bytes())
}

/// Extracts column group `group` of a packed scanline as one bitmap byte.
fn column_byte(line: u64, width: u16, group: usize) -> u8 {
    let width = usize::from(width);
    if width >= 8 * (group + 1) {
        (line >> (width - 8 * (group + 1))) as u8
    } else if 8 * group < width {
        ((line << (8 * (group + 1) - width)) & 0xFF) as u8
    } else {
        0
    }
}

#[cfg(test)]
#[path = "fnt_test.rs"]
mod tests;
