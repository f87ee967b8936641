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

//! Tests for the FNT codec.

use byteorder::ByteOrder;

use super::*;

/// A fixed-pitch 8x8 font with ink only in 'X' (all bits set).
fn monospace_font() -> Font {
    let mut chars = Vec::with_capacity(CHAR_COUNT);
    for i in 0..CHAR_COUNT {
        let data = if i == usize::from(b'X') {
            vec![0xFF; 8]
        } else {
            vec![0; 8]
        };
        chars.push(Char { width: 8, data });
    }
    Font {
        facename: String::from("Test"),
        copyright: String::from("copyright"),
        pointsize: 6,
        width: 8,
        height: 8,
        ascent: 7,
        chars,
        ..Font::default()
    }
}

#[test]
fn test_encode_layout_and_size_field() {
    let buffer = encode(&monospace_font()).unwrap();
    // 148-byte header, 257 six-byte table entries, 257 glyphs of two
    // byte-columns by eight scanlines, "Test\0".
    let expected = 148 + 257 * 6 + 257 * 2 * 8 + 5;
    assert_eq!(buffer.len(), expected);
    assert_eq!(
        byteorder::LittleEndian::read_u32(&buffer[2..6]),
        expected as u32
    );
}

#[test]
fn test_fixed_pitch_flags() {
    let buffer = encode(&monospace_font()).unwrap();
    // dfFlags sits in the 3.00 extension area, dfPixWidth at 0x56.
    assert_eq!(byteorder::LittleEndian::read_u32(&buffer[0x76..0x7A]), 1);
    assert_eq!(byteorder::LittleEndian::read_u16(&buffer[0x56..0x58]), 8);
}

#[test]
fn test_variable_pitch_flags() {
    let mut font = monospace_font();
    font.chars[usize::from(b'A')].width = 4;
    font.width = 0;
    let buffer = encode(&font).unwrap();
    assert_eq!(byteorder::LittleEndian::read_u32(&buffer[0x76..0x7A]), 2);
    assert_eq!(byteorder::LittleEndian::read_u16(&buffer[0x56..0x58]), 0);
}

#[test]
fn test_fnt_round_trip() {
    let font = monospace_font();
    let reread = decode(&encode(&font).unwrap()).unwrap();
    assert_eq!(reread, font);
}

#[test]
fn test_variable_pitch_round_trip() {
    let mut font = monospace_font();
    font.chars[usize::from(b'A')] = Char {
        width: 4,
        data: vec![0b1010, 0b0101, 0b1111, 0, 0b1000, 0, 0b0001, 0b1001],
    };
    font.width = 0;
    let reread = decode(&encode(&font).unwrap()).unwrap();
    assert_eq!(reread, font);
}

#[test]
fn test_bit_packing_boundary() {
    // An 11-pixel glyph straddles two byte columns; MSB alignment has to
    // survive the round trip.
    let mut font = monospace_font();
    font.width = 0;
    font.chars[usize::from(b'X')] = Char {
        width: 11,
        data: vec![
            0b10000000011,
            0b01010101010,
            0b11111111111,
            0b00000000001,
            0b10000000000,
            0,
            0b00100000100,
            0b11100000111,
        ],
    };
    let reread = decode(&encode(&font).unwrap()).unwrap();
    assert_eq!(
        reread.chars[usize::from(b'X')],
        font.chars[usize::from(b'X')]
    );
    assert_eq!(reread, font);
}

#[test]
fn test_width_five_round_trip() {
    let mut font = monospace_font();
    font.width = 0;
    font.chars[usize::from(b'X')] = Char {
        width: 5,
        data: vec![0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0, 0, 0b11111],
    };
    let reread = decode(&encode(&font).unwrap()).unwrap();
    assert_eq!(reread, font);
}

#[test]
fn test_vector_font_rejected() {
    let mut buffer = encode(&monospace_font()).unwrap();
    buffer[0x42] |= 1; // dfType bit 0 marks a vector font
    assert!(matches!(
        decode(&buffer),
        Err(FontIoError::VectorFontUnsupported)
    ));
}

#[test]
fn test_unknown_version_rejected() {
    let mut buffer = encode(&monospace_font()).unwrap();
    buffer[0] = 0x00;
    buffer[1] = 0x01;
    assert!(matches!(
        decode(&buffer),
        Err(FontIoError::UnknownFntVersion(0x0100))
    ));
}

#[test]
fn test_facename_out_of_range_rejected() {
    let mut buffer = encode(&monospace_font()).unwrap();
    let bogus = (buffer.len() + 1) as u32;
    byteorder::LittleEndian::write_u32(
        &mut buffer[OFF_FACE..OFF_FACE + 4],
        bogus,
    );
    assert!(matches!(
        decode(&buffer),
        Err(FontIoError::FaceNameOutOfRange(off)) if off == bogus
    ));
}

#[test]
fn test_truncated_bitmap_rejected() {
    let buffer = encode(&monospace_font()).unwrap();
    // Cut inside the bitmap area: the face name and its pointer survive
    // but glyph reads run off the end.
    let mut short = buffer[..600].to_vec();
    byteorder::LittleEndian::write_u32(&mut short[OFF_FACE..OFF_FACE + 4], 0);
    let result = decode(&short);
    assert!(matches!(
        result,
        Err(FontIoError::Truncated { .. }) | Err(FontIoError::IoError(_))
    ));
}

#[test]
fn test_copyright_short_and_full_slot() {
    let mut font = monospace_font();
    font.copyright = String::from("hello");
    let reread = decode(&encode(&font).unwrap()).unwrap();
    assert_eq!(reread.copyright, "hello");

    // A 60-byte copyright fills the slot with no terminator and decodes
    // in full.
    font.copyright = "a".repeat(60);
    let reread = decode(&encode(&font).unwrap()).unwrap();
    assert_eq!(reread.copyright, "a".repeat(60));
}

#[test]
fn test_decode_v2_char_table() {
    // A hand-built 2.00 FNT with a single 'A' glyph: 4-byte character
    // table entries with 16-bit bitmap offsets, table at 0x76.
    let mut writer = FontWriter::new();
    let header = FntHeader {
        dfVersion: FNT_VERSION_2,
        dfPoints: 8,
        dfAscent: 7,
        dfPixWidth: 8,
        dfPixHeight: 8,
        dfAvgWidth: 8,
        dfMaxWidth: 8,
        dfWidthBytes: 2,
        dfFirstChar: b'A',
        dfLastChar: b'A',
        dfDefaultChar: 0,
        dfBreakChar: 0,
        ..FntHeader::default()
    };
    header.write(&mut writer).unwrap();
    writer.u32(0); // dfBitsOffset
    writer.u8(0); // reserved
    assert_eq!(writer.len(), CHAR_TABLE_V2);
    let off_bitmap = CHAR_TABLE_V2 + 4;
    writer.u16(8); // width of 'A'
    writer.u16(off_bitmap as u16);
    let rows = [0x18, 0x24, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00];
    writer.bytes(&rows);
    let off_facename = writer.len();
    writer.bytes(b"Tiny\0");
    let mut buffer = writer.into_bytes();
    byteorder::LittleEndian::write_u32(
        &mut buffer[OFF_FACE..OFF_FACE + 4],
        off_facename as u32,
    );

    let font = decode(&buffer).unwrap();
    assert_eq!(font.facename, "Tiny");
    assert_eq!(font.height, 8);
    assert_eq!(font.chars[usize::from(b'A')].width, 8);
    assert_eq!(
        font.chars[usize::from(b'A')].data,
        rows.iter().map(|&b| u64::from(b)).collect::<Vec<_>>()
    );
    // Everything outside [first, last] stays blank.
    assert_eq!(font.chars[0], Char::blank(8));
    assert_eq!(font.chars[255], Char::blank(8));
}

#[test]
fn test_glyph_too_wide_rejected() {
    let mut buffer = encode(&monospace_font()).unwrap();
    // Patch the first character-table entry to claim a 65-pixel glyph.
    byteorder::LittleEndian::write_u16(
        &mut buffer[CHAR_TABLE_V3..CHAR_TABLE_V3 + 2],
        65,
    );
    assert!(matches!(
        decode(&buffer),
        Err(FontIoError::GlyphTooWide(65))
    ));
}
