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

//! Tests for the PE resource walker, against a hand-built MZ+PE image.

use super::*;
use crate::{
    fnt,
    font::{Char, Font, CHAR_COUNT},
    parse_fonts,
    writer::FontWriter,
};

fn blank_font() -> Font {
    Font {
        facename: String::from("PeFont"),
        copyright: String::from("none"),
        pointsize: 9,
        height: 4,
        ascent: 4,
        chars: vec![Char::blank(4); CHAR_COUNT],
        ..Font::default()
    }
}

/// Builds a minimal MZ+PE image with one section holding a resource tree
/// of root -> name -> language -> data entry around a single FNT.
fn build_pe(section_name: &[u8; 8], size_override: Option<u32>) -> (Font, Vec<u8>) {
    let font = blank_font();
    let fnt = fnt::encode(&font).unwrap();
    let sec_rva = 0x3000_u32;

    let mut rsrc = FontWriter::new();
    // Root directory: two id entries, only the RT_FONT one is real.
    rsrc.zeros(12);
    rsrc.u16(0); // named entries
    rsrc.u16(2); // id entries
    rsrc.u32(3); // RT_ICON, skipped by the walker
    rsrc.u32(0x8000_0200);
    rsrc.u32(8); // RT_FONT
    rsrc.u32(0x8000_0020);
    // Name directory at 0x20.
    rsrc.zeros(12);
    rsrc.u16(0);
    rsrc.u16(1);
    rsrc.u32(1); // resource ordinal
    rsrc.u32(0x8000_0038);
    // Language directory at 0x38.
    rsrc.zeros(12);
    rsrc.u16(0);
    rsrc.u16(1);
    rsrc.u32(0x409); // en-US
    rsrc.u32(0x50); // leaf: a data entry
    // Resource data entry at 0x50.
    rsrc.u32(sec_rva + 0x60);
    rsrc.u32(size_override.unwrap_or(fnt.len() as u32));
    rsrc.u32(0); // codepage
    rsrc.u32(0); // reserved
    assert_eq!(rsrc.len(), 0x60);
    rsrc.bytes(&fnt);
    let rsrc = rsrc.into_bytes();

    let mut file = FontWriter::new();
    file.bytes(b"MZ");
    file.zeros(0x3C - 2);
    file.u32(0x40); // PE header offset
    file.bytes(b"PE\0\0");
    file.u16(0x014C); // machine: i386
    file.u16(1); // one section
    file.u32(0); // timestamp
    file.u32(0); // symbol table
    file.u32(0); // symbol count
    file.u16(0); // optional header size
    file.u16(0x2102); // characteristics
    assert_eq!(file.len(), 0x58);
    file.bytes(section_name);
    file.u32(rsrc.len() as u32); // virtual size
    file.u32(sec_rva); // RVA
    file.u32(rsrc.len() as u32); // raw size
    file.u32(0x80); // raw pointer
    file.zeros(0x0C); // relocation and line-number fields
    file.u32(0); // section characteristics
    assert_eq!(file.len(), 0x80);
    file.bytes(&rsrc);
    (font, file.into_bytes())
}

#[test]
fn test_pe_split_extracts_font() {
    let (font, image) = build_pe(b".rsrc\0\0\0", None);
    let resources = crate::fon::split(&image).unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0], &fnt::encode(&font).unwrap()[..]);
    assert_eq!(parse_fonts(&image).unwrap(), vec![font]);
}

#[test]
fn test_missing_rsrc_section() {
    let (_, image) = build_pe(b".text\0\0\0", None);
    assert!(matches!(
        crate::fon::split(&image),
        Err(FontIoError::NoRsrcSection)
    ));
}

#[test]
fn test_data_entry_overrun() {
    let (_, image) = build_pe(b".rsrc\0\0\0", Some(0x10000));
    assert!(matches!(
        crate::fon::split(&image),
        Err(FontIoError::ResourceOverrun { .. })
    ));
}
