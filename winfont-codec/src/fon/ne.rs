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

//! The 16-bit New-Executable side of a .FON: resource-table walking on the
//! read path, whole-image synthesis on the write path.

use crate::{
    error::FontIoError,
    fnt::header::{OFF_BITS_OFFSET, OFF_DEVICE, OFF_FACE},
    utils::{asciz, encode_windows_1252, u16_at, u32_at},
    writer::FontWriter,
};

/// NE resource type of a font, with the "is an ordinal" bit set.
const RT_FONT: u16 = 0x8008;
/// NE resource type of a font directory, with the "is an ordinal" bit set.
const RT_FONTDIR: u16 = 0x8007;

/// Code of the MZ stub: print the message at CS:000E and exit via INT 21h.
const STUB_CODE: [u8; 14] = [
    0xBA, 0x0E, 0x00, // mov dx,0xe
    0x0E, // push cs
    0x1F, // pop ds
    0xB4, 0x09, // mov ah,0x9
    0xCD, 0x21, // int 0x21
    0xB8, 0x01, 0x4C, // mov ax,0x4c01
    0xCD, 0x21, // int 0x21
];

/// Message the stub prints; '$' is the INT 21h string terminator.
const STUB_MESSAGE: &[u8] = b"This is not a program!\r\nThis is a font library.\r\n$";

/// Collects the FNT resources of an NE image, in resource-table order.
pub(crate) fn split(
    fon: &[u8],
    ne_off: usize,
) -> Result<Vec<&[u8]>, FontIoError> {
    let rtable = ne_off + usize::from(u16_at(fon, ne_off + 0x24)?);
    // Alignment shift count; clamping keeps absurd counts from
    // overflowing, anything they address then overruns the file.
    let shift = u32::from(u16_at(fon, rtable)?).min(32);
    let mut fnts = Vec::new();
    let mut p = rtable + 2;
    loop {
        let rtype = u16_at(fon, p)?;
        if rtype == 0 {
            break; // end of resource table
        }
        let count = usize::from(u16_at(fon, p + 2)?);
        p += 8; // type, count, 4 reserved bytes
        for _ in 0..count {
            let start = (u64::from(u16_at(fon, p)?) << shift) as usize;
            let size = (u64::from(u16_at(fon, p + 2)?) << shift) as usize;
            if start + size > fon.len() {
                return Err(FontIoError::ResourceOverrun {
                    start,
                    size,
                    len: fon.len(),
                });
            }
            if rtype == RT_FONT {
                fnts.push(&fon[start..start + size]);
            }
            p += 12; // start, size, flags, name or id, 4 reserved bytes
        }
    }
    Ok(fnts)
}

/// Returns the FONTDIRENTRY for a FNT resource: its fixed header followed
/// by the inlined device and face name strings.
pub(crate) fn direntry(fnt: &[u8]) -> Result<Vec<u8>, FontIoError> {
    let device = u32_at(fnt, OFF_DEVICE)? as usize;
    let face = u32_at(fnt, OFF_FACE)? as usize;
    let header = fnt.get(..OFF_BITS_OFFSET).ok_or(FontIoError::Truncated {
        offset: OFF_BITS_OFFSET,
    })?;
    let devname = if device == 0 {
        &[][..]
    } else {
        asciz(fnt.get(device..).unwrap_or(&[]))
    };
    let facename = asciz(fnt.get(face..).unwrap_or(&[]));
    let mut entry = Vec::with_capacity(
        header.len() + devname.len() + facename.len() + 2,
    );
    entry.extend_from_slice(header);
    entry.extend_from_slice(devname);
    entry.push(0);
    entry.extend_from_slice(facename);
    entry.push(0);
    Ok(entry)
}

/// Creates the small MZ executable the NE header hides behind.
fn stub() -> Vec<u8> {
    let mut w = FontWriter::new();
    w.bytes(b"MZ");
    w.u16(0); // bytes in the last page, patched below
    w.u16(0); // page count, patched below
    w.u16(0); // no relocations
    w.u16(4); // header size in paragraphs
    w.u16(0x10); // 16 extra paragraphs for stack
    w.u16(0xFFFF); // maximum extra paragraphs: lots
    w.u16(0); // SS = 0
    w.u16(0x100); // SP = 0x100
    w.u16(0); // no checksum
    w.u16(0); // IP = 0
    w.u16(0); // CS = 0, start at the beginning
    w.u16(0x40); // relocation table past this header
    w.u16(0); // overlay number
    w.zeros(8); // reserved
    w.u16(0); // OEM id
    w.u16(0); // OEM info
    w.zeros(20); // reserved
    w.u32(0); // offset to the NE header, patched below
    debug_assert_eq!(w.len(), 0x40);
    w.bytes(&STUB_CODE);
    w.bytes(STUB_MESSAGE);
    let n = w.len();
    let pages = (n + 511) / 512;
    w.patch_u16(0x02, (n - (pages - 1) * 512) as u16);
    w.patch_u16(0x04, pages as u16);
    w.pad_to(16);
    let total = w.len();
    w.patch_u32(0x3C, total as u32);
    w.into_bytes()
}

/// Builds a complete MZ+NE font library around the given FNT resources.
pub(crate) fn build(
    name: &str,
    fnts: &[Vec<u8>],
) -> Result<Vec<u8>, FontIoError> {
    let name_bytes = encode_windows_1252(name);

    // The FONTDIR resource body: a count, then an ordinal and a
    // FONTDIRENTRY per font.
    let mut fontdir = FontWriter::new();
    fontdir.u16(fnts.len() as u16);
    for (i, fnt) in fnts.iter().enumerate() {
        fontdir.u16(i as u16 + 1);
        fontdir.bytes(&direntry(fnt)?);
    }
    let fontdir = fontdir.into_bytes();

    let stub = stub();

    // Non-resident name table: a FONTRES line.
    let mut line = b"FONTRES 100,96,96 : ".to_vec();
    line.extend_from_slice(&name_bytes);
    let mut nonres = vec![line.len() as u8];
    nonres.extend_from_slice(&line);
    nonres.extend_from_slice(&[0, 0, 0]);
    // Resident name table: just a module name.
    let mname: Vec<u8> = name_bytes
        .iter()
        .copied()
        .filter(u8::is_ascii_alphanumeric)
        .collect();
    let mut res = vec![mname.len() as u8];
    res.extend_from_slice(&mname);
    res.extend_from_slice(&[0, 0, 0]);
    // The entry table and the imported-names table share one zero word.
    let entry_len = 2_usize;

    // Resource table size: shift count, end-of-table word and the
    // "FONTDIR" name string (12), TYPEINFO and NAMEINFO for the FONTDIR
    // (20), the fonts TYPEINFO (8) and a NAMEINFO per font.
    let resrcsize = 12 + 20 + 8 + 12 * fnts.len();
    let resrcpad = ((resrcsize + 15) & !15) - resrcsize;

    // Pack the tables tightly after the 0x40-byte NE header.
    let off_segtable = 0x40_usize;
    let off_restable = off_segtable;
    let off_res = off_restable + resrcsize + resrcpad;
    let off_modref = off_res + res.len();
    let off_import = off_modref;
    let off_entry = off_modref;
    let off_nonres = off_entry + entry_len;
    let end = off_nonres + nonres.len();
    let pad = ((end + 15) & !15) - end;
    // File offset at which the resource data begins.
    let q = end + pad + stub.len();

    let mut restable = FontWriter::new();
    let mut resdata = FontWriter::new();
    restable.u16(4); // shift count: resources align to 16 bytes
    // The FONTDIR resource.
    restable.u16(RT_FONTDIR);
    restable.u16(1);
    restable.u32(0);
    restable.u16(((q + resdata.len()) >> 4) as u16);
    let start = resdata.len();
    resdata.bytes(&fontdir);
    resdata.pad_to(16);
    restable.u16(((resdata.len() - start) >> 4) as u16);
    restable.u16(0x0C50); // flags
    restable.u16((resrcsize - 8) as u16); // offset of the "FONTDIR" string
    restable.u32(0);
    // The font resources.
    restable.u16(RT_FONT);
    restable.u16(fnts.len() as u16);
    restable.u32(0);
    for (i, fnt) in fnts.iter().enumerate() {
        restable.u16(((q + resdata.len()) >> 4) as u16);
        let start = resdata.len();
        resdata.bytes(fnt);
        resdata.pad_to(16);
        restable.u16(((resdata.len() - start) >> 4) as u16);
        restable.u16(0x1C30); // flags
        restable.u16(0x8001 + i as u16); // ordinal resource id
        restable.u32(0);
    }
    restable.u16(0); // end of resource table
    debug_assert_eq!(restable.len(), resrcsize - 8);
    restable.bytes(b"\x07FONTDIR");
    restable.zeros(resrcpad);

    let mut file = FontWriter::new();
    file.bytes(&stub);
    file.bytes(b"NE");
    file.u8(5); // linker major version
    file.u8(10); // linker minor version
    file.u16(off_entry as u16);
    file.u16(entry_len as u16);
    file.u32(0); // no CRC
    file.u16(0x8308); // flags: library, non-conforming
    file.u16(0); // no autodata segment
    file.u16(0); // no heap
    file.u16(0); // no stack
    file.u32(0); // CS:IP = 0:0
    file.u32(0); // SS:SP = 0:0
    file.u16(0); // segment table entries
    file.u16(0); // module-reference table entries
    file.u16(nonres.len() as u16);
    file.u16(off_segtable as u16);
    file.u16(off_restable as u16);
    file.u16(off_res as u16);
    file.u16(off_modref as u16);
    file.u16(off_import as u16);
    file.u32((stub.len() + off_nonres) as u32); // non-resident names, from file start
    file.u16(0); // no movable entries
    file.u16(4); // segment alignment shift count
    file.u16(0); // no resource segments
    file.u8(2); // target OS: Windows
    file.u8(8); // additional flags
    file.u16(0); // gangload offset
    file.u16(0); // gangload length
    file.u16(0); // minimum code swap area
    file.u16(0x0300); // expected Windows version
    debug_assert_eq!(file.len(), stub.len() + 0x40);
    file.bytes(&restable.into_bytes());
    file.bytes(&res);
    file.u16(0); // entry / imported-names table
    file.bytes(&nonres);
    file.zeros(pad);
    file.bytes(&resdata.into_bytes());
    Ok(file.into_bytes())
}

#[cfg(test)]
#[path = "ne_test.rs"]
mod tests;
