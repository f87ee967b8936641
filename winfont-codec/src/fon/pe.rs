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

//! The 32-bit Portable-Executable side of a .FON, read only: locate the
//! `.rsrc` section and walk its resource directory tree for fonts.

use std::collections::VecDeque;

use crate::{
    error::FontIoError,
    utils::{asciz, u16_at, u32_at},
};

/// PE resource type id of a font.
const RT_FONT: u32 = 0x08;

/// Collects the FNT resources of a PE image.
pub(crate) fn split(
    fon: &[u8],
    pe_off: usize,
) -> Result<Vec<&[u8]>, FontIoError> {
    // The optional header only talks in RVAs, so go straight to the
    // section table behind it.
    let sections = usize::from(u16_at(fon, pe_off + 0x06)?);
    let sectable = pe_off + 0x18 + usize::from(u16_at(fon, pe_off + 0x14)?);
    let mut rsrc_section = None;
    for i in 0..sections {
        let entry = sectable + i * 0x28;
        let name = fon.get(entry..entry + 8).ok_or(FontIoError::Truncated {
            offset: entry,
        })?;
        if asciz(name) == b".rsrc" {
            rsrc_section = Some((
                u32_at(fon, entry + 0x0C)? as usize, // RVA
                u32_at(fon, entry + 0x10)? as usize, // size
                u32_at(fon, entry + 0x14)? as usize, // file offset
            ));
            break;
        }
    }
    let (sec_rva, sec_size, sec_ptr) =
        rsrc_section.ok_or(FontIoError::NoRsrcSection)?;
    let rsrc = fon.get(sec_ptr..sec_ptr + sec_size).ok_or(
        FontIoError::ResourceOverrun {
            start: sec_ptr,
            size: sec_size,
            len: fon.len(),
        },
    )?;

    // Walk the directory tree: the root is filtered to the RT_FONT
    // subtree, every table below it is taken whole.
    let mut tables = VecDeque::new();
    let mut data_entries = Vec::new();
    read_directory(rsrc, 0, Some(RT_FONT), &mut tables, &mut data_entries)?;
    while let Some(table) = tables.pop_front() {
        read_directory(rsrc, table, None, &mut tables, &mut data_entries)?;
    }

    // What remains are Resource Data Entries, each describing one font.
    let mut fnts = Vec::new();
    for off in data_entries {
        let rva = u32_at(rsrc, off)? as usize;
        let size = u32_at(rsrc, off + 4)? as usize;
        let start =
            rva.checked_sub(sec_rva)
                .ok_or(FontIoError::ResourceOverrun {
                    start: rva,
                    size,
                    len: rsrc.len(),
                })?;
        let data = rsrc.get(start..start + size).ok_or(
            FontIoError::ResourceOverrun {
                start,
                size,
                len: rsrc.len(),
            },
        )?;
        fnts.push(data);
    }
    Ok(fnts)
}

/// Reads one resource directory table, queueing subtables and collecting
/// data-entry offsets; `filter` restricts which entry ids are taken.
fn read_directory(
    rsrc: &[u8],
    off: usize,
    filter: Option<u32>,
    tables: &mut VecDeque<usize>,
    data_entries: &mut Vec<usize>,
) -> Result<(), FontIoError> {
    let number = usize::from(u16_at(rsrc, off + 12)?)
        + usize::from(u16_at(rsrc, off + 14)?);
    for i in 0..number {
        let entry = off + 16 + 8 * i;
        let id = u32_at(rsrc, entry)?;
        let child = u32_at(rsrc, entry + 4)?;
        if filter.map_or(true, |wanted| wanted == id) {
            if child & 0x8000_0000 != 0 {
                tables.push_back((child & !0x8000_0000) as usize);
            } else {
                data_entries.push(child as usize);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "pe_test.rs"]
mod tests;
