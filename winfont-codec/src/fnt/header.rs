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

//! FNT resource header.

use std::{
    io::{Read, Seek, Write},
    mem::size_of,
};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{error::FontIoError, FontDataRead, FontDataWrite};

/// Version word of a 2.00 FNT resource.
pub const FNT_VERSION_2: u16 = 0x0200;
/// Version word of a 3.00 FNT resource.
pub const FNT_VERSION_3: u16 = 0x0300;

/// File offset of the total-size dword.
pub(crate) const OFF_SIZE: usize = 0x02;
/// File offset of the device-name pointer dword.
pub(crate) const OFF_DEVICE: usize = 0x65;
/// File offset of the face-name pointer dword.
pub(crate) const OFF_FACE: usize = 0x69;
/// File offset of the bitmap-data offset dword (3.00 extension area).
pub(crate) const OFF_BITS_OFFSET: usize = 0x71;
/// Character-table start for a 2.00 FNT.
pub(crate) const CHAR_TABLE_V2: usize = 0x76;
/// Character-table start for a 3.00 FNT.
pub(crate) const CHAR_TABLE_V3: usize = 0x94;

/// FNT header, from the Windows 3 Developer's Notes `FONTINFO` layout.
///
/// Covers the fixed fields up to and including `dfBitsPointer`; the 3.00
/// extension area (`dfBitsOffset` through `dfReserved1`) is handled by the
/// encoder directly since the decoder never reads it.
#[derive(Copy, Clone, Debug)]
#[repr(C, packed(1))] // As defined by the FNT resource layout.
#[allow(non_snake_case)] // As defined by the FNT resource layout.
pub struct FntHeader {
    /// Format version; 0x0200 or 0x0300.
    pub dfVersion: u16,
    /// Total size of the resource in bytes.
    pub dfSize: u32,
    /// NUL-padded copyright slot.
    pub dfCopyright: [u8; 60],
    /// Font type; bit 0 set marks a vector font.
    pub dfType: u16,
    /// Nominal point size.
    pub dfPoints: u16,
    /// Nominal vertical resolution, dpi.
    pub dfVertRes: u16,
    /// Nominal horizontal resolution, dpi.
    pub dfHorizRes: u16,
    /// Baseline distance from the cell top, pixels.
    pub dfAscent: u16,
    /// Internal leading, pixels.
    pub dfInternalLeading: u16,
    /// External leading, pixels.
    pub dfExternalLeading: u16,
    /// Italic flag byte.
    pub dfItalic: u8,
    /// Underline flag byte.
    pub dfUnderline: u8,
    /// Strikeout flag byte.
    pub dfStrikeOut: u8,
    /// Weight, 1..=1000.
    pub dfWeight: u16,
    /// Character set code.
    pub dfCharSet: u8,
    /// Fixed cell width in pixels, or 0 for variable pitch.
    pub dfPixWidth: u16,
    /// Cell height in pixels.
    pub dfPixHeight: u16,
    /// Pitch and family byte; bit 0 set marks variable pitch.
    pub dfPitchAndFamily: u8,
    /// Average glyph width (the width of 'X' by Windows convention).
    pub dfAvgWidth: u16,
    /// Widest glyph width.
    pub dfMaxWidth: u16,
    /// First character code covered by the character table.
    pub dfFirstChar: u8,
    /// Last character code covered by the character table.
    pub dfLastChar: u8,
    /// Substitute character, relative to `dfFirstChar`.
    pub dfDefaultChar: u8,
    /// Word-break character, relative to `dfFirstChar`.
    pub dfBreakChar: u8,
    /// Bytes per bitmap row, rounded up to an even count.
    pub dfWidthBytes: u16,
    /// Offset of the device-name string, or 0.
    pub dfDevice: u32,
    /// Offset of the face-name string.
    pub dfFace: u32,
    /// Load-time bitmap pointer slot; 0 in files.
    pub dfBitsPointer: u32,
}

impl FntHeader {
    /// The size of the fixed FNT header.
    pub(crate) const SIZE: usize = size_of::<Self>();
}

impl Default for FntHeader {
    fn default() -> Self {
        Self {
            dfVersion: FNT_VERSION_3,
            dfSize: 0,
            dfCopyright: [0; 60],
            dfType: 0,
            dfPoints: 0,
            dfVertRes: 96,
            dfHorizRes: 96,
            dfAscent: 0,
            dfInternalLeading: 0,
            dfExternalLeading: 0,
            dfItalic: 0,
            dfUnderline: 0,
            dfStrikeOut: 0,
            dfWeight: 400,
            dfCharSet: 0,
            dfPixWidth: 0,
            dfPixHeight: 0,
            dfPitchAndFamily: 0,
            dfAvgWidth: 0,
            dfMaxWidth: 0,
            dfFirstChar: 0,
            dfLastChar: 255,
            dfDefaultChar: 63,
            dfBreakChar: 32,
            dfWidthBytes: 0,
            dfDevice: 0,
            dfFace: 0,
            dfBitsPointer: 0,
        }
    }
}

impl FontDataRead for FntHeader {
    type Error = FontIoError;

    fn from_reader<T: Read + Seek + ?Sized>(
        reader: &mut T,
    ) -> Result<Self, Self::Error> {
        let dfVersion = reader.read_u16::<LittleEndian>()?;
        let dfSize = reader.read_u32::<LittleEndian>()?;
        let mut dfCopyright = [0_u8; 60];
        reader.read_exact(&mut dfCopyright)?;
        Ok(Self {
            dfVersion,
            dfSize,
            dfCopyright,
            dfType: reader.read_u16::<LittleEndian>()?,
            dfPoints: reader.read_u16::<LittleEndian>()?,
            dfVertRes: reader.read_u16::<LittleEndian>()?,
            dfHorizRes: reader.read_u16::<LittleEndian>()?,
            dfAscent: reader.read_u16::<LittleEndian>()?,
            dfInternalLeading: reader.read_u16::<LittleEndian>()?,
            dfExternalLeading: reader.read_u16::<LittleEndian>()?,
            dfItalic: reader.read_u8()?,
            dfUnderline: reader.read_u8()?,
            dfStrikeOut: reader.read_u8()?,
            dfWeight: reader.read_u16::<LittleEndian>()?,
            dfCharSet: reader.read_u8()?,
            dfPixWidth: reader.read_u16::<LittleEndian>()?,
            dfPixHeight: reader.read_u16::<LittleEndian>()?,
            dfPitchAndFamily: reader.read_u8()?,
            dfAvgWidth: reader.read_u16::<LittleEndian>()?,
            dfMaxWidth: reader.read_u16::<LittleEndian>()?,
            dfFirstChar: reader.read_u8()?,
            dfLastChar: reader.read_u8()?,
            dfDefaultChar: reader.read_u8()?,
            dfBreakChar: reader.read_u8()?,
            dfWidthBytes: reader.read_u16::<LittleEndian>()?,
            dfDevice: reader.read_u32::<LittleEndian>()?,
            dfFace: reader.read_u32::<LittleEndian>()?,
            dfBitsPointer: reader.read_u32::<LittleEndian>()?,
        })
    }
}

impl FontDataWrite for FntHeader {
    type Error = FontIoError;

    fn write<TDest: Write + ?Sized>(
        &self,
        dest: &mut TDest,
    ) -> Result<(), Self::Error> {
        dest.write_u16::<LittleEndian>(self.dfVersion)?;
        dest.write_u32::<LittleEndian>(self.dfSize)?;
        dest.write_all(&self.dfCopyright)?;
        dest.write_u16::<LittleEndian>(self.dfType)?;
        dest.write_u16::<LittleEndian>(self.dfPoints)?;
        dest.write_u16::<LittleEndian>(self.dfVertRes)?;
        dest.write_u16::<LittleEndian>(self.dfHorizRes)?;
        dest.write_u16::<LittleEndian>(self.dfAscent)?;
        dest.write_u16::<LittleEndian>(self.dfInternalLeading)?;
        dest.write_u16::<LittleEndian>(self.dfExternalLeading)?;
        dest.write_u8(self.dfItalic)?;
        dest.write_u8(self.dfUnderline)?;
        dest.write_u8(self.dfStrikeOut)?;
        dest.write_u16::<LittleEndian>(self.dfWeight)?;
        dest.write_u8(self.dfCharSet)?;
        dest.write_u16::<LittleEndian>(self.dfPixWidth)?;
        dest.write_u16::<LittleEndian>(self.dfPixHeight)?;
        dest.write_u8(self.dfPitchAndFamily)?;
        dest.write_u16::<LittleEndian>(self.dfAvgWidth)?;
        dest.write_u16::<LittleEndian>(self.dfMaxWidth)?;
        dest.write_u8(self.dfFirstChar)?;
        dest.write_u8(self.dfLastChar)?;
        dest.write_u8(self.dfDefaultChar)?;
        dest.write_u8(self.dfBreakChar)?;
        dest.write_u16::<LittleEndian>(self.dfWidthBytes)?;
        dest.write_u32::<LittleEndian>(self.dfDevice)?;
        dest.write_u32::<LittleEndian>(self.dfFace)?;
        dest.write_u32::<LittleEndian>(self.dfBitsPointer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "header_test.rs"]
mod tests;
