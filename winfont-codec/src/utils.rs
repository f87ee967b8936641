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

//! Various small helpers shared by the codecs.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::FontIoError;

/// Returns the prefix of `bytes` preceding the first NUL. A terminator is
/// not required to exist.
pub(crate) fn asciz(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(n) => &bytes[..n],
        None => bytes,
    }
}

/// Renders a boolean the way .fd files spell it.
pub(crate) fn bool_str(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Decodes Windows-1252 bytes into a string.
pub(crate) fn decode_windows_1252(bytes: &[u8]) -> String {
    let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    text.into_owned()
}

/// Encodes a string as Windows-1252. Unmappable characters become numeric
/// character references, per the encoder's substitution rule.
pub(crate) fn encode_windows_1252(text: &str) -> Vec<u8> {
    let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(text);
    bytes.into_owned()
}

/// Reads the byte at `offset`.
pub(crate) fn u8_at(buf: &[u8], offset: usize) -> Result<u8, FontIoError> {
    buf.get(offset)
        .copied()
        .ok_or(FontIoError::Truncated { offset })
}

/// Reads a little-endian u16 at `offset`.
pub(crate) fn u16_at(buf: &[u8], offset: usize) -> Result<u16, FontIoError> {
    buf.get(offset..offset + 2)
        .map(LittleEndian::read_u16)
        .ok_or(FontIoError::Truncated { offset })
}

/// Reads a little-endian u32 at `offset`.
pub(crate) fn u32_at(buf: &[u8], offset: usize) -> Result<u32, FontIoError> {
    buf.get(offset..offset + 4)
        .map(LittleEndian::read_u32)
        .ok_or(FontIoError::Truncated { offset })
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
