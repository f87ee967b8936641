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

//! Little-endian byte-buffer builder for the FNT and FON emitters.
//!
//! Both emitters lay out structures whose size fields and internal offsets
//! are only known once later parts have been appended. Rather than splicing
//! a grown buffer, placeholder positions are recorded via [`FontWriter::len`]
//! and resolved with the `patch_*` primitives.

use byteorder::{ByteOrder, LittleEndian};

/// An append-only byte buffer with little-endian scalar writes and
/// back-patching of previously written positions.
#[derive(Debug, Default)]
pub(crate) struct FontWriter {
    buf: Vec<u8>,
}

impl FontWriter {
    /// Creates an empty writer.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of bytes written so far; also the offset of the next write.
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    /// Appends a single byte.
    pub(crate) fn u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Appends a little-endian u16.
    pub(crate) fn u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a little-endian u32.
    pub(crate) fn u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends raw bytes.
    pub(crate) fn bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Appends `count` NUL bytes.
    pub(crate) fn zeros(&mut self, count: usize) {
        self.buf.resize(self.buf.len() + count, 0);
    }

    /// NUL-pads the buffer up to a multiple of `align` bytes.
    pub(crate) fn pad_to(&mut self, align: usize) {
        while self.buf.len() % align != 0 {
            self.buf.push(0);
        }
    }

    /// Overwrites a previously written u16 at `offset`.
    pub(crate) fn patch_u16(&mut self, offset: usize, value: u16) {
        LittleEndian::write_u16(&mut self.buf[offset..offset + 2], value);
    }

    /// Overwrites a previously written u32 at `offset`.
    pub(crate) fn patch_u32(&mut self, offset: usize, value: u32) {
        LittleEndian::write_u32(&mut self.buf[offset..offset + 4], value);
    }

    /// Consumes the writer, returning the finished buffer.
    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl std::io::Write for FontWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;
