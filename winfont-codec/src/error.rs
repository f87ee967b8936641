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

//! Errors related to font container I/O and .fd parsing.

/// Errors related to reading or writing binary font containers.
#[derive(Debug, thiserror::Error)]
pub enum FontIoError {
    /// The MZ header points at neither an NE nor a PE image.
    #[error("NE or PE signature not found")]
    BadExeSignature,
    /// The buffer does not begin with an `MZ` executable signature.
    #[error("MZ signature not found")]
    BadMzSignature,
    /// The face-name pointer lies outside the FNT data.
    #[error("face name not contained within font data (offset {0})")]
    FaceNameOutOfRange(u32),
    /// A glyph is wider than the 64 pixels a packed scanline can hold.
    #[error("glyph is {0} pixels wide; at most 64 are supported")]
    GlyphTooWide(u16),
    /// An error occurred while reading or writing the font data.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// A PE image carries no `.rsrc` section.
    #[error("unable to locate resource section")]
    NoRsrcSection,
    /// A resource extends past the end of the container.
    #[error("resource at {start} of size {size} overruns file of {len} bytes")]
    ResourceOverrun {
        /// Resource start, as a file offset.
        start: usize,
        /// Resource size in bytes.
        size: usize,
        /// Total container size in bytes.
        len: usize,
    },
    /// A read ran past the end of the buffer.
    #[error("unexpected end of data at offset {offset}")]
    Truncated {
        /// Offset of the first byte that could not be read.
        offset: usize,
    },
    /// The FNT version word is neither 2.00 nor 3.00.
    #[error("unknown FNT version 0x{0:04x}; expected 0x0200 or 0x0300")]
    UnknownFntVersion(u16),
    /// The FNT describes a vector font, which this crate does not handle.
    #[error("this font is a vector font")]
    VectorFontUnsupported,
}

/// Errors related to parsing a .fd font description.
#[derive(Debug, thiserror::Error)]
pub enum FdParseError {
    /// The copyright string does not fit the 60-byte FNT header slot.
    #[error("copyright too long ({0} bytes; at most 59 fit the header)")]
    CopyrightTooLong(usize),
    /// A glyph is wider than the 64 pixels a packed scanline can hold.
    #[error("glyph is {0} pixels wide; at most 64 are supported")]
    GlyphTooWide(u16),
    /// A numeric attribute failed to parse.
    #[error("invalid integer value {value:?} at line {line}")]
    InvalidInteger {
        /// The offending value text.
        value: String,
        /// Line number, counted from 1.
        line: usize,
    },
    /// One or more character indices never received a `char` directive.
    #[error("missing characters {0:?}")]
    MissingChars(Vec<u16>),
    /// A glyph has more bitmap rows than the font height allows.
    #[error("more bitmap rows than the font height at line {line}")]
    TooManyRows {
        /// Line number, counted from 1.
        line: usize,
    },
    /// A line starts with a token that is neither a keyword nor glyph data.
    #[error("unknown keyword {keyword:?} at line {line}")]
    UnknownKeyword {
        /// The offending token.
        keyword: String,
        /// Line number, counted from 1.
        line: usize,
    },
}
