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

//! Codec for Windows bitmap font containers.
//!
//! Three representations of the same raster-font data are supported and
//! convert losslessly into each other:
//!
//! - .FNT, the raw Windows GDI raster-font resource (versions 2.00 and
//!   3.00), handled by [`fnt`];
//! - .FON, a font library: an MZ executable whose NE or PE resource
//!   section embeds FNT resources, handled by [`fon`] (NE read/write,
//!   PE read only);
//! - .fd, a line-oriented text rendition with ASCII glyph art, handled
//!   by [`fd`].
//!
//! The crate is purely a codec: byte buffers in, byte buffers or text
//! out, no file I/O. [`parse_fonts`] sniffs a buffer and decodes
//! whichever binary form it holds.
//!
//! # Example
//! ```
//! use winfont_codec::{fd, fnt, fon, parse_fonts};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A minimal all-blank font description.
//! let mut text = String::from("facename Demo\nheight 2\nascent 2\n");
//! for i in 0..256 {
//!     text.push_str(&format!("char {i}\nwidth 0\n\n"));
//! }
//! let font = fd::parse(&text)?;
//!
//! // Wrap it into a single-font .FON library and read it back.
//! let library = fon::build("Demo", &[fnt::encode(&font)?])?;
//! assert_eq!(parse_fonts(&library)?, vec![font]);
//! # Ok(())
//! # }
//! ```

use std::io::{Read, Seek, Write};

pub mod error;
pub mod fd;
pub mod fnt;
pub mod fon;
pub mod font;
pub mod json;
pub(crate) mod utils;
pub(crate) mod writer;

pub use font::{Char, Font};

use error::FontIoError;

/// Trait for reading a binary font structure from a reader.
pub trait FontDataRead
where
    Self: Sized,
{
    /// The error type for reading the data.
    type Error;
    /// Reads the structure from the reader's current position.
    fn from_reader<T: Read + Seek + ?Sized>(
        reader: &mut T,
    ) -> Result<Self, Self::Error>;
}

/// Trait for writing a binary font structure to a writer.
pub trait FontDataWrite {
    /// The error type for writing the data.
    type Error;
    /// Writes the structure to the writer.
    fn write<TDest: Write + ?Sized>(
        &self,
        dest: &mut TDest,
    ) -> Result<(), Self::Error>;
}

/// Decodes every font in a buffer holding either a .FON library or a
/// bare .FNT resource, in file order.
pub fn parse_fonts(data: &[u8]) -> Result<Vec<Font>, FontIoError> {
    if data.starts_with(b"MZ") {
        fon::split(data)?.into_iter().map(fnt::decode).collect()
    } else {
        Ok(vec![fnt::decode(data)?])
    }
}
