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

//! Read and write .FON font library files.
//!
//! A .FON is an MS-DOS `MZ` executable whose NE or PE image carries FNT
//! resources. Both image kinds can be split; only the NE form is written.

use crate::{error::FontIoError, utils::u32_at};

pub(crate) mod ne;
pub(crate) mod pe;

/// Splits a .FON library into its embedded FNT resources, in file order.
pub fn split(fon: &[u8]) -> Result<Vec<&[u8]>, FontIoError> {
    if !fon.starts_with(b"MZ") {
        return Err(FontIoError::BadMzSignature);
    }
    let exe_off = u32_at(fon, 0x3C)? as usize;
    if fon.get(exe_off..exe_off + 2) == Some(b"NE".as_slice()) {
        tracing::trace!("splitting NE image at offset {exe_off:#x}");
        ne::split(fon, exe_off)
    } else if fon.get(exe_off..exe_off + 4) == Some(b"PE\0\0".as_slice()) {
        tracing::trace!("splitting PE image at offset {exe_off:#x}");
        pe::split(fon, exe_off)
    } else {
        Err(FontIoError::BadExeSignature)
    }
}

/// Builds an NE-format .FON library around the given FNT resources.
///
/// `name` is the module name, conventionally the shared face name.
pub fn build(name: &str, fnts: &[Vec<u8>]) -> Result<Vec<u8>, FontIoError> {
    tracing::debug!("building FON {name:?} with {} fonts", fnts.len());
    ne::build(name, fnts)
}

#[cfg(test)]
#[path = "fon_test.rs"]
mod tests;
