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

//! Lossy compact JSON projection of fonts, suited to corpus tooling.
//!
//! Not a round-trippable serialization: style fields at their defaults
//! are elided and glyph bitmaps are packed with blank-row trimming and
//! run-length compression of repeated scanlines.

use serde_json::{json, Map, Value};

use crate::font::{Char, Font};

/// Packs a glyph into its most compact JSON form.
///
/// The forms are a bare integer (blank glyph, just the width), a
/// two-element array `[width, rows]`, or `[width, y, rows]` when the
/// first `y` scanlines are blank. `rows` is either a list of scanline
/// values or `{"r": [value, count]}` when a single value repeats.
pub fn pack_char(glyph: &Char) -> Value {
    let mut data = glyph.data.as_slice();
    while data.last() == Some(&0) {
        data = &data[..data.len() - 1];
    }
    let mut y = 0;
    while data.first() == Some(&0) {
        data = &data[1..];
        y += 1;
    }
    if data.is_empty() {
        return json!(glyph.width);
    }
    let rows = if data.iter().all(|&row| row == data[0]) {
        json!({ "r": [data[0], data.len()] })
    } else {
        json!(data)
    };
    if y == 0 {
        json!([glyph.width, rows])
    } else {
        json!([glyph.width, y, rows])
    }
}

/// Projects one font into a JSON object.
///
/// Scalar fields are carried over with empty or default style values
/// elided; `chars` is replaced by [`pack_char`] output and `src` records
/// the provenance as `[basename, index]`, basename lowercased.
pub fn font_to_json(font: &Font, src: &str, index: usize) -> Value {
    let mut map = Map::new();
    map.insert("facename".into(), json!(font.facename));
    let copyright = font.copyright.trim();
    if !copyright.is_empty() {
        map.insert("copyright".into(), json!(copyright));
    }
    map.insert("pointsize".into(), json!(font.pointsize));
    map.insert("width".into(), json!(font.width));
    map.insert("height".into(), json!(font.height));
    map.insert("ascent".into(), json!(font.ascent));
    map.insert("res_x".into(), json!(font.res_x));
    map.insert("res_y".into(), json!(font.res_y));
    if font.inleading != 0 {
        map.insert("inleading".into(), json!(font.inleading));
    }
    if font.exleading != 0 {
        map.insert("exleading".into(), json!(font.exleading));
    }
    if font.italic {
        map.insert("italic".into(), json!(true));
    }
    if font.underline {
        map.insert("underline".into(), json!(true));
    }
    if font.strikeout {
        map.insert("strikeout".into(), json!(true));
    }
    if font.weight != 400 {
        map.insert("weight".into(), json!(font.weight));
    }
    if font.charset != 0 {
        map.insert("charset".into(), json!(font.charset));
    }
    map.insert("src".into(), json!([src.to_lowercase(), index]));
    map.insert(
        "chars".into(),
        Value::Array(font.chars.iter().map(pack_char).collect()),
    );
    Value::Object(map)
}

/// Projects fonts from several sources into a single array sorted by
/// face name and point size.
///
/// Each source pairs a name (conventionally the file basename) with the
/// fonts decoded from it, in file order.
pub fn fonts_to_json(sources: &[(&str, &[Font])]) -> Value {
    let mut entries: Vec<(&str, usize, &Font)> = Vec::new();
    for (name, fonts) in sources {
        for (index, font) in fonts.iter().enumerate() {
            entries.push((name, index, font));
        }
    }
    entries.sort_by_key(|&(_, _, font)| {
        (font.facename.clone(), font.pointsize)
    });
    Value::Array(
        entries
            .into_iter()
            .map(|(name, index, font)| font_to_json(font, name, index))
            .collect(),
    )
}

#[cfg(test)]
#[path = "json_test.rs"]
mod tests;
