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

//! Tests for the compact JSON projection.

use super::*;
use crate::font::CHAR_COUNT;

#[test]
fn test_pack_blank_glyph_is_bare_width() {
    let glyph = Char {
        width: 3,
        data: vec![0, 0, 0, 0],
    };
    assert_eq!(pack_char(&glyph), json!(3));
}

#[test]
fn test_pack_repeated_rows_with_offset() {
    let glyph = Char {
        width: 5,
        data: vec![0, 0, 0b11111, 0b11111, 0b11111, 0, 0],
    };
    assert_eq!(pack_char(&glyph), json!([5, 2, { "r": [0b11111, 3] }]));
}

#[test]
fn test_pack_plain_rows_without_offset() {
    let glyph = Char {
        width: 2,
        data: vec![0b10, 0b01, 0],
    };
    assert_eq!(pack_char(&glyph), json!([2, [0b10, 0b01]]));
}

#[test]
fn test_pack_repeated_rows_without_offset() {
    let glyph = Char {
        width: 3,
        data: vec![0b111, 0b111],
    };
    assert_eq!(pack_char(&glyph), json!([3, { "r": [0b111, 2] }]));
}

fn sample_font(facename: &str, pointsize: u16) -> Font {
    Font {
        facename: facename.to_string(),
        copyright: String::new(),
        pointsize,
        height: 2,
        ascent: 2,
        chars: vec![Char::blank(2); CHAR_COUNT],
        ..Font::default()
    }
}

#[test]
fn test_font_projection_elides_defaults() {
    let font = sample_font("Plain", 10);
    let value = font_to_json(&font, "PLAIN.FON", 0);
    let object = value.as_object().unwrap();
    assert_eq!(object["facename"], json!("Plain"));
    assert_eq!(object["src"], json!(["plain.fon", 0]));
    assert_eq!(object["chars"].as_array().unwrap().len(), CHAR_COUNT);
    for elided in [
        "copyright",
        "weight",
        "charset",
        "italic",
        "underline",
        "strikeout",
        "inleading",
        "exleading",
    ] {
        assert!(!object.contains_key(elided), "{elided} should be elided");
    }
}

#[test]
fn test_font_projection_keeps_non_defaults() {
    let mut font = sample_font("Styled", 10);
    font.copyright = String::from("  (c) someone  ");
    font.weight = 700;
    font.italic = true;
    font.inleading = 2;
    font.charset = 255;
    let value = font_to_json(&font, "styled.fon", 3);
    let object = value.as_object().unwrap();
    assert_eq!(object["copyright"], json!("(c) someone"));
    assert_eq!(object["weight"], json!(700));
    assert_eq!(object["italic"], json!(true));
    assert_eq!(object["inleading"], json!(2));
    assert_eq!(object["charset"], json!(255));
    assert_eq!(object["src"], json!(["styled.fon", 3]));
}

#[test]
fn test_fonts_sorted_by_facename_then_pointsize() {
    let fonts_a = [sample_font("Zed", 8), sample_font("Abc", 12)];
    let fonts_b = [sample_font("Abc", 8)];
    let value =
        fonts_to_json(&[("a.fon", &fonts_a[..]), ("b.fon", &fonts_b[..])]);
    let order: Vec<(String, u64)> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|font| {
            (
                font["facename"].as_str().unwrap().to_string(),
                font["pointsize"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![
            (String::from("Abc"), 8),
            (String::from("Abc"), 12),
            (String::from("Zed"), 8),
        ]
    );
}
