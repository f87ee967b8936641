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

//! Example tool dumping the fonts of .FON/.FNT files as compact JSON.

use std::path::Path;

use clap::Parser;
use winfont_codec::{json, parse_fonts, Font};

/// Dump the fonts of .FON/.FNT files to stdout as compact JSON.
#[derive(Debug, Parser)]
struct Args {
    /// Input font files
    #[clap(required = true)]
    files: Vec<String>,
}

/// Main function for the fon2json example.
fn main() -> Result<(), anyhow::Error> {
    // Initialize the logger, can be controlled with RUST_LOG=debug,info,
    // trace, etc.
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut sources: Vec<(String, Vec<Font>)> = Vec::new();
    for file in &args.files {
        let data = std::fs::read(file)?;
        let basename = Path::new(file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.clone());
        sources.push((basename, parse_fonts(&data)?));
    }
    let sources: Vec<(&str, &[Font])> = sources
        .iter()
        .map(|(name, fonts)| (name.as_str(), fonts.as_slice()))
        .collect();
    println!("{}", json::fonts_to_json(&sources));
    Ok(())
}
