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

//! Example tool extracting bitmap font data from a Windows .FON or .FNT
//! file into .fd descriptions.

use anyhow::bail;
use clap::Parser;
use winfont_codec::{fd, parse_fonts};

/// Extract the fonts of a .FON library (or a bare .FNT) as .fd text.
#[derive(Debug, Parser)]
struct Args {
    /// Output file; only valid when the input holds a single font
    #[clap(short, long)]
    outfile: Option<String>,
    /// Prefix for per-font output files, numbered 00, 01, ...
    #[clap(short, long)]
    prefix: Option<String>,
    /// Input .FON or .FNT file
    file: String,
}

/// Main function for the fon2fd example.
fn main() -> Result<(), anyhow::Error> {
    // Initialize the logger, can be controlled with RUST_LOG=debug,info,
    // trace, etc.
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let data = std::fs::read(&args.file)?;
    let fonts = parse_fonts(&data)?;

    for (i, font) in fonts.iter().enumerate() {
        print!("{} {}", font.facename, font.pointsize);
        let outfile = if let Some(outfile) = &args.outfile {
            if fonts.len() > 1 {
                bail!(
                    "more than one font in file; use --prefix instead of \
                     --outfile"
                );
            }
            Some(outfile.clone())
        } else {
            args.prefix.as_ref().map(|prefix| format!("{prefix}{i:02}.fd"))
        };
        if let Some(outfile) = outfile {
            let mut text = String::new();
            fd::write(font, &mut text)?;
            std::fs::write(&outfile, text)?;
            print!(" => {outfile}");
        }
        println!();
    }
    Ok(())
}
