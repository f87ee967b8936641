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

//! Example tool generating Windows bitmap font files from .fd text
//! descriptions.

use std::collections::BTreeSet;

use anyhow::bail;
use clap::Parser;
use winfont_codec::{fd, fnt, fon, Font};

/// Compile .fd descriptions into a .FNT resource or a .FON library.
#[derive(Debug, Parser)]
struct Args {
    /// Output file; the extension picks the format
    #[clap(short, long)]
    outfile: Option<String>,
    /// Face name for the library; defaults to the fonts' shared name
    #[clap(long)]
    facename: Option<String>,
    /// Input .fd files
    files: Vec<String>,
}

/// Main function for the fd2fon example.
fn main() -> Result<(), anyhow::Error> {
    // Initialize the logger, can be controlled with RUST_LOG=debug,info,
    // trace, etc.
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut fonts: Vec<Font> = Vec::new();
    for file in &args.files {
        let text = std::fs::read_to_string(file)?;
        fonts.push(fd::parse(&text)?);
    }
    println!("Read {} fonts", fonts.len());

    let Some(outfile) = args.outfile else {
        println!("No output file specified");
        return Ok(());
    };

    if outfile.ends_with(".fnt") {
        if fonts.len() > 1 {
            bail!("can only write one font to a .fnt; use a .fon for a family");
        }
        std::fs::write(&outfile, fnt::encode(&fonts[0])?)?;
    } else if outfile.ends_with(".fon") {
        let facename = match args.facename {
            Some(facename) => facename,
            None => {
                let facenames: BTreeSet<&str> = fonts
                    .iter()
                    .map(|font| font.facename.as_str())
                    .collect();
                let mut facenames = facenames.into_iter();
                match (facenames.next(), facenames.next()) {
                    (Some(facename), None) => facename.to_string(),
                    _ => bail!(
                        "specify a face name explicitly; the fonts do not \
                         share one"
                    ),
                }
            }
        };
        let fnts = fonts
            .iter()
            .map(fnt::encode)
            .collect::<Result<Vec<_>, _>>()?;
        std::fs::write(&outfile, fon::build(&facename, &fnts)?)?;
    } else {
        bail!("unknown file type: {outfile}");
    }
    Ok(())
}
