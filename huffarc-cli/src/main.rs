//! Huffarc CLI - static Huffman coding demo
//!
//! Feeds an input text through the huffarc pipeline and prints the code
//! table, the encoded bit stream, and the decoded output.

use clap::Parser;
use huffarc::{BitVec, CodeTable, FrequencyTable, HuffmanTree};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huffarc")]
#[command(version, about = "Static Huffman coding demo - Pure Rust")]
#[command(long_about = "
Huffarc encodes a text with a static Huffman code built from its symbol
frequencies, then decodes it back and prints every artifact along the way.

Examples:
  huffarc \"abracadabra\"
  huffarc --input poem.txt
  huffarc --verbose \"to be or not to be\"
")]
struct Cli {
    /// Text to encode
    text: Option<String>,

    /// Read the input from a file instead
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Also print tree statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data: Vec<u8> = match (&cli.text, &cli.input) {
        (Some(text), _) => text.clone().into_bytes(),
        (None, Some(path)) => std::fs::read(path)?,
        (None, None) => return Err("no input: pass TEXT or --input FILE".into()),
    };

    let freq = FrequencyTable::from_bytes(&data);
    let tree = HuffmanTree::build(&freq)?;
    let codes = CodeTable::assign(&tree);
    let stream = huffarc::encode(&data, &codes)?;

    if cli.verbose {
        println!("Tree: {} leaves, total weight {}", tree.leaf_count(), tree.weight());
        println!();
    }

    println!("Code table ({} symbols):", codes.len());
    let mut entries: Vec<(u8, &BitVec)> = codes.iter().collect();
    entries.sort_by_key(|&(symbol, _)| symbol);
    for (symbol, code) in entries {
        println!("  {} -> {}", display_symbol(symbol), code);
    }

    println!();
    println!("Encoded stream ({} bits, {} bytes packed):", stream.len(), stream.byte_len());
    println!("{}", stream);

    let decoded = huffarc::decode(&tree, &stream, data.len())?;
    println!();
    println!("Decoded ({} symbols):", decoded.len());
    println!("{}", String::from_utf8_lossy(&decoded));

    if decoded != data {
        return Err("round-trip mismatch: decoded output differs from input".into());
    }

    println!();
    println!(
        "Packed size: {} bytes ({:.1}% of {} raw bytes)",
        stream.byte_len(),
        (stream.byte_len() as f64 / data.len() as f64) * 100.0,
        data.len()
    );

    Ok(())
}

/// Render a symbol for the code table listing.
fn display_symbol(symbol: u8) -> String {
    if symbol.is_ascii_graphic() {
        format!("{:?}", symbol as char)
    } else if symbol == b' ' {
        "' '".to_string()
    } else {
        format!("{:#04x}", symbol)
    }
}
