//! Simple inspector for word cloud links.

use wordcloud_url::codec::params::{self, CONDENSED_KEY};
use wordcloud_url::{decode_condensed, parse_url, resolve_palette, validate_settings};

fn main() {
    let link = std::env::args().nth(1).unwrap_or_else(|| {
        "http://localhost:3000/r?mh=55&so=0%2C-5%2C5&w=turkey%2C38%3Bgravy%2C7".to_string()
    });

    println!("Link: {}", link);
    println!("Length: {} chars", link.len());

    let query = link.split_once('?').map_or("", |(_, q)| q);
    let condensed = query
        .split('&')
        .find_map(|pair| pair.strip_prefix(CONDENSED_KEY)?.strip_prefix('='))
        .filter(|token| !token.is_empty());
    if let Some(token) = condensed {
        match decode_condensed(token) {
            Ok(inner) => println!("Condensed, expands to: {}", inner),
            Err(e) => println!("Condensed, undecodable: {} ({})", e, e.code().code()),
        }
    }

    let parsed = parse_url(&link);

    println!("\n=== Settings ===");
    for (key, value) in parsed.settings.entries() {
        println!(
            "  {:<22} {:<3} = {}",
            key.name(),
            params::wire_key(key),
            params::encode_value(key.kind(), &value)
        );
    }
    for warning in validate_settings(&parsed.settings).warnings {
        println!("  ! {}", warning);
    }

    println!("\n=== Words ===");
    match &parsed.words {
        Some(words) => {
            for word in words.iter().take(20) {
                println!("  {:<20} {}", word.text, word.weight);
            }
            if words.len() > 20 {
                println!("  ... and {} more words", words.len() - 20);
            }
        }
        None => println!("  (no word list)"),
    }

    let palette = resolve_palette(&parsed.settings);
    println!("\n=== Palette ===");
    println!("  background: {}", palette.background);
    for color in &palette.colors {
        println!("  text: {}", color);
    }
}
