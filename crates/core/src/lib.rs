mod error;
pub mod layout;
pub mod palette;
pub mod parser;
pub mod segments;
pub mod tikz;
mod types;

use log::debug;

pub use error::Error;
pub use layout::LayoutOptions;
pub use palette::ColorMap;
pub use parser::parse;
pub use types::*;

/// Main entry point: renders every genome in `input` as its own `tikzpicture`.
///
/// Fails on the first malformed line, oversized chromosome group, or gene without a
/// color; nothing is returned for the genomes that did render.
pub fn draw_tikz(input: &str, opts: &LayoutOptions, colors: &ColorMap) -> Result<String, Error> {
    let genomes = parser::parse(input)?;
    let mut out = String::with_capacity(4096);
    for genome in &genomes {
        let genome_layout = layout::layout(&genome.chromosomes, opts)?;
        debug!(
            "rendering genome '{}' ({} chromosomes)",
            genome.name,
            genome.chromosomes.len()
        );
        tikz::render_genome(&mut out, &genome.name, &genome_layout, opts, colors)?;
    }
    Ok(out)
}

/// Parse `input` and return the genomes as pretty-printed JSON.
pub fn draw_genomes(input: &str) -> Result<String, Error> {
    let genomes = parser::parse(input)?;
    // plain strings, enums and numbers only: serialization cannot fail
    Ok(serde_json::to_string_pretty(&genomes).unwrap_or_default())
}
