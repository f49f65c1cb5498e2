use genomedraw_core::{ColorMap, LayoutOptions};
use wasm_bindgen::prelude::*;

/// Parse a genome description and return the genomes as JSON.
#[wasm_bindgen]
pub fn draw_genomes(input: &str) -> String {
    genomedraw_core::draw_genomes(input).unwrap_or_default()
}

/// Render a genome description as TikZ with JSON layout options.
///
/// `opts_json` is parsed as `LayoutOptions` with `#[serde(default)]`,
/// so any omitted field uses the default value. Returns an empty string
/// if the input cannot be rendered.
#[wasm_bindgen]
pub fn draw_tikz(input: &str, opts_json: &str) -> String {
    let opts: LayoutOptions = serde_json::from_str(opts_json).unwrap_or_default();
    genomedraw_core::draw_tikz(input, &opts, &ColorMap::default()).unwrap_or_default()
}

/// Human-readable error for input that `draw_tikz` rejects, or an empty string.
#[wasm_bindgen]
pub fn tikz_error(input: &str, opts_json: &str) -> String {
    let opts: LayoutOptions = serde_json::from_str(opts_json).unwrap_or_default();
    genomedraw_core::draw_tikz(input, &opts, &ColorMap::default())
        .err()
        .map(|e| e.to_string())
        .unwrap_or_default()
}
