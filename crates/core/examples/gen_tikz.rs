use genomedraw_core::palette::{generate_palette, DEFAULT_PALETTE_SIZE};
use genomedraw_core::{ColorMap, LayoutOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Prints a standalone LaTeX document drawing two small genomes.
fn main() {
    let input = ">ancestor\n1 2 3 4 5 6)\n7 8 9|\n>descendant\n1 -3 -2 4 5 6)\n7 -9 8|\n";

    let mut rng = StdRng::seed_from_u64(42);
    let palette = generate_palette(&mut rng, 1, DEFAULT_PALETTE_SIZE);

    println!(r"\documentclass[tikz]{{standalone}}");
    println!(r"\usetikzlibrary{{math,arrows.meta}}");
    for entry in &palette {
        println!("{entry}");
    }
    println!(r"\tikzset{{gene/.style={{line width=2pt,-{{Stealth[length=4pt]}}}}}}");
    println!(r"\begin{{document}}");
    match genomedraw_core::draw_tikz(input, &LayoutOptions::default(), &ColorMap::default()) {
        Ok(tikz) => print!("{tikz}"),
        Err(e) => eprintln!("error: {e}"),
    }
    println!(r"\end{{document}}");
}
