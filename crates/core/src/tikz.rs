use std::fmt::{self, Write};

use crate::error::Error;
use crate::layout::{GenomeLayout, LayoutOptions};
use crate::palette::ColorMap;
use crate::segments;
use crate::types::*;

/// One coordinate of a drawing anchor.
#[derive(Clone, Debug, PartialEq)]
pub enum Coord {
    /// Literal value, printed with two decimals
    Value(f64),
    /// TikZ math variable, e.g. `\cxa`
    Var(String),
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coord::Value(v) => write!(f, "{v:.2}"),
            Coord::Var(name) => f.write_str(name),
        }
    }
}

impl From<f64> for Coord {
    fn from(v: f64) -> Self {
        Coord::Value(v)
    }
}

/// Variable names of a slot's coordinates, e.g. `(\cxa, \cya)`.
fn slot_vars(topology: Topology, label: char) -> (String, String) {
    let group = match topology {
        Topology::Linear => 'l',
        Topology::Circular => 'c',
    };
    (format!("\\{group}x{label}"), format!("\\{group}y{label}"))
}

/// Write a circular chromosome as one `arc` per marker around `(x, y)`.
pub fn render_circular(
    out: &mut String,
    markers: &[Marker],
    x: &Coord,
    y: &Coord,
    marker_len: f64,
    colors: &ColorMap,
) -> Result<(), Error> {
    let arcs = segments::circular(markers, marker_len, colors)?;
    out.push_str("%circular chromosome\n");
    for arc in &arcs {
        let _ = writeln!(
            out,
            r"\draw[gene,{color}] ({x},{y})++({start:.2}:{radius:.2}) arc ({start:.2}:{end:.2}:{radius:.2});",
            color = arc.color,
            start = arc.start,
            end = arc.end,
            radius = arc.radius,
        );
    }
    Ok(())
}

/// Write a linear chromosome as one segment per marker, centered on `(x, y)`.
pub fn render_linear(
    out: &mut String,
    markers: &[Marker],
    x: &Coord,
    y: &Coord,
    marker_len: f64,
    colors: &ColorMap,
) -> Result<(), Error> {
    let lines = segments::linear(markers, marker_len, colors)?;
    out.push_str("%linear chromosome\n");
    for line in &lines {
        let _ = writeln!(
            out,
            r"\draw[gene,{color}] ({x},{y})++({offset:.2},0) -- ++({length:.2},0);",
            color = line.color,
            offset = line.offset,
            length = line.length,
        );
    }
    Ok(())
}

/// Write one genome as a complete `tikzpicture`.
///
/// The picture declares `\lm`/`\cm` for the group centers and one `x`/`y` pair
/// per slot, then draws circular chromosomes before linear ones.
pub fn render_genome(
    out: &mut String,
    name: &str,
    layout: &GenomeLayout<'_>,
    opts: &LayoutOptions,
    colors: &ColorMap,
) -> Result<(), Error> {
    let _ = writeln!(out, "%Genome '{name}'");
    out.push_str("\\begin{tikzpicture}\n");
    out.push_str("\\tikzmath{\n");
    let _ = writeln!(out, "\\genescale = {};", opts.gene_scale);
    let _ = writeln!(out, "\\lm = {:.2};", layout.linear_center);
    let _ = writeln!(out, "\\cm = {:.2};", layout.circular_center);
    for slot in &layout.linear {
        let (x, y) = slot_vars(Topology::Linear, slot.label);
        let _ = writeln!(out, "{y} = {:.2};", -slot.y);
        let _ = writeln!(out, "{x} = \\lm;");
    }
    for slot in &layout.circular {
        let (x, y) = slot_vars(Topology::Circular, slot.label);
        let _ = writeln!(out, "{y} = {:.2};", -slot.y);
        let _ = writeln!(out, "{x} = \\cm;");
    }
    out.push_str("}\n");

    for slot in &layout.circular {
        let (x, y) = slot_vars(Topology::Circular, slot.label);
        let (x, y) = (Coord::Var(x), Coord::Var(y));
        render_circular(out, &slot.chromosome.markers, &x, &y, opts.marker_len, colors)?;
    }
    for slot in &layout.linear {
        let (x, y) = slot_vars(Topology::Linear, slot.label);
        let (x, y) = (Coord::Var(x), Coord::Var(y));
        render_linear(out, &slot.chromosome.markers, &x, &y, opts.marker_len, colors)?;
    }

    out.push_str("\\end{tikzpicture}\n");
    Ok(())
}
