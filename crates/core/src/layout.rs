use std::f64::consts::PI;

use log::debug;
use serde::Deserialize;

use crate::error::Error;
use crate::types::*;

/// Labels for stacked slots; one group holds at most this many chromosomes.
pub const SLOT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Geometry parameters, in TikZ units.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LayoutOptions {
    /// Drawn length of one marker (default: 2.0)
    pub marker_len: f64,
    /// Horizontal padding added to every footprint (default: 1.0)
    pub x_pad: f64,
    /// Vertical padding added to every footprint (default: 1.0)
    pub y_pad: f64,
    /// Value of `\genescale` in the emitted picture (default: 0.8)
    pub gene_scale: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            marker_len: 2.0,
            x_pad: 1.0,
            y_pad: 1.0,
            gene_scale: 0.8,
        }
    }
}

/// Width and height a chromosome occupies before placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

/// A stacked position within the linear or circular group.
#[derive(Clone, Debug)]
pub struct Slot<'a> {
    pub label: char,
    /// Distance of the slot center below the top of its group
    pub y: f64,
    pub chromosome: &'a Chromosome,
}

#[derive(Clone, Debug)]
pub struct GenomeLayout<'a> {
    /// x of the linear group's center
    pub linear_center: f64,
    /// x of the circular group's center
    pub circular_center: f64,
    pub linear: Vec<Slot<'a>>,
    pub circular: Vec<Slot<'a>>,
}

pub fn footprint(topology: Topology, n_markers: usize, opts: &LayoutOptions) -> Footprint {
    let length = n_markers as f64 * opts.marker_len;
    match topology {
        Topology::Linear => Footprint {
            width: length + opts.x_pad,
            height: opts.y_pad,
        },
        Topology::Circular => {
            // total marker length is the circumference
            let d = length / PI;
            Footprint {
                width: d + opts.x_pad,
                height: d + opts.y_pad,
            }
        }
    }
}

pub fn chromosome_footprint(chromosome: &Chromosome, opts: &LayoutOptions) -> Footprint {
    footprint(chromosome.topology, chromosome.markers.len(), opts)
}

/// Label of the `index`-th slot in a group.
pub fn slot_label(index: usize, topology: Topology, count: usize) -> Result<char, Error> {
    SLOT_ALPHABET
        .chars()
        .nth(index)
        .ok_or(Error::TooManyChromosomes {
            topology,
            count,
            max: SLOT_ALPHABET.len(),
        })
}

/// Place a genome's chromosomes: linear group on the left, circular group to its right,
/// each group stacked top to bottom in input order.
pub fn layout<'a>(
    chromosomes: &'a [Chromosome],
    opts: &LayoutOptions,
) -> Result<GenomeLayout<'a>, Error> {
    let linears: Vec<&Chromosome> = chromosomes
        .iter()
        .filter(|c| c.topology == Topology::Linear)
        .collect();
    let circulars: Vec<&Chromosome> = chromosomes
        .iter()
        .filter(|c| c.topology == Topology::Circular)
        .collect();

    let max_width_l = max_width(&linears, opts);
    let max_width_c = max_width(&circulars, opts);

    let linear = stack(&linears, Topology::Linear, opts)?;
    let circular = stack(&circulars, Topology::Circular, opts)?;
    debug!(
        "layout: {} linear, {} circular, group widths {:.2} / {:.2}",
        linear.len(),
        circular.len(),
        max_width_l,
        max_width_c
    );

    Ok(GenomeLayout {
        linear_center: max_width_l / 2.0,
        circular_center: max_width_l + 0.5 * max_width_c,
        linear,
        circular,
    })
}

fn max_width(group: &[&Chromosome], opts: &LayoutOptions) -> f64 {
    group
        .iter()
        .map(|c| chromosome_footprint(c, opts).width)
        .fold(0.0, f64::max)
}

fn stack<'a>(
    group: &[&'a Chromosome],
    topology: Topology,
    opts: &LayoutOptions,
) -> Result<Vec<Slot<'a>>, Error> {
    let mut slots = Vec::with_capacity(group.len());
    let mut coord = 0.0;
    for (i, &chromosome) in group.iter().enumerate() {
        let half = 0.5 * chromosome_footprint(chromosome, opts).height;
        coord += half;
        slots.push(Slot {
            label: slot_label(i, topology, group.len())?,
            y: coord,
            chromosome,
        });
        coord += half;
    }
    Ok(slots)
}
