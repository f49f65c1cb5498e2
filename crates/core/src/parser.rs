use std::collections::HashMap;

use log::{debug, warn};

use crate::error::Error;
use crate::types::*;

/// Line prefix that starts a new genome.
pub const HEADER_MARKER: char = '>';
/// Separator between gene identifier and instance count in a sub-id.
pub const SUBID_SEP: char = '.';

/// Occurrence counts per gene family, local to one `parse` call.
#[derive(Default, Debug)]
pub struct FamilyTable {
    counts: HashMap<String, usize>,
}

impl FamilyTable {
    /// Record one more occurrence of `gene` and return its sub-id.
    pub fn next_sub_id(&mut self, gene: &str) -> String {
        let count = self.counts.entry(gene.to_string()).or_insert(0);
        *count += 1;
        format!("{gene}{SUBID_SEP}{count}")
    }
}

/// Collects chromosomes until the next header or end of input seals them.
struct GenomeAccumulator {
    name: String,
    chromosomes: Vec<Chromosome>,
    /// No header seen yet: the open genome is the preamble
    in_preamble: bool,
    seen_header: bool,
    genomes: Vec<Genome>,
}

impl GenomeAccumulator {
    fn new() -> Self {
        Self {
            name: String::new(),
            chromosomes: Vec::new(),
            in_preamble: true,
            seen_header: false,
            genomes: Vec::new(),
        }
    }

    fn push(&mut self, chromosome: Chromosome) {
        self.chromosomes.push(chromosome);
    }

    fn start_genome(&mut self, name: &str) {
        self.seal();
        self.name = name.to_string();
        self.in_preamble = false;
        self.seen_header = true;
    }

    fn seal(&mut self) {
        let chromosomes = std::mem::take(&mut self.chromosomes);
        let name = std::mem::take(&mut self.name);
        if self.in_preamble {
            if !chromosomes.is_empty() {
                warn!(
                    "discarding {} chromosome(s) before the first genome header",
                    chromosomes.len()
                );
            }
            return;
        }
        debug!("genome '{}': {} chromosome(s)", name, chromosomes.len());
        self.genomes.push(Genome { name, chromosomes });
    }

    fn finish(mut self) -> Vec<Genome> {
        // Without any header the whole input is one unnamed genome
        if !self.seen_header {
            self.in_preamble = false;
        }
        self.seal();
        self.genomes
    }
}

/// Parse a genome description into genomes in input order.
///
/// Lines starting with `>` name a new genome. Every other non-blank line is a
/// chromosome: whitespace-separated markers followed by `|` (linear) or `)`
/// (circular). Chromosomes before the first header are dropped.
pub fn parse(input: &str) -> Result<Vec<Genome>, Error> {
    let mut families = FamilyTable::default();
    let mut acc = GenomeAccumulator::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(name) = line.strip_prefix(HEADER_MARKER) {
            acc.start_genome(name.trim());
            continue;
        }
        acc.push(parse_chromosome(line, &mut families)?);
    }

    Ok(acc.finish())
}

/// Parse one non-blank chromosome line.
pub fn parse_chromosome(line: &str, families: &mut FamilyTable) -> Result<Chromosome, Error> {
    let mut chars = line.chars();
    let last = chars.next_back().unwrap_or(' ');
    let topology = Topology::from_symbol(last).ok_or_else(|| Error::malformed_topology(last))?;
    let markers = chars
        .as_str()
        .split_whitespace()
        .map(|token| parse_marker(token, families))
        .collect();
    Ok(Chromosome { topology, markers })
}

/// Parse one marker token, extending the family table.
pub fn parse_marker(token: &str, families: &mut FamilyTable) -> Marker {
    let token = token.trim();
    let (direction, gene) = if let Some(rest) = token.strip_prefix(Direction::NEGATIVE_SYMBOL) {
        (Direction::Negative, rest.trim())
    } else if let Some(rest) = token.strip_prefix(Direction::POSITIVE_SYMBOL) {
        (Direction::Positive, rest.trim())
    } else {
        (Direction::Positive, token)
    };
    let sub_id = families.next_sub_id(gene);
    Marker {
        gene: gene.to_string(),
        sub_id,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_circular() {
        let genomes = parse("a +b -c)").unwrap();
        assert_eq!(genomes.len(), 1);
        assert_eq!(genomes[0].name, "");
        let chrom = &genomes[0].chromosomes[0];
        assert_eq!(chrom.topology, Topology::Circular);
        let genes: Vec<&str> = chrom.markers.iter().map(|m| m.gene.as_str()).collect();
        assert_eq!(genes, ["a", "b", "c"]);
        let dirs: Vec<Direction> = chrom.markers.iter().map(|m| m.direction).collect();
        assert_eq!(
            dirs,
            [Direction::Positive, Direction::Positive, Direction::Negative]
        );
    }

    #[test]
    fn test_malformed_topology() {
        let err = parse("a b*").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedTopology {
                found: '*',
                linear: '|',
                circular: ')',
            }
        );
    }

    #[test]
    fn test_malformed_line_aborts_everything() {
        assert!(parse(">g1\n1 2|\n>g2\n3 4]\n").is_err());
    }

    #[test]
    fn test_no_headers_single_genome() {
        let genomes = parse("1 2 3|\n\n4 5)\n").unwrap();
        assert_eq!(genomes.len(), 1);
        assert_eq!(genomes[0].name, "");
        assert_eq!(genomes[0].chromosomes.len(), 2);
    }

    #[test]
    fn test_headers_split_genomes() {
        let genomes = parse(">A\n1 2|\n3)\n> B \n-1 2|\n").unwrap();
        assert_eq!(genomes.len(), 2);
        assert_eq!(genomes[0].name, "A");
        assert_eq!(genomes[0].chromosomes.len(), 2);
        assert_eq!(genomes[1].name, "B");
        assert_eq!(genomes[1].chromosomes.len(), 1);
    }

    #[test]
    fn test_preamble_dropped() {
        let genomes = parse("9 9|\n>A\n1|\n").unwrap();
        assert_eq!(genomes.len(), 1);
        assert_eq!(genomes[0].name, "A");
        assert_eq!(genomes[0].chromosomes[0].markers[0].gene, "1");
    }

    #[test]
    fn test_empty_genome_kept() {
        let genomes = parse(">A\n>B\n1)\n").unwrap();
        assert_eq!(genomes.len(), 2);
        assert!(genomes[0].chromosomes.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let genomes = parse("").unwrap();
        assert_eq!(genomes.len(), 1);
        assert!(genomes[0].chromosomes.is_empty());
    }

    #[test]
    fn test_sub_ids_across_genomes() {
        let genomes = parse(">A\n1 -1 2|\n>B\n1 2 2)\n").unwrap();
        let ids: Vec<&str> = genomes
            .iter()
            .flat_map(|g| &g.chromosomes)
            .flat_map(|c| &c.markers)
            .map(|m| m.sub_id.as_str())
            .collect();
        assert_eq!(ids, ["1.1", "1.2", "2.1", "1.3", "2.2", "2.3"]);
    }

    #[test]
    fn test_family_table() {
        let mut families = FamilyTable::default();
        assert_eq!(families.next_sub_id("4"), "4.1");
        assert_eq!(families.next_sub_id("4"), "4.2");
        assert_eq!(families.next_sub_id("5"), "5.1");
        assert_eq!(families.next_sub_id("4"), "4.3");
    }

    #[test]
    fn test_marker_signs() {
        let mut families = FamilyTable::default();
        let m = parse_marker("+12", &mut families);
        assert_eq!((m.gene.as_str(), m.direction), ("12", Direction::Positive));
        let m = parse_marker("-12", &mut families);
        assert_eq!((m.gene.as_str(), m.direction), ("12", Direction::Negative));
        assert_eq!(m.sub_id, "12.2");
    }

    #[test]
    fn test_empty_chromosome_line() {
        let genomes = parse(")").unwrap();
        assert_eq!(genomes[0].chromosomes[0].topology, Topology::Circular);
        assert!(genomes[0].chromosomes[0].markers.is_empty());
    }
}
