use std::f64::consts::PI;

use crate::error::Error;
use crate::palette::ColorMap;
use crate::types::*;

/// Generate one arc per marker around a ring whose circumference is the total marker length.
///
/// Marker `i` of `n` covers `[-i/n·360°, -(i+1)/n·360°]`, clockwise from the anchor's
/// x-axis. A negative marker's own arc runs from end to start.
pub fn circular(
    markers: &[Marker],
    marker_len: f64,
    colors: &ColorMap,
) -> Result<Vec<ArcPrimitive>, Error> {
    let n = markers.len() as f64;
    let radius = ring_radius(markers.len(), marker_len);
    markers
        .iter()
        .enumerate()
        .map(|(i, m)| -> Result<ArcPrimitive, Error> {
            let i = i as f64;
            // 0.0 - x keeps the first angle at +0.0
            let mut start = 0.0 - i / n * 360.0;
            let mut end = 0.0 - (i + 1.0) / n * 360.0;
            if m.direction == Direction::Negative {
                std::mem::swap(&mut start, &mut end);
            }
            Ok(ArcPrimitive {
                color: colors.get(&m.gene)?.to_string(),
                start,
                end,
                radius,
            })
        })
        .collect()
}

/// Generate one segment per marker, centered on the anchor.
///
/// The drawing direction encodes the strand: positive markers are drawn rightward
/// from their left end, negative markers leftward from their right end.
pub fn linear(
    markers: &[Marker],
    marker_len: f64,
    colors: &ColorMap,
) -> Result<Vec<LinePrimitive>, Error> {
    let half = markers.len() as f64 / 2.0;
    markers
        .iter()
        .enumerate()
        .map(|(i, m)| -> Result<LinePrimitive, Error> {
            let i = i as f64;
            let (offset, length) = match m.direction {
                Direction::Positive => ((i - half) * marker_len, marker_len),
                Direction::Negative => ((i + 1.0 - half) * marker_len, -marker_len),
            };
            Ok(LinePrimitive {
                color: colors.get(&m.gene)?.to_string(),
                offset,
                length,
            })
        })
        .collect()
}

pub fn ring_radius(n_markers: usize, marker_len: f64) -> f64 {
    n_markers as f64 * marker_len / (2.0 * PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn markers(input: &str) -> Vec<Marker> {
        parse(input).unwrap().remove(0).chromosomes.remove(0).markers
    }

    fn letters() -> ColorMap {
        ColorMap::from_pairs([("a", "ca"), ("b", "cb"), ("c", "cc")])
    }

    #[test]
    fn test_three_marker_ring() {
        let arcs = circular(&markers("a +b -c)"), 2.0, &letters()).unwrap();
        assert_eq!(arcs.len(), 3);
        assert_eq!((arcs[0].start, arcs[0].end), (0.0, -120.0));
        assert_eq!((arcs[1].start, arcs[1].end), (-120.0, -240.0));
        // negative: swapped
        assert_eq!((arcs[2].start, arcs[2].end), (-360.0, -240.0));
        assert_eq!(arcs[1].color, "cb");
        assert!((arcs[0].radius - 6.0 / (2.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn test_ring_covers_full_circle() {
        for input in ["a)", "a -b)", "-a b -c a b -c -a)", "a b c a b c a b c a b)"] {
            let arcs = circular(&markers(input), 2.0, &letters()).unwrap();
            let total: f64 = arcs.iter().map(|a| (a.end - a.start).abs()).sum();
            assert!((total - 360.0).abs() < 1e-9, "{input}: {total}");
        }
    }

    #[test]
    fn test_negative_marker_only_affects_itself() {
        let pos = circular(&markers("a b c a)"), 2.0, &letters()).unwrap();
        let neg = circular(&markers("a -b c a)"), 2.0, &letters()).unwrap();
        assert_eq!((neg[1].start, neg[1].end), (pos[1].end, pos[1].start));
        for i in [0, 2, 3] {
            assert_eq!(neg[i], pos[i]);
        }
    }

    #[test]
    fn test_linear_offsets() {
        let segs = linear(&markers("a -b c|"), 2.0, &letters()).unwrap();
        assert_eq!((segs[0].offset, segs[0].length), (-3.0, 2.0));
        // negative: starts at its right end, drawn leftward
        assert_eq!((segs[1].offset, segs[1].length), (1.0, -2.0));
        assert_eq!((segs[2].offset, segs[2].length), (1.0, 2.0));
    }

    #[test]
    fn test_linear_covers_same_span_both_strands() {
        let pos = linear(&markers("a b|"), 2.0, &letters()).unwrap();
        let neg = linear(&markers("-a -b|"), 2.0, &letters()).unwrap();
        for (p, n) in pos.iter().zip(&neg) {
            assert_eq!(p.offset, n.offset + n.length);
            assert_eq!(p.offset + p.length, n.offset);
        }
    }

    #[test]
    fn test_unresolvable_color() {
        let err = linear(&markers("a z|"), 2.0, &letters()).unwrap_err();
        assert_eq!(err, Error::UnresolvableColor("z".into()));
    }
}
