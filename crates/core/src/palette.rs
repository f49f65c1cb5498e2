use std::collections::HashMap;
use std::fmt;

use rand::Rng;

use crate::error::Error;

/// Prefix of generated color names: gene `12` is drawn with `gene12`.
pub const COLOR_PREFIX: &str = "gene";
pub const DEFAULT_FIRST_COLOR: usize = 1;
pub const DEFAULT_COLOR_COUNT: usize = 99;
/// Palette size and first index emitted by `generate_palette` callers by default.
pub const DEFAULT_PALETTE_START: usize = 10;
pub const DEFAULT_PALETTE_SIZE: usize = 90;

/// Lookup from gene identifier to a color name defined by the enclosing document.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMap {
    colors: HashMap<String, String>,
}

impl ColorMap {
    /// Map `count` identifiers from `first` on to `gene{first}..`.
    pub fn numbered(first: usize, count: usize) -> Self {
        let colors = indices(first, count)
            .map(|i| (i.to_string(), format!("{COLOR_PREFIX}{i}")))
            .collect();
        Self { colors }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let colors = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { colors }
    }

    pub fn get(&self, gene: &str) -> Result<&str, Error> {
        self.colors
            .get(gene)
            .map(String::as_str)
            .ok_or_else(|| Error::UnresolvableColor(gene.to_string()))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::numbered(DEFAULT_FIRST_COLOR, DEFAULT_COLOR_COUNT)
    }
}

/// One random RGB color, channels in [0, 1).
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteEntry {
    pub index: usize,
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl fmt::Display for PaletteEntry {
    /// LaTeX `xcolor` definition, e.g. `\definecolor{gene10}{rgb}{0.12,0.5,0.057}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\\definecolor{{{COLOR_PREFIX}{}}}{{rgb}}{{{},{},{}}}",
            self.index,
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// Two significant digits, trailing zeros dropped but at least one decimal kept
/// (`0.5`, `0.057`, `1.0`); exponent form below 1e-4 (`1.2e-05`).
fn channel(v: f64) -> String {
    if v == 0.0 {
        return "0.0".to_string();
    }
    let sci = format!("{v:.1e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..2).contains(&exp) {
        let decimals = (1 - exp).max(0) as usize;
        let fixed = format!("{v:.decimals$}");
        let trimmed = fixed.trim_end_matches('0');
        if trimmed.ends_with('.') {
            format!("{trimmed}0")
        } else {
            trimmed.to_string()
        }
    } else {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

/// `count` consecutive indices from `start`, stopping at `usize::MAX`.
fn indices(start: usize, count: usize) -> impl Iterator<Item = usize> {
    (0..count).map_while(move |k| start.checked_add(k))
}

/// Draw `count` random colors indexed from `start`.
pub fn generate_palette<R: Rng>(
    rng: &mut R,
    start: usize,
    count: usize,
) -> Vec<PaletteEntry> {
    indices(start, count)
        .map(|index| PaletteEntry {
            index,
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_map_range() {
        let colors = ColorMap::default();
        assert_eq!(colors.len(), 99);
        assert_eq!(colors.get("1").unwrap(), "gene1");
        assert_eq!(colors.get("99").unwrap(), "gene99");
        assert_eq!(
            colors.get("100"),
            Err(Error::UnresolvableColor("100".into()))
        );
        assert!(colors.get("a").is_err());
    }

    #[test]
    fn test_from_pairs() {
        let colors = ColorMap::from_pairs([("a", "red"), ("b", "blue")]);
        assert_eq!(colors.get("b").unwrap(), "blue");
    }

    #[test]
    fn test_palette_indices() {
        let mut rng = StdRng::seed_from_u64(7);
        let palette = generate_palette(&mut rng, DEFAULT_PALETTE_START, DEFAULT_PALETTE_SIZE);
        assert_eq!(palette.len(), 90);
        assert_eq!(palette[0].index, 10);
        assert_eq!(palette[89].index, 99);
        for e in &palette {
            for c in [e.r, e.g, e.b] {
                assert!((0.0..1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_palette_seeded_is_reproducible() {
        let a = generate_palette(&mut StdRng::seed_from_u64(3), 1, 5);
        let b = generate_palette(&mut StdRng::seed_from_u64(3), 1, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_definecolor_format() {
        let e = PaletteEntry {
            index: 12,
            r: 0.5,
            g: 0.126,
            b: 0.0,
        };
        assert_eq!(e.to_string(), r"\definecolor{gene12}{rgb}{0.5,0.13,0.0}");
    }

    #[test]
    fn test_channel_significant_digits() {
        assert_eq!(channel(0.5), "0.5");
        assert_eq!(channel(0.0567), "0.057");
        assert_eq!(channel(0.12), "0.12");
        assert_eq!(channel(0.0999), "0.1");
        assert_eq!(channel(0.999), "1.0");
        assert_eq!(channel(0.00012), "0.00012");
        assert_eq!(channel(0.00001234), "1.2e-05");
        assert_eq!(channel(0.00001), "1e-05");
    }

    #[test]
    fn test_numbered_stops_at_max_index() {
        let colors = ColorMap::numbered(usize::MAX, 2);
        assert_eq!(colors.len(), 1);
        let max = usize::MAX.to_string();
        assert_eq!(colors.get(&max).unwrap(), format!("gene{max}"));
        assert!(ColorMap::numbered(5, 0).is_empty());
    }

    #[test]
    fn test_palette_stops_at_max_index() {
        let palette = generate_palette(&mut StdRng::seed_from_u64(1), usize::MAX, 2);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].index, usize::MAX);
    }
}
