//! Brightness-to-character mapping
//!
//! A palette is an ordered list of bands running from least to most
//! visually dense; the band index is floor(brightness * (N - 1)). Each band
//! holds a few glyphs of similar weight, and the mapper either always takes
//! the first (deterministic) or picks one with a seeded RNG for texture.
//! The monotone density ordering is what makes the mapping meaningful, so
//! it is treated as a correctness invariant rather than styling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// The default 10-band density ramp, blank through block glyphs
pub const DEFAULT_BANDS: [&str; 10] = [
    " ", ".`'", ":;,", "-~+", "<>!i", "=*xc", "onua", "%&#", "XNM8", "@█",
];

/// Error type for palette construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// A palette needs at least one band
    EmptyPalette,
    /// Band at this index holds no glyphs
    EmptyBand(usize),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => write!(f, "Palette has no bands"),
            PaletteError::EmptyBand(index) => write!(f, "Palette band {} has no glyphs", index),
        }
    }
}

impl std::error::Error for PaletteError {}

/// An ordered list of glyph bands indexed by brightness
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    bands: Vec<Vec<char>>,
}

impl Palette {
    /// Build a palette from band strings, least dense first
    pub fn new(bands: &[&str]) -> Result<Self, PaletteError> {
        if bands.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        let bands: Vec<Vec<char>> = bands.iter().map(|band| band.chars().collect()).collect();
        for (index, band) in bands.iter().enumerate() {
            if band.is_empty() {
                return Err(PaletteError::EmptyBand(index));
            }
        }
        Ok(Self { bands })
    }

    #[inline]
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// The band index for a brightness in [0, 1]: floor(b * (N - 1)),
    /// clamped so out-of-range input still lands on a real band
    pub fn band_index(&self, brightness: f32) -> usize {
        let top = self.bands.len() - 1;
        let index = (brightness * top as f32).floor();
        (index.max(0.0) as usize).min(top)
    }

    #[inline]
    pub(crate) fn band(&self, index: usize) -> &[char] {
        &self.bands[index]
    }

    /// Whether a glyph appears anywhere in the palette
    pub fn contains(&self, glyph: char) -> bool {
        self.bands.iter().any(|band| band.contains(&glyph))
    }
}

impl Default for Palette {
    fn default() -> Self {
        // DEFAULT_BANDS is statically non-empty, so this cannot fail
        Self {
            bands: DEFAULT_BANDS.iter().map(|band| band.chars().collect()).collect(),
        }
    }
}

/// Maps coverage brightness onto palette glyphs.
///
/// With no RNG the first glyph of each band is used, making output
/// bit-for-bit reproducible. Texture variation comes from a seeded
/// [`StdRng`] so tests can pin exact frames while the driver may seed from
/// entropy.
#[derive(Clone, Debug)]
pub struct GlyphMapper {
    palette: Palette,
    rng: Option<StdRng>,
}

impl GlyphMapper {
    /// Deterministic mapper: first glyph per band
    pub fn new(palette: Palette) -> Self {
        Self { palette, rng: None }
    }

    /// Textured mapper with a fixed seed
    pub fn with_seed(palette: Palette, seed: u64) -> Self {
        Self { palette, rng: Some(StdRng::seed_from_u64(seed)) }
    }

    /// Textured mapper seeded from system entropy
    pub fn with_entropy(palette: Palette) -> Self {
        Self { palette, rng: Some(StdRng::from_entropy()) }
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The glyph for a brightness in [0, 1]
    pub fn glyph_for(&mut self, brightness: f32) -> char {
        let band = self.palette.band(self.palette.band_index(brightness));
        match self.rng.as_mut() {
            Some(rng) if band.len() > 1 => band[rng.gen_range(0..band.len())],
            _ => band[0],
        }
    }
}
