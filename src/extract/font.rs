//! Dominant body font size estimation.

use crate::model::DEFAULT_FONT_SIZE;

/// Smallest size considered body text, in points.
pub const MIN_BODY_FONT_SIZE: u32 = 8;

/// Largest size considered body text, in points.
pub const MAX_BODY_FONT_SIZE: u32 = 14;

/// Font size observations for finding the body text size.
///
/// Sizes are rounded to whole points; anything outside the body band
/// (8-14pt) is ignored so headings and footnotes cannot win.
#[derive(Debug, Clone, Default)]
pub struct FontSizeHistogram {
    /// (size, count) in first-seen order
    counts: Vec<(u32, usize)>,
    observed: usize,
}

impl FontSizeHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a font size observation.
    pub fn add(&mut self, size: f32) {
        if !size.is_finite() {
            return;
        }
        let rounded = size.round();
        if rounded < MIN_BODY_FONT_SIZE as f32 || rounded > MAX_BODY_FONT_SIZE as f32 {
            return;
        }
        let key = rounded as u32;

        self.observed += 1;
        match self.counts.iter_mut().find(|(s, _)| *s == key) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((key, 1)),
        }
    }

    /// Number of observations inside the body band.
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Most frequent size; on a tie the size seen first wins.
    /// Falls back to 11 when nothing was observed.
    pub fn dominant(&self) -> u32 {
        let mut best: Option<(u32, usize)> = None;
        for &(size, count) in &self.counts {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((size, count));
            }
        }
        best.map_or(DEFAULT_FONT_SIZE, |(size, _)| size)
    }
}

impl Extend<f32> for FontSizeHistogram {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, iter: I) {
        for size in iter {
            self.add(size);
        }
    }
}

/// Dominant body font size of a sequence of per-character sizes.
pub fn dominant_font_size<I: IntoIterator<Item = f32>>(sizes: I) -> u32 {
    let mut histogram = FontSizeHistogram::new();
    histogram.extend(sizes);
    histogram.dominant()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_font_size() {
        let mut sizes = vec![10.2_f32; 100];
        sizes.extend(std::iter::repeat(18.0).take(500));
        sizes.extend(std::iter::repeat(12.0).take(20));

        // 18pt headings are outside the band, even if more frequent
        assert_eq!(dominant_font_size(sizes), 10);
    }

    #[test]
    fn test_dominant_font_size_default() {
        assert_eq!(dominant_font_size(Vec::new()), 11);
        assert_eq!(dominant_font_size(vec![4.0, 22.0, f32::NAN]), 11);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        assert_eq!(dominant_font_size(vec![12.0, 9.0, 9.0, 12.0]), 12);
        assert_eq!(dominant_font_size(vec![9.0, 12.0, 12.0, 9.0]), 9);
    }

    #[test]
    fn test_half_sizes_round_up() {
        assert_eq!(dominant_font_size(vec![12.5]), 13);
        assert_eq!(dominant_font_size(vec![10.5, 10.5, 12.0]), 11);
        assert_eq!(dominant_font_size(vec![13.5]), 14);
    }

    #[test]
    fn test_band_edges() {
        let mut histogram = FontSizeHistogram::new();
        histogram.add(7.4);
        histogram.add(7.6);
        histogram.add(14.4);
        histogram.add(14.6);
        assert_eq!(histogram.observed(), 2);
        assert_eq!(histogram.dominant(), 8);
    }
}
