// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color classification for capture front-ends.
//!
//! Camera handling lives outside this crate. A front-end samples each of the
//! nine facelet regions of a face, averages the pixels of each region with
//! [`Hsv::mean`], and turns the averages into labels with a
//! [`ColorClassifier`]. The labels go to [`crate::state::ScanSession`].
//!
//! HSV values use the 8-bit OpenCV scale: hue 0..=180, saturation and value
//! 0..=255.

use crate::geometry::{ColorLabel, FACE_SIZE};
use crate::state::CaptureError;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Component-wise mean, truncated; `None` for no samples.
    pub fn mean(samples: &[Hsv]) -> Option<Hsv> {
        let [h, s, v] = mean_components(samples)?;
        Some(Hsv::new(h as u8, s as u8, v as u8))
    }
}

fn mean_components(samples: &[Hsv]) -> Option<[f64; 3]> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as f64;
    let mut sum = [0.0; 3];
    for sample in samples {
        sum[0] += sample.h as f64;
        sum[1] += sample.s as f64;
        sum[2] += sample.v as f64;
    }
    Some(sum.map(|x| x / n))
}

/// An inclusive box in HSV space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl HsvRange {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self {
            lower: Hsv::new(lower[0], lower[1], lower[2]),
            upper: Hsv::new(upper[0], upper[1], upper[2]),
        }
    }

    pub fn contains(&self, sample: Hsv) -> bool {
        (self.lower.h..=self.upper.h).contains(&sample.h)
            && (self.lower.s..=self.upper.s).contains(&sample.s)
            && (self.lower.v..=self.upper.v).contains(&sample.v)
    }
}

/// Maps an averaged facelet sample to a color label.
pub trait ColorClassifier {
    /// The label for `sample`, or `None` when it matches no color.
    fn classify(&self, sample: Hsv) -> Option<ColorLabel>;

    /// Classify the nine facelet samples of one face, in row-major order.
    fn classify_face(&self, samples: &[Hsv; FACE_SIZE]) -> [Option<ColorLabel>; FACE_SIZE] {
        samples.map(|sample| self.classify(sample))
    }
}

/// Classifies by fixed HSV ranges, one per color, tried in label order
/// W, R, O, Y, G, B; the first range containing the sample wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRangeClassifier {
    ranges: [HsvRange; ColorLabel::COUNT],
}

const DEFAULT_RANGES: [HsvRange; ColorLabel::COUNT] = [
    HsvRange::new([0, 0, 200], [180, 30, 255]),     // W
    HsvRange::new([0, 100, 100], [10, 255, 255]),   // R
    HsvRange::new([10, 100, 100], [25, 255, 255]),  // O
    HsvRange::new([25, 100, 100], [35, 255, 255]),  // Y
    HsvRange::new([35, 100, 100], [85, 255, 255]),  // G
    HsvRange::new([85, 100, 100], [125, 255, 255]), // B
];

const HUE_MAX: f64 = 180.0;
const HUE_MARGIN: f64 = 10.0;
const SV_MARGIN: f64 = 50.0;

impl HsvRangeClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(&self, color: ColorLabel) -> HsvRange {
        self.ranges[color.as_usize()]
    }

    pub fn set_range(&mut self, color: ColorLabel, range: HsvRange) {
        self.ranges[color.as_usize()] = range;
    }

    /// Replace the range for `color` with a box around the mean of `samples`:
    /// hue ±10 clamped to 0..=180, saturation and value ±50 clamped to
    /// 0..=255.
    pub fn calibrate(
        &mut self,
        color: ColorLabel,
        samples: &[Hsv],
    ) -> Result<HsvRange, CaptureError> {
        let [h, s, v] = mean_components(samples).ok_or(CaptureError::NoSamples { color })?;
        let clamp = |x: f64, max: f64| x.clamp(0.0, max) as u8;
        let range = HsvRange {
            lower: Hsv::new(
                clamp(h - HUE_MARGIN, HUE_MAX),
                clamp(s - SV_MARGIN, 255.0),
                clamp(v - SV_MARGIN, 255.0),
            ),
            upper: Hsv::new(
                clamp(h + HUE_MARGIN, HUE_MAX),
                clamp(s + SV_MARGIN, 255.0),
                clamp(v + SV_MARGIN, 255.0),
            ),
        };
        log::info!(
            "calibrated {}: [{}, {}, {}] - [{}, {}, {}]",
            color,
            range.lower.h,
            range.lower.s,
            range.lower.v,
            range.upper.h,
            range.upper.s,
            range.upper.v
        );
        self.set_range(color, range);
        Ok(range)
    }
}

impl Default for HsvRangeClassifier {
    fn default() -> Self {
        Self {
            ranges: DEFAULT_RANGES,
        }
    }
}

impl ColorClassifier for HsvRangeClassifier {
    fn classify(&self, sample: Hsv) -> Option<ColorLabel> {
        ColorLabel::iter().find(|&color| self.range(color).contains(sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColorLabel::*;

    #[test]
    fn test_default_ranges() {
        let classifier = HsvRangeClassifier::new();
        assert_eq!(classifier.classify(Hsv::new(90, 10, 240)), Some(W));
        assert_eq!(classifier.classify(Hsv::new(5, 200, 180)), Some(R));
        assert_eq!(classifier.classify(Hsv::new(18, 200, 200)), Some(O));
        assert_eq!(classifier.classify(Hsv::new(30, 200, 200)), Some(Y));
        assert_eq!(classifier.classify(Hsv::new(60, 200, 150)), Some(G));
        assert_eq!(classifier.classify(Hsv::new(110, 200, 150)), Some(B));
    }

    #[test]
    fn test_first_match_wins_and_unknowns() {
        let classifier = HsvRangeClassifier::new();
        // Hue 10 is in both R and O.
        assert_eq!(classifier.classify(Hsv::new(10, 200, 200)), Some(R));
        // Dark, unsaturated: nothing.
        assert_eq!(classifier.classify(Hsv::new(90, 50, 50)), None);
        // Purple hue beyond blue.
        assert_eq!(classifier.classify(Hsv::new(150, 200, 200)), None);
    }

    #[test]
    fn test_classify_face() {
        let classifier = HsvRangeClassifier::new();
        let mut samples = [Hsv::new(60, 200, 150); FACE_SIZE];
        samples[4] = Hsv::new(150, 200, 200);
        let labels = classifier.classify_face(&samples);
        assert_eq!(labels[0], Some(G));
        assert_eq!(labels[4], None);
    }

    #[test]
    fn test_mean() {
        let samples = [Hsv::new(10, 100, 200), Hsv::new(11, 101, 201)];
        assert_eq!(Hsv::mean(&samples), Some(Hsv::new(10, 100, 200)));
        assert_eq!(Hsv::mean(&[]), None);
    }

    #[test]
    fn test_calibrate_clamps() {
        let mut classifier = HsvRangeClassifier::new();
        let range = classifier
            .calibrate(R, &[Hsv::new(4, 230, 220), Hsv::new(6, 250, 240)])
            .unwrap();
        assert_eq!(range, HsvRange::new([0, 190, 180], [15, 255, 255]));
        assert_eq!(classifier.range(R), range);

        let range = classifier.calibrate(B, &[Hsv::new(175, 20, 30)]).unwrap();
        assert_eq!(range, HsvRange::new([165, 0, 0], [180, 70, 80]));
    }

    #[test]
    fn test_calibrate_without_samples() {
        let mut classifier = HsvRangeClassifier::new();
        assert_eq!(
            classifier.calibrate(G, &[]),
            Err(CaptureError::NoSamples { color: G })
        );
        assert_eq!(classifier, HsvRangeClassifier::default());
    }
}
