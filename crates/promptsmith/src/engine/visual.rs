//! Visual Elements Extractor
//!
//! Reads one image's color summary and OCR text. Callers pass only the
//! first image of a request.

use crate::domain::entities::{ImageData, VisualElements};
use crate::engine::config::{KeywordGroup, VisualConfig};

pub fn extract(image: &ImageData, config: &VisualConfig) -> VisualElements {
    let mut visual = VisualElements::default();

    if let [r, g, b, ..] = image.dominant_colors.as_slice() {
        visual
            .colors
            .push(format!("rgb({}, {}, {})", r.mean, g.mean, b.mean));
    }

    if !image.ocr_text.is_empty() {
        let ocr = image.ocr_text.to_lowercase();
        visual.design_style = first_group(&ocr, &config.styles);
        visual.layout = first_group(&ocr, &config.layouts);
        visual.components = config
            .components
            .iter()
            .filter(|c| ocr.contains(c.as_str()))
            .cloned()
            .collect();
    }

    visual
}

fn first_group<T: Copy>(ocr: &str, groups: &[KeywordGroup<T>]) -> Option<T> {
    groups
        .iter()
        .find(|g| g.keywords.iter().any(|k| ocr.contains(k.as_str())))
        .map(|g| g.value)
}
