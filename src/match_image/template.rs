//! Template storage and the match value type

use std::collections::HashMap;

use image::GrayImage;

use crate::types::{Point, Rect};

/// A named single-channel reference pattern, immutable once stored.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    image: GrayImage,
}

impl Template {
    pub fn new(name: impl Into<String>, image: GrayImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// One thresholded detection, produced fresh every pass.
///
/// `rect` and `position` are in screen space; `position` is the rect center.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub template_name: String,
    pub confidence: f32,
    pub position: Point,
    pub rect: Rect,
}

impl Match {
    pub fn new(template_name: impl Into<String>, confidence: f32, rect: Rect) -> Self {
        Self {
            template_name: template_name.into(),
            confidence,
            position: rect.center(),
            rect,
        }
    }
}

/// Name-keyed template map, populated out-of-band and read-only to the
/// detector. How templates reach the store (disk, embedded assets) is the
/// embedder's concern.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, Template>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template, replacing any existing entry of the same name.
    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.name().to_string(), template);
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn clear(&mut self) {
        self.templates.clear();
    }
}
