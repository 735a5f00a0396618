//! Marker detection over captured frames

use image::GrayImage;
use imageproc::template_matching::{MatchTemplateMethod, match_template_parallel};
use log::debug;
use tokio::sync::mpsc;

use super::config::MatchConfig;
use super::template::{Match, Template, TemplateStore};
use crate::errors::VisionError;
use crate::events::{DetectionEvent, EventSubscribers};
use crate::sources::FrameSource;
use crate::types::Rect;

/// Outcome of one matching pass. Per-template failures accumulate alongside
/// whatever valid matches the pass still produced; partial success is the
/// norm.
#[derive(Debug, Clone, Default)]
pub struct DetectionReport {
    pub matches: Vec<Match>,
    pub failures: Vec<VisionError>,
    pub processing_time_ms: u128,
}

impl DetectionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn best_match(&self) -> Option<&Match> {
        self.matches.iter().max_by(|a, b| {
            a.confidence
                .partial_cmp(&b.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Whether the pass failed at the frame level rather than per-template.
    pub fn frame_failed(&self) -> bool {
        self.failures
            .iter()
            .any(|f| matches!(f, VisionError::FrameUnavailable { .. }))
    }
}

/// Finds loaded templates inside captured frames via normalized
/// cross-correlation.
pub struct MarkerDetector {
    store: TemplateStore,
    config: MatchConfig,
    subscribers: EventSubscribers,
}

impl MarkerDetector {
    pub fn new(store: TemplateStore, config: MatchConfig) -> Self {
        Self {
            store,
            config,
            subscribers: EventSubscribers::new(),
        }
    }

    /// Register an observer for match-found / match-failed events.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<DetectionEvent> {
        self.subscribers.subscribe()
    }

    /// Scan one captured frame for every template in `names`.
    ///
    /// An unknown name records a `TemplateNotFound` failure and the batch
    /// continues. A failed capture records `FrameUnavailable` and yields an
    /// empty match set; transient capture glitches degrade the pass, never
    /// abort the caller's loop. Matches are returned sorted by confidence
    /// descending, before any suppression.
    pub fn find_matches(
        &mut self,
        source: &dyn FrameSource,
        names: &[&str],
        confidence_threshold: f32,
    ) -> DetectionReport {
        let start = std::time::Instant::now();
        let mut report = DetectionReport::new();

        let Some(frame) = source.capture() else {
            let err = VisionError::FrameUnavailable {
                reason: "capture returned no frame".to_string(),
            };
            self.subscribers.emit(DetectionEvent::MatchFailed {
                template: None,
                reason: err.to_string(),
            });
            report.failures.push(err);
            report.processing_time_ms = start.elapsed().as_millis();
            return report;
        };
        let dpi_scale = source.dpi_scale();

        for &name in names {
            let scanned = match self.store.get(name) {
                Some(template) => Ok(scan_template(
                    &frame,
                    template,
                    confidence_threshold,
                    dpi_scale,
                )),
                None => Err(VisionError::TemplateNotFound {
                    name: name.to_string(),
                }),
            };
            match scanned {
                Ok(found) => {
                    debug!("template '{name}': {} candidate(s)", found.len());
                    for m in &found {
                        self.subscribers.emit(DetectionEvent::MatchFound(m.clone()));
                    }
                    report.matches.extend(found);
                }
                Err(err) => {
                    self.subscribers.emit(DetectionEvent::MatchFailed {
                        template: Some(name.to_string()),
                        reason: err.to_string(),
                    });
                    report.failures.push(err);
                }
            }
        }

        report.matches.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        report.processing_time_ms = start.elapsed().as_millis();
        report
    }

    /// Scan using the configured confidence threshold.
    pub fn find_matches_default(
        &mut self,
        source: &dyn FrameSource,
        names: &[&str],
    ) -> DetectionReport {
        self.find_matches(source, names, self.config.confidence_threshold)
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TemplateStore {
        &mut self.store
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn update_config(&mut self, config: MatchConfig) {
        self.config = config;
    }
}

/// Score one template across the frame and collect every location at or
/// above `threshold`. Raw frame offsets and the template-sized box are
/// scaled by the capture DPI factor into screen space.
fn scan_template(
    frame: &GrayImage,
    template: &Template,
    threshold: f32,
    dpi_scale: f32,
) -> Vec<Match> {
    let (tw, th) = (template.width(), template.height());
    if tw == 0 || th == 0 || tw > frame.width() || th > frame.height() {
        debug!(
            "skipping template '{}': {tw}x{th} does not fit {}x{} frame",
            template.name(),
            frame.width(),
            frame.height()
        );
        return Vec::new();
    }

    let scores = match_template_parallel(
        frame,
        template.image(),
        MatchTemplateMethod::CrossCorrelationNormalized,
    );
    let scale = if dpi_scale > 0.0 { dpi_scale as f64 } else { 1.0 };

    let mut matches = Vec::new();
    for (x, y, pixel) in scores.enumerate_pixels() {
        let score = pixel[0];
        // NaN scores (all-zero patches) fail this comparison and drop out
        if score >= threshold {
            let rect = Rect::new(
                (x as f64 * scale).round() as i32,
                (y as f64 * scale).round() as i32,
                (tw as f64 * scale).round() as u32,
                (th as f64 * scale).round() as u32,
            );
            matches.push(Match::new(
                template.name(),
                score.clamp(0.0, 1.0),
                rect,
            ));
        }
    }
    matches
}
