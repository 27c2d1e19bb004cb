// Helpers shared by the integration tests; not every binary uses all of them.
#![allow(dead_code, reason = "each test binary uses a different subset")]

use page_widgets_shared::carousel::CarouselHost;

/// Host that records every mutation the controller makes.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub slides: usize,
    pub has_dots: bool,
    pub transform: Option<String>,
    pub prev_disabled: Option<bool>,
    pub next_disabled: Option<bool>,
    pub indicators: Vec<(String, bool)>,
    pub mutations: usize,
}

impl RecordingHost {
    pub fn with_slides(slides: usize) -> Self {
        Self {
            slides,
            has_dots: true,
            ..Self::default()
        }
    }

    pub fn current_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, (_, current))| *current)
            .map(|(index, _)| index)
            .collect()
    }
}

impl CarouselHost for RecordingHost {
    fn slide_count(&self) -> usize {
        self.slides
    }

    fn set_track_transform(&mut self, transform: &str) {
        self.mutations += 1;
        self.transform = Some(transform.to_string());
    }

    fn set_prev_disabled(&mut self, disabled: bool) {
        self.mutations += 1;
        self.prev_disabled = Some(disabled);
    }

    fn set_next_disabled(&mut self, disabled: bool) {
        self.mutations += 1;
        self.next_disabled = Some(disabled);
    }

    fn add_indicator(&mut self, _index: usize, label: &str, current: bool) -> bool {
        if !self.has_dots {
            return false;
        }
        self.mutations += 1;
        self.indicators.push((label.to_string(), current));
        true
    }

    fn set_indicator_current(&mut self, index: usize, current: bool) {
        self.mutations += 1;
        self.indicators[index].1 = current;
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("page_widgets_shared=debug")
        .with_test_writer()
        .try_init();
}
