//! Slide carousel: position state, swipe tracking and the controller that
//! drives a [`CarouselHost`].
//!
//! The controller never wraps around. At the first and last slide the
//! corresponding navigation control is disabled instead.

/// Horizontal distance a touch has to travel before it counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 40.0;

/// Label template for generated indicators, `{}` is the 1-based position.
pub const INDICATOR_LABEL_TEMPLATE: &str = "Go to review {}";

/// Clamped slide position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    slide_count: usize,
    current: usize,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current: 0,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Clamp `target` into `[0, slide_count - 1]` and make it current.
    ///
    /// Returns the new index. With zero slides the index stays at 0.
    pub fn go_to(&mut self, target: i64) -> usize {
        let last = self.slide_count.saturating_sub(1) as i64;
        self.current = target.clamp(0, last) as usize;
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        // Zero slides never reports `last`; a single slide is both first and last.
        self.slide_count > 0 && self.current == self.slide_count - 1
    }

    /// Everything the host needs to paint the current position.
    pub fn view(&self) -> CarouselView {
        CarouselView {
            transform: track_transform(self.current),
            prev_disabled: self.is_first(),
            next_disabled: self.is_last(),
            current: self.current,
        }
    }
}

/// Snapshot produced by a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub transform: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub current: usize,
}

/// CSS transform that brings slide `index` into view.
pub fn track_transform(index: usize) -> String {
    format!("translateX(-{}%)", index * 100)
}

pub fn indicator_label(index: usize) -> String {
    INDICATOR_LABEL_TEMPLATE.replacen("{}", &(index + 1).to_string(), 1)
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value. Anything but the arrows is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    fn delta(self) -> i64 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// Tracks one touch gesture and reports a swipe once it travels far enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    origin: Option<f64>,
    threshold: f64,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            origin: None,
            threshold,
        }
    }

    pub fn start(&mut self, x: f64) {
        self.origin = Some(x);
    }

    /// Feed a move event. Returns the slide step once the drag exceeds the
    /// threshold: dragging left (`dx < 0`) advances, dragging right goes back.
    /// The origin is cleared on a hit, so the rest of the gesture is inert
    /// until the next touch start.
    pub fn track(&mut self, x: f64) -> Option<i64> {
        let origin = self.origin?;
        let dx = x - origin;
        if dx.abs() <= self.threshold {
            return None;
        }
        self.origin = None;
        Some(if dx < 0.0 { 1 } else { -1 })
    }
}

/// Page surface a carousel paints onto.
///
/// Optional controls (prev/next, the indicator container) are the host's
/// business: a host without them simply ignores the matching calls.
pub trait CarouselHost {
    /// Number of slides currently in the track.
    fn slide_count(&self) -> usize;

    fn set_track_transform(&mut self, transform: &str);

    fn set_prev_disabled(&mut self, disabled: bool);

    fn set_next_disabled(&mut self, disabled: bool);

    /// Create the indicator for slide `index`. Returns `false` if the host
    /// has nowhere to put indicators.
    fn add_indicator(&mut self, index: usize, label: &str, current: bool) -> bool;

    fn set_indicator_current(&mut self, index: usize, current: bool);
}

/// Owns carousel state and keeps a host in sync with it.
#[derive(Debug)]
pub struct CarouselController<H> {
    host: H,
    state: CarouselState,
    swipe: SwipeTracker,
    indicators: usize,
}

impl<H: CarouselHost> CarouselController<H> {
    /// Build the controller, create indicators and paint the first slide.
    ///
    /// `None` means the page has no track: nothing is created and nothing
    /// on the page is touched.
    pub fn attach(host: Option<H>) -> Option<Self> {
        Self::attach_with_threshold(host, SWIPE_THRESHOLD_PX)
    }

    pub fn attach_with_threshold(host: Option<H>, swipe_threshold: f64) -> Option<Self> {
        let mut host = host?;
        let state = CarouselState::new(host.slide_count());

        let mut indicators = 0;
        for index in 0..state.slide_count() {
            if !host.add_indicator(index, &indicator_label(index), index == 0) {
                break;
            }
            indicators += 1;
        }
        tracing::debug!(slides = state.slide_count(), indicators, "carousel attached");

        let mut controller = Self {
            host,
            state,
            swipe: SwipeTracker::with_threshold(swipe_threshold),
            indicators,
        };
        controller.render();
        Some(controller)
    }

    pub fn current(&self) -> usize {
        self.state.current()
    }

    pub fn slide_count(&self) -> usize {
        self.state.slide_count()
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Jump to `target`, clamped to the slide range, and repaint.
    pub fn go_to(&mut self, target: i64) -> usize {
        let index = self.state.go_to(target);
        tracing::debug!(target, index, "carousel go_to");
        self.render();
        index
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.state.current() as i64 - 1)
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.state.current() as i64 + 1)
    }

    /// Global keyboard channel. Returns whether the key was handled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match NavKey::from_key(key) {
            Some(nav) => {
                self.go_to(self.state.current() as i64 + nav.delta());
                true
            },
            None => false,
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.start(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        if let Some(delta) = self.swipe.track(x) {
            self.go_to(self.state.current() as i64 + delta);
        }
    }

    /// Paint the current position: track offset, nav disabled flags and the
    /// single current indicator.
    pub fn render(&mut self) {
        let view = self.state.view();
        self.host.set_track_transform(&view.transform);
        self.host.set_prev_disabled(view.prev_disabled);
        self.host.set_next_disabled(view.next_disabled);
        for index in 0..self.indicators {
            self.host
                .set_indicator_current(index, index == view.current);
        }
    }
}
