use std::{cell::RefCell, rc::Rc};

use page_widgets_shared::{config::CarouselSelectors, CarouselController, CarouselHost};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, TouchEvent};

use crate::dom::{self, listen, listen_passive, set_flag_attribute};

type SharedCarousel = Rc<RefCell<CarouselController<DomCarousel>>>;

/// Carousel host backed by the page's review markup.
pub struct DomCarousel {
    document: Document,
    track: HtmlElement,
    prev: Option<Element>,
    next: Option<Element>,
    dots_wrap: Option<Element>,
    dots: Vec<Element>,
}

impl DomCarousel {
    /// Look up the carousel markup. `None` when the page has no track.
    pub fn find(document: &Document, selectors: &CarouselSelectors) -> Option<Self> {
        let track = dom::query(document, &selectors.track)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self {
            document: document.clone(),
            track,
            prev: dom::query(document, &selectors.prev),
            next: dom::query(document, &selectors.next),
            dots_wrap: dom::query(document, &selectors.indicators),
            dots: Vec::new(),
        })
    }
}

impl CarouselHost for DomCarousel {
    fn slide_count(&self) -> usize {
        self.track.child_element_count() as usize
    }

    fn set_track_transform(&mut self, transform: &str) {
        let _ = self.track.style().set_property("transform", transform);
    }

    fn set_prev_disabled(&mut self, disabled: bool) {
        if let Some(prev) = &self.prev {
            set_flag_attribute(prev, "disabled", disabled);
        }
    }

    fn set_next_disabled(&mut self, disabled: bool) {
        if let Some(next) = &self.next {
            set_flag_attribute(next, "disabled", disabled);
        }
    }

    fn add_indicator(&mut self, _index: usize, label: &str, current: bool) -> bool {
        let Some(wrap) = &self.dots_wrap else {
            return false;
        };
        let Ok(dot) = self.document.create_element("button") else {
            return false;
        };
        let _ = dot.set_attribute("type", "button");
        let _ = dot.set_attribute("aria-label", label);
        if current {
            let _ = dot.set_attribute("aria-current", "true");
        }
        if wrap.append_child(&dot).is_err() {
            return false;
        }
        self.dots.push(dot);
        true
    }

    fn set_indicator_current(&mut self, index: usize, current: bool) {
        let Some(dot) = self.dots.get(index) else {
            return;
        };
        let _ = if current {
            dot.set_attribute("aria-current", "true")
        } else {
            dot.remove_attribute("aria-current")
        };
    }
}

/// Attach the review carousel, if the page has one, and wire its inputs.
pub fn mount(document: &Document, selectors: &CarouselSelectors) {
    let host = DomCarousel::find(document, selectors);
    let Some(controller) = CarouselController::attach_with_threshold(host, selectors.swipe_threshold)
    else {
        return;
    };
    let carousel: SharedCarousel = Rc::new(RefCell::new(controller));

    bind_indicators(&carousel);
    bind_nav_buttons(&carousel);
    bind_keyboard(document, &carousel);
    bind_touch(&carousel);
}

fn bind_indicators(carousel: &SharedCarousel) {
    let dots = carousel.borrow().host().dots.clone();
    for (index, dot) in dots.iter().enumerate() {
        let carousel = carousel.clone();
        listen(dot, "click", move |_| {
            carousel.borrow_mut().go_to(index as i64);
        });
    }
}

fn bind_nav_buttons(carousel: &SharedCarousel) {
    let (prev, next) = {
        let controller = carousel.borrow();
        (controller.host().prev.clone(), controller.host().next.clone())
    };
    if let Some(prev) = prev {
        let carousel = carousel.clone();
        listen(&prev, "click", move |_| {
            carousel.borrow_mut().prev();
        });
    }
    if let Some(next) = next {
        let carousel = carousel.clone();
        listen(&next, "click", move |_| {
            carousel.borrow_mut().next();
        });
    }
}

// Arrow keys anywhere on the page drive the carousel, focused or not.
fn bind_keyboard(document: &Document, carousel: &SharedCarousel) {
    let carousel = carousel.clone();
    listen(document, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            carousel.borrow_mut().handle_key(&event.key());
        }
    });
}

fn first_touch_x(event: &web_sys::Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

fn bind_touch(carousel: &SharedCarousel) {
    let track = carousel.borrow().host().track.clone();
    {
        let carousel = carousel.clone();
        listen_passive(&track, "touchstart", move |event| {
            if let Some(x) = first_touch_x(&event) {
                carousel.borrow_mut().touch_start(x);
            }
        });
    }
    let carousel = carousel.clone();
    listen_passive(&track, "touchmove", move |event| {
        if let Some(x) = first_touch_x(&event) {
            carousel.borrow_mut().touch_move(x);
        }
    });
}
