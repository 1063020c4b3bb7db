use crate::animator::WebAnimator;
use crate::constants::*;
use crate::{dom, input, style};
use backdrop_core::reveal::{self, Journey, SectionHeader, Slide, SplitText, StatItem};
use backdrop_core::HorizontalTrack;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn split_texts_in(root: &web::Element) -> Vec<SplitText<web::HtmlElement>> {
    dom::query_all_in(root, SEL_SPLIT_TEXT)
        .into_iter()
        .map(|text| SplitText {
            lines: dom::query_all_in(&text, SEL_LINE),
            root: text,
        })
        .collect()
}

fn collect_slide(root: web::HtmlElement) -> Slide<web::HtmlElement> {
    Slide {
        texts: split_texts_in(&root),
        extras: dom::query_all_in(&root, SEL_SLIDE_EXTRAS),
        root,
    }
}

struct TrackState {
    wrapper: web::HtmlElement,
    container: web::HtmlElement,
    slides: Vec<Slide<web::HtmlElement>>,
    track: HorizontalTrack,
    active: Option<usize>,
}

impl TrackState {
    /// Re-read viewport and content sizes and size the wrapper so the
    /// sticky container stays pinned for the whole track.
    fn measure(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        self.track.viewport = dom::viewport_size(&window);
        self.track.content_width = self.container.scroll_width() as f32;
        let wrapper_css = self.wrapper.style();
        _ = wrapper_css.set_property("height", &format!("{}px", self.track.pinned_height()));
        let container_css = self.container.style();
        _ = container_css.set_property("position", "sticky");
        _ = container_css.set_property("top", "0px");
        log::info!(
            "[scroll] track: {} slides, pinned for {:.0}px",
            self.track.slide_count,
            self.track.scroll_distance()
        );
    }

    fn update(&mut self, animator: &WebAnimator) {
        let top = self.wrapper.get_bounding_client_rect().top();
        let progress = self.track.progress(input::scrolled_past(top));
        _ = self
            .container
            .style()
            .set_property("transform", &style::translate_x_value(self.track.translate_x(progress)));
        let index = self.track.slide_index(progress);
        if index != self.active {
            self.active = index;
            if let Some(slide) = index.and_then(|i| self.slides.get(i)) {
                reveal::reveal_active_slide(animator, slide);
            }
        }
    }
}

/// Pin the slide track and translate it horizontally with vertical scroll.
/// Returns the re-measure hook run after resizes.
pub fn init_horizontal_scroll(
    document: &web::Document,
    animator: WebAnimator,
) -> Option<Rc<dyn Fn()>> {
    let wrapper = dom::query_one(document, SEL_TRACK_WRAPPER)?;
    let container = dom::query_one(document, SEL_TRACK_CONTAINER)?;
    let slides: Vec<_> = dom::query_all(document, SEL_SLIDE)
        .into_iter()
        .map(collect_slide)
        .collect();
    if slides.is_empty() {
        return None;
    }

    reveal::reveal_first_slide(&animator, &slides[0]);
    let track = HorizontalTrack::new(slides.len(), glam::Vec2::ZERO, 0.0);
    let state = Rc::new(RefCell::new(TrackState {
        wrapper,
        container,
        slides,
        track,
        // The first slide is already handled above.
        active: Some(0),
    }));
    state.borrow_mut().measure();
    state.borrow_mut().update(&animator);

    let state_scroll = state.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        state_scroll.borrow_mut().update(&animator);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    on_scroll.forget();

    let refresh: Rc<dyn Fn()> = Rc::new(move || {
        let mut s = state.borrow_mut();
        s.measure();
        s.update(&animator);
    });
    Some(refresh)
}

pub fn init_vertical_animations(document: &web::Document, animator: WebAnimator) {
    let cards = dom::query_all(document, SEL_SERVICE_CARD);
    reveal::reveal_service_cards(&animator, &cards);

    if let Some(section) = dom::query_one(document, SEL_JOURNEY_SECTION) {
        let journey = Journey {
            section,
            cards: dom::query_all(document, SEL_JOURNEY_CARD),
            connector: dom::query_one(document, SEL_JOURNEY_CONNECTOR),
        };
        reveal::reveal_journey(&animator, &journey);
    }

    let stats = collect_stats(document);
    reveal::reveal_stats(&animator, &stats);

    let headers: Vec<_> = dom::query_all(document, SEL_SECTION_HEADERS)
        .into_iter()
        .map(|root| SectionHeader {
            texts: split_texts_in(&root),
            root,
        })
        .collect();
    reveal::reveal_headers(&animator, &headers);
    log::info!(
        "[reveal] {} cards, {} stats, {} headers",
        cards.len(),
        stats.len(),
        headers.len()
    );
}

fn collect_stats(document: &web::Document) -> Vec<StatItem<web::HtmlElement>> {
    dom::query_all(document, SEL_STAT_ITEM)
        .into_iter()
        .filter_map(|root| {
            let number = dom::query_all_in(&root, SEL_STAT_NUMBER).into_iter().next()?;
            let target = number
                .get_attribute(COUNT_ATTR)
                .and_then(|raw| reveal::parse_count(&raw));
            Some(StatItem {
                root,
                number,
                target,
            })
        })
        .collect()
}

/// Compact layouts skip all scroll choreography: show every reveal target
/// at once and light the journey connector.
pub fn show_all_elements(document: &web::Document) {
    let mut shown = 0;
    for selector in COMPACT_SHOW_NOW {
        let elements = dom::query_all(document, selector);
        shown += elements.len();
        elements.iter().for_each(dom::show_now);
    }
    if let Some(connector) = dom::query_one(document, SEL_JOURNEY_CONNECTOR) {
        _ = connector
            .class_list()
            .add_1(reveal::CONNECTOR_ACTIVE_CLASS);
    }
    log::info!("[reveal] compact layout: {} elements shown", shown);
}

/// Write final stat values without counting.
pub fn init_stat_counters(document: &web::Document) {
    for item in collect_stats(document) {
        if let Some(target) = item.target {
            item.number.set_text_content(Some(&target.to_string()));
        }
    }
}
