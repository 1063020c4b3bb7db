use crate::constants::ANIMATED_CLASS;
use crate::style;
use backdrop_core::reveal::{Animator, CountFrame, CountUp, Pose, TriggerStart, TweenOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type Callback = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// Browser-native [`Animator`]: `IntersectionObserver` for viewport
/// triggers, CSS transitions for property tweens, and a rAF loop for
/// counters.
#[derive(Clone, Copy, Default)]
pub struct WebAnimator;

impl Animator for WebAnimator {
    type Target = web::HtmlElement;

    fn on_viewport_enter(
        &self,
        trigger: &web::HtmlElement,
        start: TriggerStart,
        callback: Box<dyn FnOnce()>,
    ) {
        let slot: Callback = Rc::new(RefCell::new(Some(callback)));
        if let Err(e) = observe_once(trigger, start, slot.clone()) {
            // Without an observer, reveal immediately rather than leave content hidden.
            log::warn!("[reveal] IntersectionObserver error: {:?}", e);
            let cb = slot.borrow_mut().take();
            if let Some(cb) = cb {
                cb();
            }
        }
    }

    fn animate_properties(
        &self,
        target: &web::HtmlElement,
        from: Option<Pose>,
        to: Pose,
        options: TweenOptions,
    ) {
        let css = target.style();
        if let Some(from) = from {
            _ = css.set_property("transition", "none");
            apply_pose(&css, from);
            // Flush styles so the transition starts from `from`.
            _ = target.offset_width();
        }
        _ = css.set_property("transition", &style::transition_value(options));
        apply_pose(&css, to);
    }

    fn animate_count(&self, target: &web::HtmlElement, to: u32, options: TweenOptions) {
        start_counter(target.clone(), to, options);
    }

    fn claim(&self, target: &web::HtmlElement) -> bool {
        let classes = target.class_list();
        if classes.contains(ANIMATED_CLASS) {
            return false;
        }
        _ = classes.add_1(ANIMATED_CLASS);
        true
    }

    fn add_class(&self, target: &web::HtmlElement, class: &str) {
        _ = target.class_list().add_1(class);
    }
}

fn apply_pose(css: &web::CssStyleDeclaration, pose: Pose) {
    _ = css.set_property("opacity", &pose.opacity.to_string());
    _ = css.set_property("transform", &style::transform_value(pose));
}

fn observe_once(
    trigger: &web::HtmlElement,
    start: TriggerStart,
    slot: Callback,
) -> Result<(), JsValue> {
    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            // Elements already scrolled past the line count as entered.
            let entered = entries.iter().any(|entry| {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                entry.is_intersecting() || entry.bounding_client_rect().top() < 0.0
            });
            if !entered {
                return;
            }
            observer.disconnect();
            let cb = slot.borrow_mut().take();
            if let Some(cb) = cb {
                cb();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(&style::root_margin(start));
    let observer =
        web::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    observer.observe(trigger);
    on_intersect.forget();
    Ok(())
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn start_counter(target: web::HtmlElement, to: u32, options: TweenOptions) {
    let clock = CountUp::new(to, js_sys::Date::now(), options);
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        match clock.sample(js_sys::Date::now()) {
            CountFrame::Waiting => {}
            CountFrame::Counting(shown) => {
                target.set_text_content(Some(&shown.to_string()));
            }
            CountFrame::Done(shown) => {
                target.set_text_content(Some(&shown.to_string()));
                let done = tick_clone.borrow_mut().take();
                if let Some(done) = done {
                    release_after_frame(done);
                }
                return;
            }
        }
        schedule(&tick_clone);
    }) as Box<dyn FnMut()>));
    schedule(&tick);
}

/// Drop a tick closure from outside its own invocation.
fn release_after_frame(closure: Closure<dyn FnMut()>) {
    let Some(w) = web::window() else {
        closure.forget();
        return;
    };
    let release = Closure::once_into_js(move || drop(closure));
    _ = w.request_animation_frame(release.unchecked_ref());
}

fn schedule(tick: &TickSlot) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
