//! Scroll-triggered reveal choreography.
//!
//! Everything here is written against the [`Animator`] capability so the
//! timing rules stay independent of how the page actually observes scroll
//! position or tweens styles.

/// Visual state a reveal animates between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Vertical offset in CSS pixels.
    pub translate_y: f32,
}

impl Pose {
    pub const HIDDEN_LINE: Pose = Pose {
        opacity: 0.0,
        translate_y: 50.0,
    };
    pub const SHOWN: Pose = Pose {
        opacity: 1.0,
        translate_y: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Cubic ease-out.
    Power2Out,
    /// Quartic ease-out.
    Power3Out,
}

impl Ease {
    /// Eased progress for linear progress `t` (clamped to `[0, 1]`).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - inv * inv * inv,
            Ease::Power3Out => 1.0 - inv * inv * inv * inv,
        }
    }

    /// Equivalent CSS timing function.
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenOptions {
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub ease: Ease,
}

impl TweenOptions {
    pub const fn new(duration_sec: f32, delay_sec: f32, ease: Ease) -> Self {
        Self {
            duration_sec,
            delay_sec,
            ease,
        }
    }
}

/// Where a trigger fires: when the trigger's top edge passes this fraction
/// of the viewport height, measured from the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerStart(pub f32);

impl TriggerStart {
    pub const fn at(fraction: f32) -> Self {
        Self(fraction)
    }

    /// Share of the viewport, from the bottom, that lies below the line.
    pub fn bottom_inset(self) -> f32 {
        (1.0 - self.0).clamp(0.0, 1.0)
    }
}

/// Scroll observation and tweening, provided by the host page.
pub trait Animator {
    type Target: Clone + 'static;

    /// Run `callback` once, the first time `trigger` enters past `start`.
    fn on_viewport_enter(
        &self,
        trigger: &Self::Target,
        start: TriggerStart,
        callback: Box<dyn FnOnce()>,
    );

    /// Tween `target` from `from` (or its current state) to `to`.
    fn animate_properties(
        &self,
        target: &Self::Target,
        from: Option<Pose>,
        to: Pose,
        options: TweenOptions,
    );

    /// Count the target's text up from zero to `to`.
    fn animate_count(&self, target: &Self::Target, to: u32, options: TweenOptions);

    /// Mark `target` as animated. Returns `false` if it already was.
    fn claim(&self, target: &Self::Target) -> bool;

    fn add_class(&self, target: &Self::Target, class: &str);
}

/// Text block whose lines reveal one after another.
#[derive(Clone, Debug)]
pub struct SplitText<T> {
    pub root: T,
    pub lines: Vec<T>,
}

#[derive(Clone, Debug)]
pub struct Slide<T> {
    pub root: T,
    pub texts: Vec<SplitText<T>>,
    /// Tag lists, stat strips and step lists that fade in after the text.
    pub extras: Vec<T>,
}

#[derive(Clone, Debug)]
pub struct StatItem<T> {
    pub root: T,
    pub number: T,
    pub target: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct Journey<T> {
    pub section: T,
    pub cards: Vec<T>,
    pub connector: Option<T>,
}

#[derive(Clone, Debug)]
pub struct SectionHeader<T> {
    pub root: T,
    pub texts: Vec<SplitText<T>>,
}

pub const CONNECTOR_ACTIVE_CLASS: &str = "animate";

const LINE: TweenOptions = TweenOptions::new(0.8, 0.0, Ease::Power3Out);
const LINE_STAGGER: f32 = 0.15;
const EXTRA: TweenOptions = TweenOptions::new(0.8, 0.0, Ease::Power3Out);

pub const CARD_TRIGGER: TriggerStart = TriggerStart::at(0.85);
pub const JOURNEY_TRIGGER: TriggerStart = TriggerStart::at(0.7);
pub const STAT_TRIGGER: TriggerStart = TriggerStart::at(0.85);
pub const HEADER_TRIGGER: TriggerStart = TriggerStart::at(0.8);

/// Reveal a split text's lines, staggered, once per text.
pub fn reveal_split_text<A: Animator>(animator: &A, text: &SplitText<A::Target>, delay: f32) {
    if !animator.claim(&text.root) {
        return;
    }
    for (i, line) in text.lines.iter().enumerate() {
        let options = TweenOptions {
            delay_sec: delay + i as f32 * LINE_STAGGER,
            ..LINE
        };
        animator.animate_properties(line, Some(Pose::HIDDEN_LINE), Pose::SHOWN, options);
    }
}

pub fn reveal_extra<A: Animator>(animator: &A, element: &A::Target, delay: f32) {
    let options = TweenOptions {
        delay_sec: delay,
        ..EXTRA
    };
    animator.animate_properties(element, None, Pose::SHOWN, options);
}

/// The first slide is visible before any scrolling happens.
pub fn reveal_first_slide<A: Animator>(animator: &A, slide: &Slide<A::Target>) {
    for (i, text) in slide.texts.iter().enumerate() {
        reveal_split_text(animator, text, 0.5 + i as f32 * 0.2);
    }
}

/// Called on every track update for the slide in view; repeated calls are
/// no-ops thanks to the claims.
pub fn reveal_active_slide<A: Animator>(animator: &A, slide: &Slide<A::Target>) {
    for text in &slide.texts {
        reveal_split_text(animator, text, 0.0);
    }
    for extra in &slide.extras {
        if animator.claim(extra) {
            reveal_extra(animator, extra, 0.3);
        }
    }
}

pub fn reveal_service_cards<A>(animator: &A, cards: &[A::Target])
where
    A: Animator + Clone + 'static,
{
    for (index, card) in cards.iter().enumerate() {
        let anim = animator.clone();
        let target = card.clone();
        animator.on_viewport_enter(
            card,
            CARD_TRIGGER,
            Box::new(move || {
                let options = TweenOptions::new(0.6, index as f32 * 0.1, Ease::Power3Out);
                anim.animate_properties(&target, None, Pose::SHOWN, options);
            }),
        );
    }
}

/// Journey map: all cards cascade from one section trigger, then the
/// connector line is switched on.
pub fn reveal_journey<A>(animator: &A, journey: &Journey<A::Target>)
where
    A: Animator + Clone + 'static,
{
    if journey.cards.is_empty() {
        return;
    }
    let anim = animator.clone();
    let j = journey.clone();
    animator.on_viewport_enter(
        &journey.section,
        JOURNEY_TRIGGER,
        Box::new(move || {
            for (index, card) in j.cards.iter().enumerate() {
                let options = TweenOptions::new(0.7, index as f32 * 0.12, Ease::Power3Out);
                anim.animate_properties(card, None, Pose::SHOWN, options);
            }
            if let Some(connector) = &j.connector {
                anim.add_class(connector, CONNECTOR_ACTIVE_CLASS);
            }
        }),
    );
}

pub fn reveal_stats<A>(animator: &A, items: &[StatItem<A::Target>])
where
    A: Animator + Clone + 'static,
{
    for (index, item) in items.iter().enumerate() {
        let anim = animator.clone();
        let it = item.clone();
        animator.on_viewport_enter(
            &item.root,
            STAT_TRIGGER,
            Box::new(move || {
                let delay = index as f32 * 0.1;
                let options = TweenOptions::new(0.5, delay, Ease::Power2Out);
                anim.animate_properties(&it.root, None, Pose::SHOWN, options);
                if let Some(target) = it.target {
                    let count = TweenOptions::new(2.0, delay, Ease::Power2Out);
                    anim.animate_count(&it.number, target, count);
                }
            }),
        );
    }
}

pub fn reveal_headers<A>(animator: &A, headers: &[SectionHeader<A::Target>])
where
    A: Animator + Clone + 'static,
{
    for header in headers {
        let anim = animator.clone();
        let texts = header.texts.clone();
        animator.on_viewport_enter(
            &header.root,
            HEADER_TRIGGER,
            Box::new(move || {
                for (i, text) in texts.iter().enumerate() {
                    reveal_split_text(&anim, text, i as f32 * 0.15);
                }
            }),
        );
    }
}

/// Integer prefix of a `data-count` attribute, e.g. `"150+"` -> 150.
/// A leading `+` is accepted; negative counts are rejected.
pub fn parse_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}

/// Value shown by a counter at linear progress `t`.
pub fn count_at(target: u32, t: f32, ease: Ease) -> u32 {
    (target as f32 * ease.apply(t)).round() as u32
}

/// What a running counter shows on a given tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountFrame {
    /// Still inside the delay; leave the text alone.
    Waiting,
    Counting(u32),
    /// Final value. The counter needs no further ticks.
    Done(u32),
}

/// Clock for a count-up tween, sampled with millisecond timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    start_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

impl CountUp {
    pub fn new(target: u32, now_ms: f64, options: TweenOptions) -> Self {
        Self {
            target,
            start_ms: now_ms + options.delay_sec.max(0.0) as f64 * 1000.0,
            duration_ms: (options.duration_sec as f64 * 1000.0).max(1.0),
            ease: options.ease,
        }
    }

    pub fn sample(&self, now_ms: f64) -> CountFrame {
        let elapsed = now_ms - self.start_ms;
        if elapsed < 0.0 {
            return CountFrame::Waiting;
        }
        let t = (elapsed / self.duration_ms).min(1.0) as f32;
        if t >= 1.0 {
            CountFrame::Done(self.target)
        } else {
            CountFrame::Counting(count_at(self.target, t, self.ease))
        }
    }
}
