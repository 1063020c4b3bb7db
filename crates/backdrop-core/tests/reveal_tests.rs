// Host-side tests for reveal choreography against a recording animator.

use backdrop_core::reveal::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Tween {
        target: String,
        from: Option<Pose>,
        to: Pose,
        options: TweenOptions,
    },
    Count {
        target: String,
        to: u32,
        delay: f32,
    },
    Class {
        target: String,
        class: String,
    },
}

#[derive(Default)]
struct Stage {
    pending: Vec<(String, TriggerStart, Box<dyn FnOnce()>)>,
    claimed: HashSet<String>,
    calls: Vec<Call>,
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Stage>>);

impl Recorder {
    /// Fire every trigger registered on `target`.
    fn enter(&self, target: &str) {
        let fired: Vec<_> = {
            let mut stage = self.0.borrow_mut();
            let (hit, keep): (Vec<_>, Vec<_>) = std::mem::take(&mut stage.pending)
                .into_iter()
                .partition(|(t, _, _)| t == target);
            stage.pending = keep;
            hit
        };
        for (_, _, cb) in fired {
            cb();
        }
    }

    fn triggers(&self) -> Vec<(String, TriggerStart)> {
        self.0
            .borrow()
            .pending
            .iter()
            .map(|(t, s, _)| (t.clone(), *s))
            .collect()
    }

    fn calls(&self) -> Vec<Call> {
        self.0.borrow().calls.clone()
    }

    fn tweens_for(&self, target: &str) -> Vec<TweenOptions> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Tween {
                    target: t, options, ..
                } if t == target => Some(options),
                _ => None,
            })
            .collect()
    }
}

impl Animator for Recorder {
    type Target = String;

    fn on_viewport_enter(&self, trigger: &String, start: TriggerStart, cb: Box<dyn FnOnce()>) {
        self.0.borrow_mut().pending.push((trigger.clone(), start, cb));
    }

    fn animate_properties(&self, target: &String, from: Option<Pose>, to: Pose, options: TweenOptions) {
        self.0.borrow_mut().calls.push(Call::Tween {
            target: target.clone(),
            from,
            to,
            options,
        });
    }

    fn animate_count(&self, target: &String, to: u32, options: TweenOptions) {
        self.0.borrow_mut().calls.push(Call::Count {
            target: target.clone(),
            to,
            delay: options.delay_sec,
        });
    }

    fn claim(&self, target: &String) -> bool {
        self.0.borrow_mut().claimed.insert(target.clone())
    }

    fn add_class(&self, target: &String, class: &str) {
        self.0.borrow_mut().calls.push(Call::Class {
            target: target.clone(),
            class: class.to_string(),
        });
    }
}

fn split(name: &str, lines: usize) -> SplitText<String> {
    SplitText {
        root: name.to_string(),
        lines: (0..lines).map(|i| format!("{name}/line{i}")).collect(),
    }
}

fn slide(name: &str) -> Slide<String> {
    Slide {
        root: name.to_string(),
        texts: vec![split(&format!("{name}/title"), 2), split(&format!("{name}/body"), 1)],
        extras: vec![format!("{name}/tags")],
    }
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn split_text_lines_stagger_from_hidden() {
    let anim = Recorder::default();
    reveal_split_text(&anim, &split("hero", 3), 0.5);
    let calls = anim.calls();
    assert_eq!(calls.len(), 3);
    for (i, call) in calls.iter().enumerate() {
        match call {
            Call::Tween {
                from, to, options, ..
            } => {
                assert_eq!(*from, Some(Pose::HIDDEN_LINE));
                assert_eq!(*to, Pose::SHOWN);
                assert!(close(options.duration_sec, 0.8));
                assert!(close(options.delay_sec, 0.5 + i as f32 * 0.15));
                assert_eq!(options.ease, Ease::Power3Out);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }
}

#[test]
fn split_text_reveals_only_once() {
    let anim = Recorder::default();
    let text = split("hero", 2);
    reveal_split_text(&anim, &text, 0.0);
    reveal_split_text(&anim, &text, 0.0);
    assert_eq!(anim.calls().len(), 2);
}

#[test]
fn active_slide_is_idempotent() {
    let anim = Recorder::default();
    let s = slide("s2");
    reveal_active_slide(&anim, &s);
    let first = anim.calls().len();
    assert_eq!(first, 4);
    reveal_active_slide(&anim, &s);
    assert_eq!(anim.calls().len(), first);
    assert!(close(anim.tweens_for("s2/tags")[0].delay_sec, 0.3));
}

#[test]
fn first_slide_texts_start_late() {
    let anim = Recorder::default();
    reveal_first_slide(&anim, &slide("s0"));
    assert!(close(anim.tweens_for("s0/title/line1")[0].delay_sec, 0.65));
    assert!(close(anim.tweens_for("s0/body/line0")[0].delay_sec, 0.7));
}

#[test]
fn service_cards_each_have_a_trigger() {
    let anim = Recorder::default();
    let cards: Vec<String> = (0..3).map(|i| format!("card{i}")).collect();
    reveal_service_cards(&anim, &cards);
    assert_eq!(anim.triggers().len(), 3);
    assert!(anim.triggers().iter().all(|(_, s)| *s == TriggerStart::at(0.85)));
    anim.enter("card2");
    let t = anim.tweens_for("card2");
    assert!(close(t[0].delay_sec, 0.2));
    assert!(close(t[0].duration_sec, 0.6));
}

#[test]
fn journey_cascades_and_lights_connector() {
    let anim = Recorder::default();
    let journey = Journey {
        section: "journey".to_string(),
        cards: vec!["j0".to_string(), "j1".to_string()],
        connector: Some("connector".to_string()),
    };
    reveal_journey(&anim, &journey);
    anim.enter("journey");
    assert!(close(anim.tweens_for("j1")[0].delay_sec, 0.12));
    assert!(anim.calls().contains(&Call::Class {
        target: "connector".to_string(),
        class: CONNECTOR_ACTIVE_CLASS.to_string(),
    }));
}

#[test]
fn journey_without_cards_registers_nothing() {
    let anim = Recorder::default();
    let journey = Journey {
        section: "journey".to_string(),
        cards: vec![],
        connector: None,
    };
    reveal_journey(&anim, &journey);
    assert!(anim.triggers().is_empty());
}

#[test]
fn stats_fade_in_and_count_up() {
    let anim = Recorder::default();
    let items = vec![
        StatItem {
            root: "stat0".to_string(),
            number: "num0".to_string(),
            target: Some(120),
        },
        StatItem {
            root: "stat1".to_string(),
            number: "num1".to_string(),
            target: None,
        },
    ];
    reveal_stats(&anim, &items);
    anim.enter("stat0");
    anim.enter("stat1");
    let calls = anim.calls();
    assert!(calls.contains(&Call::Count {
        target: "num0".to_string(),
        to: 120,
        delay: 0.0,
    }));
    assert!(!calls
        .iter()
        .any(|c| matches!(c, Call::Count { target, .. } if target == "num1")));
    assert_eq!(anim.tweens_for("stat1")[0].ease, Ease::Power2Out);
}

#[test]
fn headers_stagger_texts() {
    let anim = Recorder::default();
    let header = SectionHeader {
        root: "header".to_string(),
        texts: vec![split("h/a", 1), split("h/b", 1)],
    };
    reveal_headers(&anim, &[header]);
    anim.enter("header");
    assert!(close(anim.tweens_for("h/b/line0")[0].delay_sec, 0.15));
}

#[test]
fn parse_count_reads_integer_prefix() {
    assert_eq!(parse_count("150"), Some(150));
    assert_eq!(parse_count(" 98+"), Some(98));
    assert_eq!(parse_count("n/a"), None);
    assert_eq!(parse_count(""), None);
}

#[test]
fn parse_count_accepts_sign_like_parse_int() {
    assert_eq!(parse_count("+42"), Some(42));
    assert_eq!(parse_count("  +7k"), Some(7));
    // Counters only count up from zero.
    assert_eq!(parse_count("-5"), None);
    assert_eq!(parse_count("+"), None);
}

#[test]
fn easing_endpoints_and_counter() {
    for ease in [Ease::Linear, Ease::Power2Out, Ease::Power3Out] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
    assert!(Ease::Power3Out.apply(0.3) > Ease::Power2Out.apply(0.3));
    assert_eq!(count_at(200, 1.0, Ease::Power2Out), 200);
    assert_eq!(count_at(200, 0.0, Ease::Power2Out), 0);
    assert_eq!(count_at(100, 0.5, Ease::Linear), 50);
}

#[test]
fn trigger_start_maps_to_bottom_inset() {
    assert!(close(TriggerStart::at(0.8).bottom_inset(), 0.2));
    assert!(close(TriggerStart::at(0.7).bottom_inset(), 0.3));
}

#[test]
fn count_up_waits_for_delay_then_finishes() {
    let clock = CountUp::new(200, 1_000.0, TweenOptions::new(2.0, 0.3, Ease::Power2Out));
    assert_eq!(clock.sample(1_000.0), CountFrame::Waiting);
    assert_eq!(clock.sample(1_299.0), CountFrame::Waiting);
    assert_eq!(clock.sample(1_300.0), CountFrame::Counting(0));
    match clock.sample(2_300.0) {
        CountFrame::Counting(mid) => assert!(mid > 100 && mid < 200, "{mid}"),
        other => panic!("expected a running count, got {other:?}"),
    }
    assert_eq!(clock.sample(3_300.0), CountFrame::Done(200));
    // Late ticks still report completion so the driver can stop.
    assert_eq!(clock.sample(9_000.0), CountFrame::Done(200));
}

#[test]
fn zero_duration_count_finishes_on_first_tick() {
    let clock = CountUp::new(42, 0.0, TweenOptions::new(0.0, 0.0, Ease::Linear));
    assert_eq!(clock.sample(1.0), CountFrame::Done(42));
}
