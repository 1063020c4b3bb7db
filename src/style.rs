use backdrop_core::reveal::{Pose, TriggerStart, TweenOptions};

/// CSS `transition` value tweening opacity and transform together.
pub fn transition_value(options: TweenOptions) -> String {
    let d = options.duration_sec.max(0.0);
    let delay = options.delay_sec.max(0.0);
    let ease = options.ease.css();
    format!("opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s")
}

#[inline]
pub fn transform_value(pose: Pose) -> String {
    format!("translateY({}px)", pose.translate_y)
}

#[inline]
pub fn translate_x_value(x: f32) -> String {
    format!("translate3d({}px, 0px, 0px)", x)
}

/// Observer root margin that moves the viewport's bottom edge up to the
/// trigger line.
pub fn root_margin(start: TriggerStart) -> String {
    format!("0px 0px -{:.0}% 0px", start.bottom_inset() * 100.0)
}
