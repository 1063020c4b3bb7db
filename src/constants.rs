// DOM hooks and page-level tuning used by the web front-end.

// Particle background
pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";

// Horizontal slide track
pub const SEL_TRACK_WRAPPER: &str = ".horizontal-wrapper";
pub const SEL_TRACK_CONTAINER: &str = ".horizontal-container";
pub const SEL_SLIDE: &str = ".h-slide";

// Split text reveals
pub const SEL_SPLIT_TEXT: &str = ".split-text";
pub const SEL_LINE: &str = ".line";
pub const SEL_SPLIT_LINES: &str = ".split-text .line";
pub const SEL_SLIDE_EXTRAS: &str = ".capability-tags, .network-stats, .journey-steps";

// Vertical sections
pub const SEL_SERVICE_CARD: &str = ".service-card";
pub const SEL_PORTFOLIO_ITEM: &str = ".portfolio-item";
pub const SEL_STAT_ITEM: &str = ".stat-item";
pub const SEL_STAT_NUMBER: &str = ".stat-number";
pub const SEL_JOURNEY_SECTION: &str = ".journey-map-section";
pub const SEL_JOURNEY_CARD: &str = ".journey-card";
pub const SEL_JOURNEY_CONNECTOR: &str = ".journey-connector";
pub const SEL_SECTION_HEADERS: &str = ".vertical-section .section-header, .contact-section .content";

// Compact layouts skip scroll choreography and show these at once
pub const COMPACT_SHOW_NOW: [&str; 6] = [
    SEL_SERVICE_CARD,
    SEL_PORTFOLIO_ITEM,
    SEL_STAT_ITEM,
    SEL_SPLIT_LINES,
    SEL_SLIDE_EXTRAS,
    SEL_JOURNEY_CARD,
];

// Reveal bookkeeping
pub const ANIMATED_CLASS: &str = "animated";
pub const COUNT_ATTR: &str = "data-count";

// Track re-measure delay after the last resize event
pub const RESIZE_REFRESH_DEBOUNCE_MS: i32 = 250;
