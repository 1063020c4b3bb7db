#![cfg(target_arch = "wasm32")]
use backdrop_core::{is_compact_viewport, FieldConfig, ParticleField, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod animator;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod lifecycle;
mod render;
mod scroll;
mod style;

use animator::WebAnimator;
use constants::PARTICLE_CANVAS_ID;
use frame::{FrameContext, FrameLoop};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    wait_for_fonts(&document).await;

    let compact = is_compact_viewport(dom::viewport_size(&window).x);
    log::info!("viewport mode: {}", if compact { "compact" } else { "wide" });

    // The backdrop is independent of the choreography; keep going if it fails.
    if let Err(e) = init_particle_background(&document, compact) {
        log::error!("[field] init error: {:?}", e);
    }

    if compact {
        scroll::show_all_elements(&document);
        scroll::init_stat_counters(&document);
        return Ok(());
    }

    let animator = WebAnimator;
    let refresh = scroll::init_horizontal_scroll(&document, animator);
    scroll::init_vertical_animations(&document, animator);
    if let Some(refresh) = refresh {
        events::wire_debounced_refresh(refresh);
    }
    Ok(())
}

async fn wait_for_fonts(document: &web::Document) {
    match document.fonts().ready() {
        Ok(ready) => {
            if let Err(e) = JsFuture::from(ready).await {
                log::warn!("fonts.ready rejected: {:?}", e);
            }
        }
        Err(e) => log::warn!("fonts.ready unavailable: {:?}", e),
    }
}

fn init_particle_background(document: &web::Document, compact: bool) -> anyhow::Result<()> {
    let Some(canvas_el) = document.get_element_by_id(PARTICLE_CANVAS_ID) else {
        log::info!("[field] no #{} on this page", PARTICLE_CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = FieldConfig::for_viewport(compact);
    config.validate()?;

    let (css, dpr) = dom::sync_canvas_backing_size(&canvas);
    let mut surface = render::CanvasSurface::from_canvas(&canvas)?;
    surface.set_pixel_ratio(dpr);
    let field = ParticleField::new(css.x, css.y, config);
    log::info!(
        "[field] {} particles on {:.0}x{:.0} (dpr {:.2})",
        field.len(),
        css.x,
        css.y,
        dpr
    );

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointer_tracking(document, &canvas, pointer.clone());

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        field,
        pointer,
        surface,
    }));
    events::wire_field_resize(&canvas, frame_ctx.clone());
    let frame_loop = Rc::new(FrameLoop::start(frame_ctx));
    events::wire_teardown(frame_loop);
    Ok(())
}
