//! Scripted session: drag, collapse, restore and shrink the window.
//!
//! Run with `RUST_LOG=debug` to see every handle decision. Set
//! `PANELGRIP_PROFILE=1` to serve puffin scopes for `puffin_viewer`.

use std::sync::Arc;
use std::time::Duration;

use panelgrip::core::logging;
use panelgrip::core::profiling::{self, ProfilingBackend};
use panelgrip::prelude::*;
use panelgrip_test_utils::ManualClock;

fn main() -> Result<(), DocumentError> {
    logging::init();
    if std::env::var_os("PANELGRIP_PROFILE").is_some() {
        profiling::init_profiling(ProfilingBackend::PuffinHttp);
    }

    let clock = ManualClock::new();
    let shared: Arc<dyn Clock> = clock.shared();
    let mut ui = UiCore::with_clock(Size::new(1280.0, 720.0), shared)?;

    let doc = ui.document_mut();
    let root = doc.root();
    let sidebar = doc.create_element("aside", Attributes::new(), Style::new())?;
    let divider = doc.create_element(
        "div",
        Attributes::new()
            .with("resize", "left")
            .with("min-width", "180")
            .with("initial-width", "260")
            .with("max-width-percent", "40")
            .with("collapsible", ""),
        Style::new(),
    )?;
    let content = doc.create_element("main", Attributes::new(), Style::new().flex_grow(1.0))?;
    for id in [sidebar, divider, content] {
        doc.append_child(root, id)?;
    }
    ui.mount_resize_handle(divider)?;
    report(&mut ui, sidebar, "mounted")?;

    let start = Vec2::new(ui.document_mut().layout_rect(divider)?.x + 2.0, 300.0);
    let drag = |ui: &mut UiCore, x: f32| {
        ui.dispatch(UiEvent::PointerMoved { position: Vec2::new(x, start.y) });
    };

    ui.dispatch(UiEvent::PointerMoved { position: start });
    ui.dispatch(UiEvent::PointerDown { position: start, button: PointerButton::Primary });
    drag(&mut ui, start.x + 120.0);
    report(&mut ui, sidebar, "widened")?;

    drag(&mut ui, start.x - 150.0);
    report(&mut ui, sidebar, "collapsed")?;

    drag(&mut ui, start.x - 20.0);
    report(&mut ui, sidebar, "restored")?;

    ui.dispatch(UiEvent::PointerUp {
        position: Vec2::new(start.x - 20.0, start.y),
        button: PointerButton::Primary,
    });

    ui.dispatch(UiEvent::WindowResized { size: Size::new(500.0, 720.0) });
    report(&mut ui, sidebar, "window shrunk")?;

    clock.advance(Duration::from_millis(20));
    ui.dispatch(UiEvent::WindowResized { size: Size::new(480.0, 720.0) });
    report(&mut ui, sidebar, "second resize (throttled)")?;

    Ok(())
}

fn report(ui: &mut UiCore, sidebar: ElementId, step: &str) -> Result<(), DocumentError> {
    profiling::new_frame();
    let hidden = ui.document().is_hidden(sidebar);
    let width = ui.document_mut().rendered_width(sidebar)?;
    tracing::info!("{step}: sidebar width {width}, hidden {hidden}");
    Ok(())
}
