use crate::dom;
use crate::frame::Driver;
use folio_core::{Event, Toggle};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_toggles(driver: &Rc<Driver>) {
    let buttons = driver.with_page(|page| {
        [
            (page.toggle_button(Toggle::Theme).cloned(), Event::ThemeChangeRequested),
            (page.toggle_button(Toggle::Motion).cloned(), Event::MotionChangeRequested),
            (
                page.toggle_button(Toggle::Constellations).cloned(),
                Event::ConstellationsChangeRequested,
            ),
            (page.guide_toggle().cloned(), Event::GuidePanelToggled),
        ]
    });
    for (button, event) in buttons {
        let Some(button) = button else {
            continue;
        };
        let driver = driver.clone();
        dom::add_listener(&button, "click", move || driver.dispatch(event.clone()));
    }
}

/// Hover, focus and click handlers for the rendered guide items.
pub fn wire_guide_items(driver: &Rc<Driver>) {
    let items: Vec<(String, web::Element)> = driver.with_page(|page| {
        page.guide_buttons()
            .map(|(id, el)| (id.clone(), el.clone()))
            .collect()
    });
    for (id, button) in items {
        for name in ["mouseenter", "focus"] {
            let driver = driver.clone();
            let id = id.clone();
            dom::add_listener(&button, name, move || {
                driver.dispatch(Event::ConstellationHover(Some(id.clone())))
            });
        }
        for name in ["mouseleave", "blur"] {
            let driver = driver.clone();
            dom::add_listener(&button, name, move || {
                driver.dispatch(Event::ConstellationHover(None))
            });
        }
        let driver = driver.clone();
        dom::add_listener(&button, "click", move || {
            driver.dispatch(Event::ConstellationLock(id.clone()))
        });
    }
}

/// Window scroll and pointer listeners. They stay attached for the page
/// lifetime; the engine drops their events while motion is inactive.
pub fn wire_viewport(driver: &Rc<Driver>, window: &web::Window) {
    let scroll_driver = driver.clone();
    dom::add_passive_listener(window, "scroll", move || {
        scroll_driver.dispatch(Event::ScrollTick)
    });

    let move_driver = driver.clone();
    dom::add_passive_event_listener(window, "pointermove", move |ev: web::PointerEvent| {
        move_driver.dispatch(Event::PointerMoved {
            x: ev.client_x() as f64,
            y: ev.client_y() as f64,
        });
    });

    let leave_driver = driver.clone();
    dom::add_listener(window, "pointerleave", move || {
        leave_driver.dispatch(Event::PointerLeft)
    });
}

pub fn wire_media_queries(driver: &Rc<Driver>) {
    let (dark, reduce) = driver.with_page(|page| {
        (page.dark_scheme().cloned(), page.reduced_motion().cloned())
    });
    if let Some(query) = dark {
        let driver = driver.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
            driver.dispatch(Event::SystemColorScheme {
                prefers_dark: ev.matches(),
            });
        }) as Box<dyn FnMut(_)>);
        _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    if let Some(query) = reduce {
        let driver = driver.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
            driver.dispatch(Event::SystemReducedMotion {
                reduce: ev.matches(),
            });
        }) as Box<dyn FnMut(_)>);
        _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
