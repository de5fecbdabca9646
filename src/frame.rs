use crate::page::DomPage;
use crate::storage::LocalStorage;
use folio_core::{Event, PageController};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Controller = PageController<DomPage, LocalStorage>;

/// Owns the controller and the single requestAnimationFrame chain.
///
/// After every dispatched event the driver compares what the controller wants
/// with what is in flight: it requests a frame when one is wanted and none is
/// pending, and cancels the pending one when nothing wants it any more.
pub struct Driver {
    controller: RefCell<Controller>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending: Cell<Option<i32>>,
}

impl Driver {
    pub fn new(controller: Controller) -> Rc<Self> {
        Rc::new(Self {
            controller: RefCell::new(controller),
            tick: RefCell::new(None),
            pending: Cell::new(None),
        })
    }

    pub fn dispatch(self: &Rc<Self>, event: Event) {
        self.controller.borrow_mut().dispatch(event);
        self.sync_frames();
    }

    pub fn with_page<R>(&self, f: impl FnOnce(&DomPage) -> R) -> R {
        f(self.controller.borrow().page())
    }

    pub fn sync_frames(self: &Rc<Self>) {
        let wanted = self.controller.borrow().wants_frame();
        match (wanted, self.pending.get()) {
            (true, None) => self.request_frame(),
            (false, Some(id)) => {
                if let Some(w) = web::window() {
                    _ = w.cancel_animation_frame(id);
                }
                self.pending.set(None);
            }
            _ => {}
        }
    }

    fn request_frame(self: &Rc<Self>) {
        let Some(w) = web::window() else {
            return;
        };
        let mut tick = self.tick.borrow_mut();
        if tick.is_none() {
            let driver = Rc::downgrade(self);
            *tick = Some(Closure::wrap(Box::new(move |timestamp: f64| {
                if let Some(driver) = driver.upgrade() {
                    driver.pending.set(None);
                    driver.dispatch(Event::Frame { timestamp });
                }
            }) as Box<dyn FnMut(f64)>));
        }
        let Some(callback) = tick.as_ref() else {
            return;
        };
        match w.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
        }
    }
}
