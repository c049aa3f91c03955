//! Photo carousel DOM wiring.

use super::dom;
use super::storage::SessionStore;
use crate::config::SiteConfig;
use snapsite_input::{CarouselEngine, Frame};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement, PointerEvent};

const DOT: &str = "dot";
const ACTIVE: &str = "active";

struct View {
    document: Document,
    layers: Vec<Element>,
    dots: Option<Element>,
}

impl View {
    fn build_dots(&self, count: usize, index: usize) -> Result<(), JsValue> {
        let Some(dots) = &self.dots else {
            return Ok(());
        };
        dots.set_inner_html("");
        for i in 0..count {
            let dot = self.document.create_element("span")?;
            dot.set_class_name(if i == index { "dot active" } else { DOT });
            dots.append_child(&dot)?;
        }
        Ok(())
    }

    fn paint(&self, frame: &Frame) -> Result<(), JsValue> {
        for (layer, slot) in self.layers.iter().zip(frame.slots.iter()) {
            layer.set_inner_html("");
            let img: HtmlImageElement = self.document.create_element("img")?.dyn_into()?;
            img.set_src(&slot.source);
            img.set_draggable(false);
            layer.append_child(&img)?;
        }
        if let Some(dots) = &self.dots {
            let dots = dom::query_all_in(dots, ".dot")?;
            for (dot, active) in dots.iter().zip(frame.indicators.iter()) {
                dom::set_class(dot, ACTIVE, *active);
            }
        }
        Ok(())
    }

    fn show(&self, frame: Option<Frame>) {
        if let Some(frame) = frame {
            if let Err(err) = self.paint(&frame) {
                tracing::warn!(error = ?err, index = frame.index, "carousel paint failed");
            }
        }
    }
}

pub fn install(config: &SiteConfig) -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(section) = document.get_element_by_id(&config.dom.photo_section) else {
        return Ok(());
    };
    let layers = dom::query_all_in(&section, &config.dom.photo_layers)?;
    if layers.len() < 3 {
        tracing::debug!(layers = layers.len(), "carousel needs three layers");
        return Ok(());
    }
    let dots = section.query_selector(&config.dom.photo_dots)?;

    let mut engine = CarouselEngine::new(config.carousel.clone(), SessionStore::open())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let view = Rc::new(View {
        document,
        layers: layers.into_iter().take(3).collect(),
        dots,
    });
    view.build_dots(engine.len(), engine.index())?;
    view.paint(&engine.render())?;
    let engine = Rc::new(RefCell::new(engine));

    {
        let engine = engine.clone();
        let target = section.clone();
        dom::listen(&section, "pointerdown", move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            engine
                .borrow_mut()
                .on_pointer_down(f64::from(event.client_x()), f64::from(event.client_y()));
            let _ = target.set_pointer_capture(event.pointer_id());
        })?;
    }
    {
        let engine = engine.clone();
        let view = view.clone();
        dom::listen(&section, "pointermove", move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let frame = engine
                .borrow_mut()
                .on_pointer_move(f64::from(event.client_x()), f64::from(event.client_y()));
            view.show(frame);
        })?;
    }
    {
        let engine = engine.clone();
        let view = view.clone();
        dom::listen(&section, "pointerup", move |_| {
            let frame = engine.borrow_mut().on_pointer_up();
            view.show(frame);
        })?;
    }
    dom::listen(&section, "pointercancel", move |_| {
        engine.borrow_mut().on_pointer_cancel();
    })?;

    tracing::debug!("photo carousel installed");
    Ok(())
}
