//! Menu toggle, anchor scrolling, scroll-driven menu classes, and the footer.

use super::dom;
use crate::chrome::{
    is_toggle_key, menu_after_scroll, MenuState, ScrollMetrics, SectionBounds, VISIBLE_CLASS,
};
use crate::config::SiteConfig;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions};

/// Menu element plus the state last written to it, seeded from its markup.
#[derive(Clone)]
struct Menu {
    element: Option<Element>,
    state: Rc<Cell<MenuState>>,
}

impl Menu {
    fn new(element: Option<Element>) -> Self {
        let initial = element
            .as_ref()
            .map(|el| {
                let classes = el.class_list();
                MenuState::from_classes(|class| classes.contains(class))
            })
            .unwrap_or_default();
        Self {
            element,
            state: Rc::new(Cell::new(initial)),
        }
    }

    fn update(&self, f: impl FnOnce(MenuState) -> MenuState) {
        let next = f(self.state.get());
        self.state.set(next);
        if let Some(element) = &self.element {
            for (class, on) in next.classes() {
                dom::set_class(element, class, on);
            }
        }
    }
}

pub fn install(config: &SiteConfig) -> Result<(), JsValue> {
    let document = dom::document()?;
    let ids = &config.dom;

    let menu = Menu::new(document.get_element_by_id(&ids.menu));
    let scroll = document.get_element_by_id(&ids.scroll_container);

    if let Some(toggle) = document.get_element_by_id(&ids.menu_toggle) {
        install_toggle(&toggle, &menu)?;
    }

    if let Some(scroll) = &scroll {
        install_anchors(config, scroll, &menu)?;

        if let Some(intro) = document.get_element_by_id(&ids.intro) {
            if menu.element.is_some() {
                install_scroll_tracking(config, scroll, &intro, &menu)?;
            }
        }

        let footer = document.get_element_by_id(&ids.footer);
        let contact = document.get_element_by_id(&ids.contact);
        if let (Some(footer), Some(contact)) = (footer, contact) {
            dom::observe(
                scroll,
                &[config.chrome.footer_threshold],
                &[contact],
                move |entry| dom::set_class(&footer, VISIBLE_CLASS, entry.is_intersecting()),
            )?;
        }
    }

    tracing::debug!(scroll = scroll.is_some(), "chrome installed");
    Ok(())
}

fn install_toggle(toggle: &Element, menu: &Menu) -> Result<(), JsValue> {
    let on_click = menu.clone();
    dom::listen(toggle, "click", move |_| on_click.update(MenuState::toggled))?;

    let on_key = menu.clone();
    dom::listen(toggle, "keydown", move |event| {
        let pressed = event
            .dyn_ref::<KeyboardEvent>()
            .map(|key| is_toggle_key(&key.key()))
            .unwrap_or(false);
        if pressed {
            on_key.update(MenuState::toggled);
        }
    })
}

fn install_anchors(config: &SiteConfig, scroll: &Element, menu: &Menu) -> Result<(), JsValue> {
    let document = dom::document()?;
    let anchors = dom::query_all(&document, &config.dom.anchors)?;

    for anchor in anchors {
        let chrome = config.chrome.clone();
        let scroll = scroll.clone();
        let menu = menu.clone();
        let link = anchor.clone();

        dom::listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            event.prevent_default();

            let Ok(window) = dom::window() else { return };
            let wide = dom::matches_media(&window, &chrome.wide_query);
            let Some(id) = chrome.route_anchor(&href, wide) else {
                return;
            };
            let Some(target) = window
                .document()
                .and_then(|doc| doc.get_element_by_id(&id))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                tracing::debug!(%id, "anchor target missing");
                return;
            };

            let options = ScrollToOptions::new();
            options.set_top(f64::from(target.offset_top()));
            options.set_behavior(ScrollBehavior::Smooth);
            scroll.scroll_to_with_scroll_to_options(&options);

            menu.update(MenuState::closed);
        })?;
    }
    Ok(())
}

fn install_scroll_tracking(
    config: &SiteConfig,
    scroll: &Element,
    intro: &Element,
    menu: &Menu,
) -> Result<(), JsValue> {
    let document = dom::document()?;
    let light: Vec<HtmlElement> = dom::query_all(&document, &config.dom.light_sections)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    let intro_top = intro
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_top()))
        .unwrap_or(0.0);

    let chrome = config.chrome.clone();
    let container = scroll.clone();
    let menu = menu.clone();
    let update = move || {
        let metrics = ScrollMetrics {
            scroll_top: f64::from(container.scroll_top()),
            client_height: f64::from(container.client_height()),
        };
        let bounds: Vec<SectionBounds> = light
            .iter()
            .map(|el| SectionBounds {
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
                rendered: el.offset_parent().is_some(),
            })
            .collect();
        let next = menu_after_scroll(&chrome, metrics, intro_top, &bounds);
        menu.update(|_| next);
    };

    update();
    dom::listen(scroll, "scroll", move |_| update())
}
