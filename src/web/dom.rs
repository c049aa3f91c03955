//! Small helpers over web-sys.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Evaluate a media query; false if the query cannot be evaluated.
pub fn matches_media(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(root.query_selector_all(selector)?))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set or clear a class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Observe `targets` against `root`, calling `on_entry` for every report.
pub fn observe<F>(
    root: &Element,
    thresholds: &[f64],
    targets: &[Element],
    mut on_entry: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(&IntersectionObserverEntry) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry);
                }
            }
        },
    );

    // Set through Reflect: the generated setters for `root` changed shape
    // between web-sys releases.
    let init = IntersectionObserverInit::new();
    js_sys::Reflect::set(&init, &"root".into(), root)?;
    let list: js_sys::Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
    js_sys::Reflect::set(&init, &"threshold".into(), &list)?;

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}
