use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, Window};

/// Smoothly scrolls the element with `section_id` into view. Does nothing if it isn't rendered.
pub fn scroll_to(section_id: &str) {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|document| document.get_element_by_id(section_id));

    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No section with id '{}' to scroll to", section_id),
    }
}

/// Current vertical scroll offset of the page in px.
pub fn vertical_offset(window: &Window) -> Option<f64> {
    window.scroll_y().ok()
}

/// A window `scroll` listener that is removed again when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Registers `on_scroll`, which receives the vertical offset on every scroll event.
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<ScrollListener> {
        let window = window()?;
        let window_clone = window.clone();

        let callback = Closure::wrap(Box::new(move || {
            if let Some(offset) = vertical_offset(&window_clone) {
                on_scroll(offset);
            }
        }) as Box<dyn FnMut()>);

        if let Err(err) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            warn!("Failed to register scroll listener: {:?}", err);
            return None;
        }

        Some(ScrollListener { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", err);
        }
    }
}
