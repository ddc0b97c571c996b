use dioxus::prelude::*;
use tracing::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use folio_common::config::HeaderConfig;

// smooth-scroll the viewport to the section with the given id
//
// a missing target is not an error: the header links are static, and a
// section that isn't on the current route simply has nothing to scroll to
pub fn scroll_to_section(id: &str) {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    let Some(target) = target else {
        debug!(id, "no section to scroll to");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// reports window.scrollY back to rust on every scroll event; the promise at the
// end keeps the channel open for the lifetime of the page
const SCROLL_REPORTER: &str = r#"
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener("scroll", report, { passive: true });
    report();
    await new Promise(() => {});
"#;

// true once the page has scrolled past the header threshold
//
// the signal is only written when the answer changes, so scrolling doesn't
// re-render the header on every frame
pub fn use_scrolled(header: HeaderConfig) -> Signal<bool> {
    let mut scrolled = use_signal(|| false);

    use_future(move || {
        let header = header.clone();
        async move {
            let mut reporter = document::eval(SCROLL_REPORTER);
            while let Ok(scroll_y) = reporter.recv::<f64>().await {
                let now = header.is_scrolled(scroll_y);
                if now != *scrolled.peek() {
                    scrolled.set(now);
                }
            }
            debug!("scroll reporter closed");
        }
    });

    scrolled
}
