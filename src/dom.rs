//! Browser wiring: element lookup, event listeners, and [`Action`] execution.
//!
//! ERROR HANDLING
//! ==============
//! Everything in this module degrades gracefully. The enhancements this
//! crate ships are optional, so a missing element or a failed browser call
//! logs a warning and leaves the rest of the page intact; nothing here may
//! break page rendering.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element};

use crate::consts::{
    COMMENT_BUTTON_ID, COMMENTS_ANCHOR, EMBED_SCRIPT_ID, EMBED_SCRIPT_URL, SCROLL_RETRY_DELAY_MS,
    SCROLL_RETRY_LIMIT, THEME_BUTTON_ID,
};
use crate::net;
use crate::theme;
use crate::widget::{Action, CommentWidget};

/// Wire up both page behaviors. Runs once, when the module is instantiated.
pub fn boot() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"blog-client logger was already installed".into());
    }

    let dark = theme::read_preference();
    theme::apply(dark);
    wire_theme_button(dark);

    init_comment_widget();
}

// ── Theme toggle ────────────────────────────────────────────────

fn wire_theme_button(initial: bool) {
    let Some(button) = element_by_id(THEME_BUTTON_ID) else {
        log::warn!("no #{THEME_BUTTON_ID} on this page; theme toggle disabled");
        return;
    };

    let dark = Rc::new(Cell::new(initial));
    let handler = Closure::<dyn FnMut()>::new(move || {
        dark.set(theme::toggle(dark.get()));
    });
    if button
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach the theme toggle listener");
    }
    // The listener lives for the whole page; its closure is never reclaimed.
    handler.forget();
}

// ── Comment widget ──────────────────────────────────────────────

fn init_comment_widget() {
    let widget = Rc::new(RefCell::new(CommentWidget::new()));
    let actions = widget.borrow_mut().on_load(&current_fragment());
    run_actions(&widget, actions);
    spawn_count_refresh(widget);
}

fn run_actions(widget: &Rc<RefCell<CommentWidget>>, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::MountComments => mount_embed(),
            Action::HideTrigger => hide_trigger(),
            Action::ScrollToComments => spawn_scroll_to_comments(),
            Action::ArmTrigger => arm_trigger(widget),
            Action::SetTriggerLabel(label) => set_trigger_label(&label),
        }
    }
}

/// Inject the comment embed script. The widget state machine already
/// guarantees a single mount per page load; the id check additionally skips
/// the injection when the page carries a stale embed tag of its own.
fn mount_embed() {
    let Some(document) = document() else {
        return;
    };
    if document.get_element_by_id(EMBED_SCRIPT_ID).is_some() {
        return;
    }

    let script = match document.create_element("script") {
        Ok(element) => element,
        Err(_) => {
            log::warn!("failed to create the comment embed script element");
            return;
        }
    };
    if script.set_attribute("id", EMBED_SCRIPT_ID).is_err()
        || script.set_attribute("src", EMBED_SCRIPT_URL).is_err()
        || script.set_attribute("defer", "").is_err()
    {
        log::warn!("failed to configure the comment embed script element");
        return;
    }

    let Some(body) = document.body() else {
        log::warn!("no <body> to mount the comment embed into");
        return;
    };
    if body.append_child(&script).is_err() {
        log::warn!("failed to append the comment embed script");
    }
}

/// The button is removed outright rather than disabled, so a second
/// activation attempt has nothing left to click.
fn hide_trigger() {
    if let Some(button) = element_by_id(COMMENT_BUTTON_ID) {
        button.remove();
    }
}

fn arm_trigger(widget: &Rc<RefCell<CommentWidget>>) {
    let Some(button) = element_by_id(COMMENT_BUTTON_ID) else {
        log::warn!("no #{COMMENT_BUTTON_ID} on this page; comments stay collapsed");
        return;
    };

    let widget = Rc::clone(widget);
    let handler = Closure::<dyn FnMut()>::new(move || {
        let actions = widget.borrow_mut().on_trigger_click();
        run_actions(&widget, actions);
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if button
        .add_event_listener_with_callback_and_add_event_listener_options(
            "click",
            handler.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        log::warn!("failed to attach the comment trigger listener");
    }
    handler.forget();
}

fn set_trigger_label(label: &str) {
    if let Some(button) = element_by_id(COMMENT_BUTTON_ID) {
        button.set_text_content(Some(label));
    }
}

/// Scroll the comments section into view. The embed builds its DOM
/// asynchronously, so the element may not exist yet when a deep link
/// activates; the lookup is retried on a short timer before giving up.
fn spawn_scroll_to_comments() {
    wasm_bindgen_futures::spawn_local(async {
        for _ in 0..SCROLL_RETRY_LIMIT {
            if let Some(section) = element_by_id(COMMENTS_ANCHOR) {
                section.scroll_into_view();
                return;
            }
            gloo_timers::future::sleep(Duration::from_millis(SCROLL_RETRY_DELAY_MS)).await;
        }
        log::warn!("comments section never appeared; skipping the deep-link scroll");
    });
}

/// Fetch the page's comment count in the background and relabel the trigger
/// once it arrives. The widget may have activated in the meantime; the
/// state machine drops the relabel in that case.
fn spawn_count_refresh(widget: Rc<RefCell<CommentWidget>>) {
    wasm_bindgen_futures::spawn_local(async move {
        let Some(path) = current_path() else {
            return;
        };
        if let Some(count) = net::fetch_comment_count(&path).await {
            let actions = widget.borrow_mut().on_count(count);
            run_actions(&widget, actions);
        }
    });
}

// ── Browser lookups ─────────────────────────────────────────────

/// The URL fragment of the current page load, without the leading `#`.
fn current_fragment() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    match window.location().hash() {
        Ok(hash) => hash.trim_start_matches('#').to_owned(),
        Err(_) => String::new(),
    }
}

fn current_path() -> Option<String> {
    let window = web_sys::window()?;
    match window.location().pathname() {
        Ok(path) => Some(path),
        Err(_) => None,
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}
