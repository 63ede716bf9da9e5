//! Fixed-layout trace lines.

use arc_swap::ArcSwap;
use msgrepo_core::Locale;
use std::fmt::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Minimum width of the right-aligned id column.
pub const TRACE_ID_WIDTH: usize = 7;

/// Width of the left-justified user column.
pub const TRACE_USER_WIDTH: usize = 20;

/// Text rendered for ids that are not registered.
pub const UNKNOWN_MESSAGE_TEXT: &str = "Unable to return real message. ID is unknown";

/// Mutable settings shared by every trace render of one repository.
#[derive(Debug)]
pub struct TraceSettings {
    locale: ArcSwap<Locale>,
    show_current_user: AtomicBool,
}

impl TraceSettings {
    pub fn new(locale: Locale, show_current_user: bool) -> Self {
        Self {
            locale: ArcSwap::from_pointee(locale),
            show_current_user: AtomicBool::new(show_current_user),
        }
    }

    pub fn locale(&self) -> Arc<Locale> {
        self.locale.load_full()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.store(Arc::new(locale));
    }

    pub fn show_current_user(&self) -> bool {
        self.show_current_user.load(Ordering::Relaxed)
    }

    pub fn set_show_current_user(&self, show: bool) {
        self.show_current_user.store(show, Ordering::Relaxed);
    }
}

/// Lays out one trace line.
///
/// `user` is `Some` exactly when the user column is enabled; an unknown user
/// is passed as `Some("")` and still occupies the column.
pub fn format_trace_line(id: u32, user: Option<&str>, text: &str) -> String {
    let mut line = String::with_capacity(TRACE_ID_WIDTH + TRACE_USER_WIDTH + text.len() + 3);
    let _ = write!(line, "[{id:>TRACE_ID_WIDTH$}] ");
    if let Some(user) = user {
        let _ = write!(line, "{user:<TRACE_USER_WIDTH$}");
    }
    line.push_str(text);
    line
}

/// The text used in place of a message whose id is unknown.
pub fn unknown_message_fallback(id: u32) -> String {
    format!("[ID-{id}] {UNKNOWN_MESSAGE_TEXT}")
}
