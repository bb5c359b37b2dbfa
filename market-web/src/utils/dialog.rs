//! Blocking browser dialogs.

/// Ask the user to confirm a destructive action. Defaults to "no" when the
/// window is unavailable.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}
