//! Blocking browser dialogs
//!
//! Delete failures interrupt with a modal alert instead of the dismissible
//! banner used for fetch failures, so the user cannot miss that the row
//! they just confirmed away is still there. Off-wasm this is a no-op, same
//! as the scroll controller.

/// Show a blocking alert with the given message.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    let _ = message;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_is_a_noop_off_wasm() {
        alert("대화를 삭제하지 못했습니다");
    }
}
