//! Scroll controller for the transcript pane
//!
//! Narrow interface the rest of the core calls without knowing anything
//! about the rendering surface: center one message, or pin the pane to the
//! bottom. The browser implementation waits a beat for the DOM to settle
//! before scrolling, same as the auto-scroll in any chat view. Off-wasm
//! these are no-ops.

/// DOM id prefix for rendered transcript rows.
pub const MESSAGE_ELEMENT_PREFIX: &str = "chat-msg-";

/// Element id for the message row of `chat_id`.
pub fn message_element_id(chat_id: i64) -> String {
    format!("{MESSAGE_ELEMENT_PREFIX}{chat_id}")
}

/// Smooth-scroll the message element into the center of the transcript.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_message(chat_id: i64) {
    let script = format!(
        r#"
        setTimeout(() => {{
            const target = document.getElementById('{id}');
            if (target) {{
                target.scrollIntoView({{ behavior: 'smooth', block: 'center' }});
            }}
        }}, 100);
        "#,
        id = message_element_id(chat_id)
    );
    let _ = js_sys::eval(&script);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_message(chat_id: i64) {
    let _ = chat_id;
}

/// Jump the transcript container to its newest message.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_bottom() {
    let script = r#"
        setTimeout(() => {
            const pane = document.querySelector('.c-transcript__messages');
            if (pane) {
                pane.scrollTop = pane.scrollHeight;
            }
        }, 100);
    "#;
    let _ = js_sys::eval(script);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_bottom() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_element_id() {
        assert_eq!(message_element_id(99), "chat-msg-99");
    }
}
