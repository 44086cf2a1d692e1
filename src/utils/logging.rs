use tracing::{debug, error, info, warn};

/// Logs the start of a user action with consistent format
pub fn log_action_start(action: &str, user: &str, user_id: u64, chat_id: i64) {
    info!(
        "ACTION_START: {} by {}({}) in chat {}",
        action, user, user_id, chat_id
    );
}

/// Logs action completion with consistent format
pub fn log_action_success(action: &str, user: &str, user_id: u64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "ACTION_SUCCESS: {} by {}({}) in chat {} - {}",
            action, user, user_id, chat_id, d
        ),
        None => info!(
            "ACTION_SUCCESS: {} by {}({}) in chat {}",
            action, user, user_id, chat_id
        ),
    }
}

/// Logs action errors with consistent format
pub fn log_action_error(action: &str, user: &str, user_id: u64, chat_id: i64, error: &str) {
    error!(
        "ACTION_ERROR: {} by {}({}) in chat {} - {}",
        action, user, user_id, chat_id, error
    );
}

/// Logs persistence operations with consistent format
pub fn log_store_operation(operation: &str, path: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("STORE_OP: {} on {} - {}", operation, path, d),
        None => debug!("STORE_OP: {} on {}", operation, path),
    }
}

/// Logs persistence errors with consistent format
pub fn log_store_error(operation: &str, path: &str, error: &str) {
    warn!("STORE_ERROR: {} on {} failed: {}", operation, path, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
