//! Strings used by the interaction dispatcher.

/// Cooldown denial reply, rendering the expiry as a Discord timestamp.
///
/// # Arguments
/// - `locale` - Locale reported by the interaction
/// - `retry_at` - Unix timestamp at which the user may retry
pub fn cooldown_message(locale: &str, retry_at: i64) -> String {
    match locale {
        "de" => format!(
            "Bitte warten. Du kannst diesen Befehl erst um <t:{}:T> wieder verwenden.",
            retry_at
        ),
        _ => format!(
            "Please wait. You can use this command again at <t:{}:T>.",
            retry_at
        ),
    }
}

/// Generic reply when a command handler fails for any unexpected reason.
pub fn error_message(locale: &str) -> &'static str {
    match locale {
        "de" => {
            "Beim Ausführen dieses Befehls ist ein Fehler aufgetreten! Bitte versuche es in ein paar Minuten erneut. Wenn das Problem weiterhin besteht, öffne bitte ein Issue auf GitHub."
        }
        _ => {
            "There was an error while executing this command! Please try again in a few minutes. If the problem persists, please open an issue on GitHub."
        }
    }
}
