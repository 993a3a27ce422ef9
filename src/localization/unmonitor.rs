//! Strings used by the unmonitor command.

/// Localized command name for registration. Must be lowercase without spaces.
pub fn name_localizations() -> [(&'static str, &'static str); 1] {
    [("de", "entfernen")]
}

/// Localized command description for registration.
pub fn description_localizations() -> [(&'static str, &'static str); 1] {
    [("de", "Beende die Überwachung des angegebenen Servers oder aller Server")]
}

/// Localized description of the `server` option for registration.
pub fn server_option_localizations() -> [(&'static str, &'static str); 1] {
    [("de", "Server IP-Adresse oder Spitzname")]
}

/// Reply when the guild has no monitored servers.
pub fn no_monitored_servers(locale: &str) -> &'static str {
    match locale {
        "de" => "In diesem Server werden keine Server überwacht!",
        _ => "There are no monitored servers in this guild!",
    }
}

/// Reply when no server was specified and the guild has no default server.
pub fn no_server_specified(locale: &str) -> &'static str {
    match locale {
        "de" => "Bitte gib einen Server an oder lege zuerst einen Standardserver fest!",
        _ => "Please specify a server, or set a default server first!",
    }
}

/// Reply when the given IP or nickname matches no monitored server.
pub fn not_monitored(locale: &str) -> &'static str {
    match locale {
        "de" => "Dieser Server wird nicht überwacht!",
        _ => "This server is not being monitored!",
    }
}

/// Reply when the target is the guild's default server.
pub fn cannot_remove_default(locale: &str) -> &'static str {
    match locale {
        "de" => {
            "Der Standardserver kann nicht entfernt werden. Bitte lege zuerst einen anderen Standardserver fest!"
        }
        _ => {
            "The default server cannot be unmonitored. Please set a different default server first!"
        }
    }
}

/// Reply when the bot lacks permissions on the server's category or channels.
pub fn permission_error(locale: &str) -> &'static str {
    match locale {
        "de" => {
            "Dem Bot fehlen die erforderlichen Kategorie- und/oder Kanalberechtigungen, um diesen Server zu entfernen!"
        }
        _ => {
            "The bot needs the required category and/or channel permissions before you can unmonitor this server!"
        }
    }
}

/// Reply when the server's database record could not be removed.
pub fn unmonitoring_error(locale: &str) -> &'static str {
    match locale {
        "de" => {
            "Beim Entfernen des Servers ist ein Fehler aufgetreten. Bitte versuche es später erneut!"
        }
        _ => "There was an error while unmonitoring the server. Please try again later!",
    }
}

/// Reply when some channels could not be deleted after deregistration.
pub fn deletion_error(locale: &str) -> &'static str {
    match locale {
        "de" => {
            "Beim Löschen einiger Kanäle ist ein Fehler aufgetreten. Bitte lösche sie manuell!"
        }
        _ => "There was an error while deleting some of the channels. Please delete them manually!",
    }
}

/// Reply when the server (or every server) was removed cleanly.
pub fn success_message(locale: &str) -> &'static str {
    match locale {
        "de" => "Der Server wurde erfolgreich entfernt.",
        _ => "The server has successfully been unmonitored.",
    }
}

/// Lead line of the consolidated guild-wide failure report.
pub fn batch_error_message(locale: &str) -> &'static str {
    match locale {
        "de" => "Beim Entfernen einiger Server ist ein Fehler aufgetreten!",
        _ => "There was an error while unmonitoring some of the servers!",
    }
}

/// Introduces the permission-blocked section of the guild-wide report.
pub fn batch_not_unmonitored(locale: &str) -> &'static str {
    match locale {
        "de" => {
            "Die folgenden Server benötigen die erforderlichen Kategorie- und/oder Kanalberechtigungen, bevor sie entfernt werden können:"
        }
        _ => {
            "The following servers need the required category and/or channel permissions before you can unmonitor them:"
        }
    }
}

/// Introduces the channels-remain section of the guild-wide report.
pub fn batch_not_deleted(locale: &str) -> &'static str {
    match locale {
        "de" => {
            "Die folgenden Server wurden entfernt, aber ihre Kanäle müssen manuell gelöscht werden:"
        }
        _ => {
            "The following servers were unmonitored, but the channels need to be removed manually:"
        }
    }
}
