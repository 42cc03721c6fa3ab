//! Sender identity display helpers.

use sylk_messaging::ContactCache;

/// Resolve the name shown for a sender: contact cache first, then the
/// name carried on the message, then the raw URI.
pub fn resolve_display_name(
    contacts: &ContactCache,
    uri: &str,
    advertised: Option<&str>,
) -> String {
    if let Some(name) = contacts.get(uri) {
        return name.to_string();
    }
    advertised
        .map(str::to_string)
        .unwrap_or_else(|| uri.to_string())
}

/// First letter of a display name, uppercased, for the avatar disc.
pub fn avatar_letter(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Deterministic CSS color class for a sender URI.
pub fn avatar_color_class(uri: &str) -> &'static str {
    const CLASSES: [&str; 8] = [
        "avatar-sky", "avatar-rose", "avatar-amber", "avatar-mint",
        "avatar-violet", "avatar-coral", "avatar-teal", "avatar-slate",
    ];
    let sum: usize = uri.bytes().map(|b| b as usize).sum();
    CLASSES[sum % CLASSES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_display_name_precedence() {
        let mut contacts = ContactCache::new();
        contacts.insert("alice@example.com", "Alice A.");

        assert_eq!(
            resolve_display_name(&contacts, "alice@example.com", Some("alice")),
            "Alice A."
        );
        assert_eq!(
            resolve_display_name(&contacts, "bob@example.com", Some("Bob")),
            "Bob"
        );
        assert_eq!(
            resolve_display_name(&contacts, "carol@example.com", None),
            "carol@example.com"
        );
    }

    #[test]
    fn test_avatar_letter() {
        assert_eq!(avatar_letter("alice"), "A");
        assert_eq!(avatar_letter(""), "?");
    }

    #[test]
    fn test_avatar_color_is_stable() {
        let first = avatar_color_class("alice@example.com");
        let second = avatar_color_class("alice@example.com");
        assert_eq!(first, second);
    }
}
