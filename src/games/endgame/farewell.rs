//! Farewell messages for eliminated languages.

use tracing::instrument;

/// Templates; `{}` is replaced by the language name.
const TEMPLATES: [&str; 12] = [
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-8 bytes of `name`.
fn fnv1a(name: &str) -> u32 {
    name.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Returns the farewell message for `language`.
///
/// The template is picked from a hash of the name, so the same language
/// always gets the same message.
#[instrument]
pub fn farewell(language: &str) -> String {
    let index = fnv1a(language) as usize % TEMPLATES.len();
    TEMPLATES[index].replacen("{}", language, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farewell_is_deterministic() {
        for name in ["HTML", "CSS", "JavaScript", "Ruby"] {
            assert_eq!(farewell(name), farewell(name));
        }
    }

    #[test]
    fn test_farewell_mentions_language() {
        for name in ["HTML", "Node.js", "TypeScript", ""] {
            let text = farewell(name);
            assert!(text.contains(name), "{text:?} should mention {name:?}");
            assert!(!text.contains("{}"));
        }
    }

    #[test]
    fn test_fnv1a_reference_values() {
        assert_eq!(fnv1a(""), 0x811c_9dc5);
        assert_eq!(fnv1a("a"), 0xe40c_292c);
    }

    #[test]
    fn test_farewell_uses_template() {
        let text = farewell("Python");
        assert!(
            TEMPLATES
                .iter()
                .any(|t| t.replacen("{}", "Python", 1) == text)
        );
    }
}
