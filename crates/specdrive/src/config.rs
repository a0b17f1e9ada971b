//! Runtime configuration.
//!
//! The module currently exposes the `suggest_steps` flag controlling whether
//! missing-step diagnostics include a ready-to-paste handler stub.

use std::sync::atomic::{AtomicU8, Ordering};

const OVERRIDE_UNSET: u8 = 0;
const OVERRIDE_FALSE: u8 = 1;
const OVERRIDE_TRUE: u8 = 2;

static SUGGEST_STEPS_OVERRIDE: AtomicU8 = AtomicU8::new(OVERRIDE_UNSET);

fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "Yes" | "on" | "ON" | "On" => Some(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "No" | "off" | "OFF" | "Off" => {
            Some(false)
        }
        _ => None,
    }
}

fn env_suggest_steps() -> Option<bool> {
    std::env::var("SPECDRIVE_SUGGEST")
        .ok()
        .as_deref()
        .and_then(parse_env_bool)
}

fn override_state() -> Option<bool> {
    match SUGGEST_STEPS_OVERRIDE.load(Ordering::Relaxed) {
        OVERRIDE_FALSE => Some(false),
        OVERRIDE_TRUE => Some(true),
        _ => None,
    }
}

/// Determine whether missing-step suggestions should be emitted.
///
/// Defaults to `true`; the `SPECDRIVE_SUGGEST` environment variable or an
/// in-process override can turn the stubs off.
#[must_use]
pub fn suggest_steps() -> bool {
    override_state().or_else(env_suggest_steps).unwrap_or(true)
}

/// Override the `suggest_steps` flag for the current process.
///
/// Tests may call [`clear_suggest_steps_override`] to restore environment
/// driven behaviour after toggling the override.
pub fn set_suggest_steps(enabled: bool) {
    let value = if enabled {
        OVERRIDE_TRUE
    } else {
        OVERRIDE_FALSE
    };
    SUGGEST_STEPS_OVERRIDE.store(value, Ordering::Relaxed);
}

/// Remove any in-process override for the `suggest_steps` flag.
pub fn clear_suggest_steps_override() {
    SUGGEST_STEPS_OVERRIDE.store(OVERRIDE_UNSET, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn default_is_true() {
        clear_suggest_steps_override();
        assert!(suggest_steps());
    }

    #[test]
    #[serial]
    fn override_sets_flag() {
        clear_suggest_steps_override();
        set_suggest_steps(false);
        assert!(!suggest_steps());
        set_suggest_steps(true);
        assert!(suggest_steps());
        clear_suggest_steps_override();
    }

    #[test]
    fn parse_env_bool_understands_common_values() {
        for truthy in ["1", "true", "Yes", "ON"] {
            assert_eq!(parse_env_bool(truthy), Some(true), "{truthy} should be truthy");
        }
        for falsy in ["0", "false", "No", "OFF"] {
            assert_eq!(parse_env_bool(falsy), Some(false), "{falsy} should be falsy");
        }
        assert_eq!(parse_env_bool("maybe"), None);
    }
}
