//! Process-wide SDL initialization and logging
//!
//! SDL is initialized once per process, the first time the addon is
//! loaded. Each subsystem is brought up on its own so that a machine
//! without a camera backend can still open windows and play audio.
//! Teardown (`SDL_Quit`) is left to process exit.

use std::sync::OnceLock;

use crate::ffi::{
  stdinc::{
    SDL_Init, SDL_SetHint, SDL_WasInit, SDL_HINT_NO_SIGNAL_HANDLERS, SDL_INIT_AUDIO,
    SDL_INIT_CAMERA, SDL_INIT_EVENTS, SDL_INIT_VIDEO,
  },
  SDL_InitFlags, SdlError,
};

use super::{MediaError, MediaResult};

/// Comma separated subsystem list, e.g. `video,audio`
pub const SUBSYSTEMS_ENV: &str = "SDL_NODE_SUBSYSTEMS";
/// `1`/`true` lets SDL install its SIGINT/SIGTERM handlers
pub const SIGNAL_HANDLERS_ENV: &str = "SDL_NODE_SIGNAL_HANDLERS";
/// `EnvFilter` directive; logging stays off when unset
pub const LOG_ENV: &str = "SDL_NODE_LOG";

const SUBSYSTEM_NAMES: [(&str, SDL_InitFlags); 4] = [
  ("video", SDL_INIT_VIDEO),
  ("audio", SDL_INIT_AUDIO),
  ("camera", SDL_INIT_CAMERA),
  ("events", SDL_INIT_EVENTS),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
  pub subsystems: SDL_InitFlags,
  /// Node owns the process signals, so SDL stays out of them by default
  pub install_signal_handlers: bool,
}

impl Default for RuntimeConfig {
  fn default() -> Self {
    Self {
      subsystems: SDL_INIT_VIDEO | SDL_INIT_AUDIO | SDL_INIT_CAMERA,
      install_signal_handlers: false,
    }
  }
}

impl RuntimeConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build a config from a variable lookup. Malformed values are logged and
  /// replaced by the default.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let mut config = Self::default();

    if let Some(value) = lookup(SUBSYSTEMS_ENV) {
      match parse_subsystems(&value) {
        Ok(flags) => config.subsystems = flags,
        Err(err) => {
          tracing::warn!(target: "sdl", "ignoring {}: {}", SUBSYSTEMS_ENV, err);
        }
      }
    }

    if let Some(value) = lookup(SIGNAL_HANDLERS_ENV) {
      config.install_signal_handlers = matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
      );
    }

    config
  }
}

/// Parse a comma separated subsystem list into init flags
pub fn parse_subsystems(value: &str) -> MediaResult<SDL_InitFlags> {
  let mut flags: SDL_InitFlags = 0;
  for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
    let token = token.to_ascii_lowercase();
    let flag = SUBSYSTEM_NAMES
      .iter()
      .find(|(name, _)| *name == token)
      .map(|(_, flag)| *flag)
      .ok_or_else(|| MediaError::InvalidArgument(format!("unknown subsystem '{}'", token)))?;
    flags |= flag;
  }
  Ok(flags)
}

/// What the one-time initialization managed to bring up
#[derive(Debug, Default)]
pub struct InitReport {
  pub initialized: SDL_InitFlags,
  pub failures: Vec<(&'static str, SdlError)>,
}

static INIT: OnceLock<InitReport> = OnceLock::new();

/// Initialize SDL on first call; later calls return the first report
/// regardless of `config`
pub fn ensure_initialized(config: &RuntimeConfig) -> &'static InitReport {
  INIT.get_or_init(|| initialize(config))
}

fn initialize(config: &RuntimeConfig) -> InitReport {
  if !config.install_signal_handlers {
    let ok = unsafe { SDL_SetHint(SDL_HINT_NO_SIGNAL_HANDLERS.as_ptr(), c"1".as_ptr()) };
    if !ok {
      tracing::warn!(target: "sdl", "could not set SDL_NO_SIGNAL_HANDLERS");
    }
  }

  let mut report = InitReport::default();
  for (name, flag) in SUBSYSTEM_NAMES {
    if config.subsystems & flag == 0 {
      continue;
    }
    if unsafe { SDL_Init(flag) } {
      report.initialized |= flag;
    } else {
      let err = SdlError::last_or(name);
      tracing::warn!(target: "sdl", subsystem = name, "SDL_Init failed: {}", err);
      report.failures.push((name, err));
    }
  }

  tracing::info!(
    target: "sdl",
    initialized = format_args!("{:#x}", report.initialized),
    was_init = format_args!("{:#x}", unsafe { SDL_WasInit(0) }),
    "SDL runtime ready"
  );
  report
}

/// Install a stderr subscriber when `SDL_NODE_LOG` is set. Does nothing if
/// the host already installed a global subscriber.
pub fn init_logging() {
  let Some(directive) = std::env::var(LOG_ENV).ok().filter(|v| !v.trim().is_empty()) else {
    return;
  };
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::new(directive))
    .with_writer(std::io::stderr)
    .try_init();
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn test_default_config() {
    let config = RuntimeConfig::from_lookup(lookup(&[]));
    assert_eq!(config, RuntimeConfig::default());
    assert_eq!(
      config.subsystems,
      SDL_INIT_VIDEO | SDL_INIT_AUDIO | SDL_INIT_CAMERA
    );
    assert!(!config.install_signal_handlers);
  }

  #[test]
  fn test_parse_subsystems() {
    assert_eq!(parse_subsystems("audio").unwrap(), SDL_INIT_AUDIO);
    assert_eq!(
      parse_subsystems(" Video , events,").unwrap(),
      SDL_INIT_VIDEO | SDL_INIT_EVENTS
    );
    assert_eq!(parse_subsystems("").unwrap(), 0);
    assert!(parse_subsystems("audio,joystick").is_err());
  }

  #[test]
  fn test_env_overrides() {
    let config = RuntimeConfig::from_lookup(lookup(&[
      (SUBSYSTEMS_ENV, "audio"),
      (SIGNAL_HANDLERS_ENV, "true"),
    ]));
    assert_eq!(config.subsystems, SDL_INIT_AUDIO);
    assert!(config.install_signal_handlers);
  }

  #[test]
  fn test_malformed_subsystems_fall_back() {
    let config = RuntimeConfig::from_lookup(lookup(&[(SUBSYSTEMS_ENV, "audio,bogus")]));
    assert_eq!(config.subsystems, RuntimeConfig::default().subsystems);
  }

  #[test]
  fn test_init_is_latched() {
    let first = ensure_initialized(&RuntimeConfig {
      subsystems: SDL_INIT_EVENTS,
      install_signal_handlers: false,
    });
    let second = ensure_initialized(&RuntimeConfig::default());
    assert!(std::ptr::eq(first, second));
  }
}
