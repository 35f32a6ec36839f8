use log::LevelFilter;

/// Sets up `env_logger` with `level` as default. `RUST_LOG` still wins.
pub fn init(level: LevelFilter) {
  env_logger::Builder::new()
    .filter_level(level)
    .parse_default_env()
    .init();
}

/// Logs why a value is missing before handing the fallback decision to
/// the caller.
pub trait LogExt<T> {
  fn log_debug(self, snippet: &str) -> Option<T>;
  fn log_warn(self, snippet: &str) -> Option<T>;
}

impl<T> LogExt<T> for Option<T> {
  #[track_caller]
  fn log_debug(self, msg: &str) -> Option<T> {
    if self.is_none() {
      let location = std::panic::Location::caller();
      log::debug!("[{location}] {msg}");
    }

    self
  }

  #[track_caller]
  fn log_warn(self, msg: &str) -> Option<T> {
    if self.is_none() {
      let location = std::panic::Location::caller();
      log::warn!("[{location}] {msg}");
    }

    self
  }
}

impl<T, E> LogExt<T> for Result<T, E> where E: std::fmt::Display {
  #[track_caller]
  fn log_debug(self, msg: &str) -> Option<T> {
    match self {
      Ok(value) => Some(value),
      Err(error) => {
        let location = std::panic::Location::caller();
        log::debug!("[{location}] {msg}: {error}");

        None
      }
    }
  }

  #[track_caller]
  fn log_warn(self, msg: &str) -> Option<T> {
    match self {
      Ok(value) => Some(value),
      Err(error) => {
        let location = std::panic::Location::caller();
        log::warn!("[{location}] {msg}: {error}");

        None
      }
    }
  }
}
