mod app;

pub use app::{
    AppConfig, AppConfigError, DEFAULT_ROOT_DIR, GeneralConfig, ShortcutsConfig, ViewerConfig,
};
