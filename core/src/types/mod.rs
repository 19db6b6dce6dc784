pub(crate) mod config;
pub use config::{
    AppConfig, AppConfigError, DEFAULT_ROOT_DIR, GeneralConfig, ShortcutsConfig, ViewerConfig,
};

pub(crate) mod file_name;
pub use file_name::{FileName, FileNameError, MAX_FILE_NAME_LENGTH};
