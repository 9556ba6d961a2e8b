//! Helpers shared by the swatchgrid front ends: reading colors from text and
//! loading the JSON settings file.

pub mod color_parsing;
pub mod settings;

pub use color_parsing::{ColorParseError, NAMED_COLORS, parse_color, parse_colors};
pub use settings::{SETTINGS_FILE_NAME, SETTINGS_PATH_ENV, Settings, SettingsError, SettingsPayload, default_settings_path};
