pub mod config_helper;
pub mod random_picker;
