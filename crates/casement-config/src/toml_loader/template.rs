//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Casement Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[chrome]
# border_width = 26      # title-bar band height, 0-64
# border_base = 3        # resize border thickness, 0-16
# min_size = 150         # smallest content width/height, 1-2000

[placement]
# anchor_x = 100         # where windows mapped at (0,0) are placed
# anchor_y = 100         # must be >= chrome.border_width

[screen]
# width = 1920
# height = 1080

[bridge]
# backend = "127.0.0.1:7400"
# refresh_hz = 60        # 1-240
# coalesce_window_maps = false

[logging]
# filter = "casement=info"
"##
    .to_string()
}
