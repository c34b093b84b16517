//! `.coolmap.toml` configuration.
//!
//! Every setting is optional. The file only chooses starting values for the
//! controls and report preferences; it never changes the scoring model.

mod core;
mod loader;

pub use self::core::{CoolmapConfig, IndicatorsConfig, OutputConfig, PrototypeConfig, ZoneConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    resolve_config, user_config_path, CONFIG_FILE_NAME,
};

/// Contents written by `coolmap init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# coolmap configuration
#
# Starting values for the estimator controls. Values outside a control's
# range are clamped.

[indicators]
aspect_ratio = 1.5                 # 0.5 - 4.0
sky_view_factor = 0.35             # 0.1 - 1.0
permeable_surface_fraction = 0.45  # 0.0 - 1.0
floor_area_ratio = 2.5             # 0.5 - 5.0
ground_space_index = 0.6           # 0.1 - 1.0

[zone]
# lcz1, lcz2, lcz3, lcz6, lcz8, lczb, lczd or a full label
lcz = "LCZ 1 - Compact High-Rise"

[prototype]
enabled = false
building_density = 60  # 10 - 100 %
vegetation = 30        # 0 - 100 %
height_sd = 5          # 0 - 20 m

[output]
format = "terminal"    # terminal, json, markdown
plain = false
explain = false
"#;
