/// `.frm` plus the numbered and lettered variants.
pub const FRM_EXTENSIONS: &[&str] = &[
    "frm", "fr0", "fr1", "fr2", "fr3", "fr4", "fr5", "fr6", "fr7", "fr8", "fr9", "frx", "frz",
];

pub const CONFIG_FILE_NAME: &str = "frm2gif.toml";

pub const DIRECTION_SUFFIX: &str = "__dir";

pub const DEFAULT_FPS_SCALE: f64 = 1.0;

// 768 bytes of RGB followed by a 4 byte trailer
pub const PADDED_BINARY_PALETTE_LENGTH: usize = 772;
