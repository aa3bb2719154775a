pub mod constants;
pub mod gif_stuffs;
pub mod meta_stuffs;
pub mod misc;
pub mod palette_stuffs;
