pub mod color_table;
pub mod frame;
pub mod grid_sampler;
pub mod hsv;
pub mod patch;
pub mod pixel;
