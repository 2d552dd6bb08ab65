pub mod display_list;
pub mod draw;
pub mod painter;
pub mod raster;
pub mod tokens;
