pub mod dot;
pub mod html;
pub mod palette;
pub mod svg;
