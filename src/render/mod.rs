pub mod dispatch;
pub mod frame;
pub mod rasterize;
pub mod template;
