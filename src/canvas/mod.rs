pub mod renderer;
pub mod shapes;
pub mod surface;
