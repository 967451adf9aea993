pub mod integrator;
pub mod particles;
pub mod proximity;
