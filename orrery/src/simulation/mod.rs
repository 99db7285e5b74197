pub mod vector;
pub mod body;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod diagnostics;
