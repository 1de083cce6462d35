pub mod output;
pub mod spatial;
pub mod spectral;

pub use output::GraphOutput;
pub use spatial::{grid_coordinates, knn, kwraps, kwraps3d};
pub use spectral::{fourier, laplacian};
