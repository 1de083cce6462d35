pub mod fourier;
pub mod laplacian;

pub use fourier::fourier;
pub use laplacian::laplacian;
