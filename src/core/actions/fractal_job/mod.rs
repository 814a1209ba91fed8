#[allow(clippy::module_inception)]
pub mod fractal_job;
pub mod ports;

pub use fractal_job::{FractalJob, JobStatus};
