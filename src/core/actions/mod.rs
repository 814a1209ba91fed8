pub mod fractal_job;
