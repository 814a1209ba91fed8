pub mod greyscale_bands;
