pub mod memory_canvas;
