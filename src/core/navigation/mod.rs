pub mod viewport_stack;
