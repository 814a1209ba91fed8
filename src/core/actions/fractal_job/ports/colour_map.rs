use crate::core::data::colour::Colour;

pub trait ColourMap: Send + Sync {
    fn map(&self, escape_step: u32) -> Colour;

    fn display_name(&self) -> &str;
}
