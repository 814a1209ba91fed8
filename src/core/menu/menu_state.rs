use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::menu::menu_layout::{MenuItem, MenuLayout, MenuLayoutError};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenMenu {
    pub anchor: Point,
    pub items: Vec<MenuItem>,
    pub hovered_index: Option<usize>,
}

impl OpenMenu {
    fn item_at(&self, pos: Point) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.rect.contains_point(pos))
    }
}

/// Context menu for picking the fractal family.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open(OpenMenu),
}

impl MenuState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Opens the menu at `pos`, replacing any menu already open.
    ///
    /// The state is left untouched when the layout cannot produce the items.
    pub fn secondary_trigger(
        &mut self,
        pos: Point,
        layout: &MenuLayout,
    ) -> Result<(), MenuLayoutError> {
        let items = layout.items_at(pos)?;
        let mut menu = OpenMenu {
            anchor: pos,
            items,
            hovered_index: None,
        };
        menu.hovered_index = menu.item_at(pos);

        debug!(x = pos.x, y = pos.y, reopened = self.is_open(), "menu opened");

        *self = Self::Open(menu);

        Ok(())
    }

    pub fn pointer_moved(&mut self, pos: Point) {
        if let Self::Open(menu) = self {
            menu.hovered_index = menu.item_at(pos);
        }
    }

    /// Closes the menu and returns the kind under `pos`, if any.
    pub fn primary_trigger(&mut self, pos: Point) -> Option<FractalKind> {
        let Self::Open(menu) = std::mem::take(self) else {
            return None;
        };

        let selection = menu.item_at(pos).map(|index| menu.items[index].kind);

        match selection {
            Some(kind) => info!(kind = %kind, "menu selection"),
            None => debug!("menu dismissed without a selection"),
        }

        selection
    }
}
