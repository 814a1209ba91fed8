use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKind;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLayoutError {
    ItemTooSmall {
        item_width: u32,
        item_height: u32,
    },
    DoesNotFit {
        menu_width: u32,
        menu_height: u32,
        bounds_width: u32,
        bounds_height: u32,
    },
    Item(PixelRectError),
}

impl fmt::Display for MenuLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemTooSmall {
                item_width,
                item_height,
            } => {
                write!(
                    f,
                    "menu items must be at least 2x2 pixels: {}x{}",
                    item_width, item_height
                )
            }
            Self::DoesNotFit {
                menu_width,
                menu_height,
                bounds_width,
                bounds_height,
            } => {
                write!(
                    f,
                    "menu of {}x{} does not fit in a {}x{} raster",
                    menu_width, menu_height, bounds_width, bounds_height
                )
            }
            Self::Item(err) => write!(f, "invalid menu item rect: {}", err),
        }
    }
}

impl Error for MenuLayoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Item(err) => Some(err),
            Self::ItemTooSmall { .. } | Self::DoesNotFit { .. } => None,
        }
    }
}

impl From<PixelRectError> for MenuLayoutError {
    fn from(err: PixelRectError) -> Self {
        Self::Item(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub kind: FractalKind,
    pub rect: PixelRect,
}

/// Geometry of the fractal picker: one fixed-size row per [`FractalKind`],
/// stacked vertically and kept inside the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    item_width: u32,
    item_height: u32,
    bounds: PixelRect,
}

impl MenuLayout {
    pub fn new(item_width: u32, item_height: u32, bounds: PixelRect) -> Result<Self, MenuLayoutError> {
        if item_width < 2 || item_height < 2 {
            return Err(MenuLayoutError::ItemTooSmall {
                item_width,
                item_height,
            });
        }

        let menu_height = item_height.saturating_mul(FractalKind::ALL.len() as u32);

        if item_width > bounds.width() || menu_height > bounds.height() {
            return Err(MenuLayoutError::DoesNotFit {
                menu_width: item_width,
                menu_height,
                bounds_width: bounds.width(),
                bounds_height: bounds.height(),
            });
        }

        Ok(Self {
            item_width,
            item_height,
            bounds,
        })
    }

    #[must_use]
    pub fn item_width(&self) -> u32 {
        self.item_width
    }

    #[must_use]
    pub fn item_height(&self) -> u32 {
        self.item_height
    }

    #[must_use]
    pub fn menu_height(&self) -> u32 {
        self.item_height * FractalKind::ALL.len() as u32
    }

    /// Top-left corner of a menu opened at `pos`.
    ///
    /// A menu that would overflow the right or bottom edge flips to the other
    /// side of the pointer, and never starts above or left of the raster.
    #[must_use]
    pub fn origin_for(&self, pos: Point) -> Point {
        let top_left = self.bounds.top_left();
        let bottom_right = self.bounds.bottom_right();

        let pos = Point {
            x: pos.x.clamp(top_left.x, bottom_right.x),
            y: pos.y.clamp(top_left.y, bottom_right.y),
        };

        let place = |start: i32, length: u32, low: i32, high: i32| -> i32 {
            let length = length as i32;
            let flipped = if start + length > high + 1 {
                start - length
            } else {
                start
            };

            flipped.max(low)
        };

        Point {
            x: place(pos.x, self.item_width, top_left.x, bottom_right.x),
            y: place(pos.y, self.menu_height(), top_left.y, bottom_right.y),
        }
    }

    /// Item rects for a menu opened at `pos`, in [`FractalKind::ALL`] order.
    pub fn items_at(&self, pos: Point) -> Result<Vec<MenuItem>, MenuLayoutError> {
        let origin = self.origin_for(pos);

        FractalKind::ALL
            .iter()
            .enumerate()
            .map(|(index, &kind)| {
                let item_origin = Point {
                    x: origin.x,
                    y: origin.y + (index as u32 * self.item_height) as i32,
                };
                let rect =
                    PixelRect::from_origin_and_size(item_origin, self.item_width, self.item_height)?;

                Ok(MenuItem {
                    label: kind.menu_label(),
                    kind,
                    rect,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_layout() -> MenuLayout {
        MenuLayout::new(260, 32, PixelRect::with_size(1200, 850).unwrap()).unwrap()
    }

    #[test]
    fn test_rejects_tiny_items() {
        let bounds = PixelRect::with_size(100, 100).unwrap();

        assert_eq!(
            MenuLayout::new(1, 32, bounds),
            Err(MenuLayoutError::ItemTooSmall {
                item_width: 1,
                item_height: 32
            })
        );
    }

    #[test]
    fn test_rejects_menu_larger_than_raster() {
        let bounds = PixelRect::with_size(200, 60).unwrap();

        assert_eq!(
            MenuLayout::new(100, 32, bounds),
            Err(MenuLayoutError::DoesNotFit {
                menu_width: 100,
                menu_height: 64,
                bounds_width: 200,
                bounds_height: 60
            })
        );
    }

    #[test]
    fn test_items_stack_below_pointer() {
        let items = create_layout().items_at(Point::new(100, 200)).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Mandelbrot fractal");
        assert_eq!(items[0].kind, FractalKind::Mandelbrot);
        assert_eq!(items[0].rect.top_left(), Point::new(100, 200));
        assert_eq!(items[0].rect.bottom_right(), Point::new(359, 231));
        assert_eq!(items[1].label, "Julia fractal");
        assert_eq!(items[1].rect.top_left(), Point::new(100, 232));
        assert_eq!(items[1].rect.bottom_right(), Point::new(359, 263));
    }

    #[test]
    fn test_flips_left_and_up_near_bottom_right() {
        let origin = create_layout().origin_for(Point::new(1100, 820));

        assert_eq!(origin, Point::new(840, 756));
    }

    #[test]
    fn test_exact_fit_does_not_flip() {
        let origin = create_layout().origin_for(Point::new(940, 786));

        assert_eq!(origin, Point::new(940, 786));
    }

    #[test]
    fn test_flip_never_goes_negative() {
        let bounds = PixelRect::with_size(300, 100).unwrap();
        let layout = MenuLayout::new(260, 32, bounds).unwrap();

        assert_eq!(layout.origin_for(Point::new(100, 50)), Point::new(0, 0));
    }

    #[test]
    fn test_items_stay_inside_raster_for_any_anchor() {
        let cases = [
            (PixelRect::with_size(1200, 850).unwrap(), 260, 32),
            (PixelRect::with_size(300, 70).unwrap(), 260, 32),
            (PixelRect::with_size(260, 64).unwrap(), 260, 32),
        ];

        for (bounds, width, height) in cases {
            let layout = MenuLayout::new(width, height, bounds).unwrap();

            for x in (-20..bounds.width() as i32 + 20).step_by(7) {
                for y in (-20..bounds.height() as i32 + 20).step_by(5) {
                    let items = layout.items_at(Point::new(x, y)).unwrap();

                    assert_eq!(items.len(), FractalKind::ALL.len());
                    for item in items {
                        assert!(
                            bounds.contains_rect(&item.rect),
                            "item {:?} escapes bounds for anchor ({}, {})",
                            item.rect,
                            x,
                            y
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_invalid_item_rect_is_reported() {
        let layout = MenuLayout {
            item_width: 1,
            item_height: 32,
            bounds: PixelRect::with_size(1200, 850).unwrap(),
        };

        assert_eq!(
            layout.items_at(Point::new(10, 10)),
            Err(MenuLayoutError::Item(PixelRectError::InvalidSize {
                width: 1,
                height: 32
            }))
        );
    }
}
