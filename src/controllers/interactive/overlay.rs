use crate::controllers::interactive::ports::render_target::RenderTarget;
use crate::controllers::interactive::session::Session;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::menu::{MenuState, OpenMenu};

pub const MENU_BACKGROUND: Colour = Colour::grey(48);
pub const MENU_HIGHLIGHT: Colour = Colour::grey(96);
pub const MENU_TEXT: Colour = Colour::WHITE;
pub const PROGRESS_TEXT: Colour = Colour::WHITE;

const MENU_TEXT_PADDING: i32 = 8;

/// Draws the current session state and presents the frame.
///
/// While a job runs the screen shows its progress line centred on black, or
/// on the partial raster when the session asks for it. Otherwise the last
/// completed raster is shown, with the menu on top when open.
pub fn present<R: RenderTarget>(session: &Session, target: &mut R) -> Result<(), R::Error> {
    let bounds = target.bounds();

    match (session.job(), session.last_completed()) {
        (Some(job), _) => {
            if session.show_partial_raster() {
                target.blit_raster(job.raster())?;
            } else {
                target.fill_rect(bounds, Colour::BLACK)?;
            }

            if let Some(message) = session.progress_message() {
                draw_centred_text(target, &message)?;
            }
        }
        (None, Some(raster)) => target.blit_raster(raster)?,
        (None, None) => target.fill_rect(bounds, Colour::BLACK)?,
    }

    if let MenuState::Open(menu) = session.menu() {
        draw_menu(target, menu)?;
    }

    target.present_frame()
}

fn draw_centred_text<R: RenderTarget>(target: &mut R, text: &str) -> Result<(), R::Error> {
    let bounds = target.bounds();
    let extent = target.measure_text(text);

    let origin = Point {
        x: bounds.top_left().x + (bounds.width() / 2) as i32 - (extent.width / 2) as i32,
        y: bounds.top_left().y + (bounds.height() / 2) as i32 - (extent.height / 2) as i32,
    };

    target.draw_text(text, origin, PROGRESS_TEXT)
}

fn draw_menu<R: RenderTarget>(target: &mut R, menu: &OpenMenu) -> Result<(), R::Error> {
    for (index, item) in menu.items.iter().enumerate() {
        let background = if menu.hovered_index == Some(index) {
            MENU_HIGHLIGHT
        } else {
            MENU_BACKGROUND
        };

        target.fill_rect(item.rect, background)?;

        let extent = target.measure_text(item.label);
        let origin = Point {
            x: item.rect.top_left().x + MENU_TEXT_PADDING,
            y: item.rect.top_left().y + (item.rect.height() as i32 - extent.height as i32) / 2,
        };

        target.draw_text(item.label, origin, MENU_TEXT)?;
    }

    Ok(())
}
