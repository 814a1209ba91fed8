use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
use crate::controllers::interactive::ports::render_target::{
    RenderTarget, TextExtent, blit_per_pixel,
};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::presenters::pixels::textures::PendingTextures;
use egui::{Align2, Color32, Context as EguiContext, FontId, Id, LayerId, Order, RawInput};
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use std::fmt;
use winit::window::Window;

const FONT_SIZE: f32 = 24.0;

#[derive(Debug)]
pub enum PixelsCanvasError {
    Surface(pixels::Error),
    Bounds(PixelRectError),
    PixelFormat(PixelFormatError),
    PixelOutsideFrame { pixel: Point },
}

impl fmt::Display for PixelsCanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "pixels surface error: {}", err),
            Self::Bounds(err) => write!(f, "invalid window size: {}", err),
            Self::PixelFormat(err) => write!(f, "frame copy failed: {}", err),
            Self::PixelOutsideFrame { pixel } => {
                write!(f, "pixel at x:{}, y:{} is outside the frame", pixel.x, pixel.y)
            }
        }
    }
}

impl Error for PixelsCanvasError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::Bounds(err) => Some(err),
            Self::PixelFormat(err) => Some(err),
            Self::PixelOutsideFrame { .. } => None,
        }
    }
}

impl From<pixels::Error> for PixelsCanvasError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<PixelRectError> for PixelsCanvasError {
    fn from(err: PixelRectError) -> Self {
        Self::Bounds(err)
    }
}

impl From<PixelFormatError> for PixelsCanvasError {
    fn from(err: PixelFormatError) -> Self {
        Self::PixelFormat(err)
    }
}

struct QueuedText {
    text: String,
    origin: Point,
    colour: Colour,
}

fn to_color32(colour: Colour) -> Color32 {
    Color32::from_rgb(colour.r, colour.g, colour.b)
}

/// Window-backed render target: raster pixels go through the `pixels`
/// framebuffer, text is laid out and painted by egui on top of it.
pub struct PixelsCanvas {
    pixels: Pixels<'static>,
    egui_ctx: EguiContext,
    egui_renderer: EguiRenderer,
    bounds: PixelRect,
    texts: Vec<QueuedText>,
    pending_textures: PendingTextures,
}

impl PixelsCanvas {
    pub fn new(window: &'static Window) -> Result<Self, PixelsCanvasError> {
        let size = window.inner_size();
        let bounds = PixelRect::with_size(size.width, size.height)?;
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let egui_ctx = EguiContext::default();
        egui_ctx.set_pixels_per_point(1.0);
        // Fonts only exist once a frame has run. Its atlas upload goes out with the first present.
        let mut pending_textures = PendingTextures::default();
        pending_textures.defer(egui_ctx.run(Self::raw_input(bounds), |_| {}).textures_delta);

        Ok(Self {
            pixels,
            egui_ctx,
            egui_renderer,
            bounds,
            texts: Vec::new(),
            pending_textures,
        })
    }

    fn raw_input(bounds: PixelRect) -> RawInput {
        RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(bounds.width() as f32, bounds.height() as f32),
            )),
            ..RawInput::default()
        }
    }

    /// Converts a physical window position to a frame pixel, clamped to the frame.
    #[must_use]
    pub fn window_pos_to_pixel(&self, x: f64, y: f64) -> Point {
        let (px, py) = self
            .pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        Point {
            x: px as i32,
            y: py as i32,
        }
    }

    fn frame_index(&self, pixel: Point) -> Option<usize> {
        if !self.bounds.contains_point(pixel) {
            return None;
        }

        Some((pixel.y as usize * self.bounds.width() as usize + pixel.x as usize) * 4)
    }
}

impl RenderTarget for PixelsCanvas {
    type Error = PixelsCanvasError;

    fn bounds(&self) -> PixelRect {
        self.bounds
    }

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Error> {
        let index = self
            .frame_index(pixel)
            .ok_or(PixelsCanvasError::PixelOutsideFrame { pixel })?;
        let frame = self.pixels.frame_mut();

        frame[index..index + 4].copy_from_slice(&[colour.r, colour.g, colour.b, 255]);

        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect, colour: Colour) -> Result<(), Self::Error> {
        for y in rect.top_left().y..=rect.bottom_right().y {
            for x in rect.top_left().x..=rect.bottom_right().x {
                self.set_pixel(Point { x, y }, colour)?;
            }
        }

        Ok(())
    }

    fn measure_text(&self, text: &str) -> TextExtent {
        let size = self.egui_ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), FontId::proportional(FONT_SIZE), Color32::WHITE)
                .size()
        });

        TextExtent {
            width: size.x.ceil() as u32,
            height: size.y.ceil() as u32,
        }
    }

    fn draw_text(&mut self, text: &str, origin: Point, colour: Colour) -> Result<(), Self::Error> {
        self.texts.push(QueuedText {
            text: text.to_owned(),
            origin,
            colour,
        });

        Ok(())
    }

    fn present_frame(&mut self) -> Result<(), Self::Error> {
        let texts = std::mem::take(&mut self.texts);

        let output = self.egui_ctx.run(Self::raw_input(self.bounds), |ctx| {
            let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("overlay")));

            for queued in &texts {
                painter.text(
                    egui::pos2(queued.origin.x as f32, queued.origin.y as f32),
                    Align2::LEFT_TOP,
                    &queued.text,
                    FontId::proportional(FONT_SIZE),
                    to_color32(queued.colour),
                );
            }
        });

        let clipped_primitives = self
            .egui_ctx
            .tessellate(output.shapes, self.egui_ctx.pixels_per_point());
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.bounds.width(), self.bounds.height()],
            pixels_per_point: self.egui_ctx.pixels_per_point(),
        };
        let textures_delta = self.pending_textures.take_with(output.textures_delta);
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    fn blit_raster(&mut self, raster: &Raster) -> Result<(), Self::Error> {
        if raster.pixel_rect() == self.bounds {
            copy_rgb_to_rgba(raster.buffer(), self.pixels.frame_mut())?;
            return Ok(());
        }

        blit_per_pixel(self, raster)
    }
}
