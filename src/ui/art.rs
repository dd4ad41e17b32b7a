use std::f64::consts::PI;

use gtk4 as gtk;
use gtk4::pango;
use gtk4::prelude::*;
use log::warn;

use super::presenter::CellFace;
use crate::model::FACE_COUNT;

pub const IMAGE_COUNT: usize = FACE_COUNT + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardImage {
    /// Face-down card back.
    Placeholder,
    Glyph(&'static str),
}

pub const CARD_IMAGES: [CardImage; IMAGE_COUNT] = [
    CardImage::Placeholder,
    CardImage::Glyph("🐶"),
    CardImage::Glyph("🐱"),
    CardImage::Glyph("🦊"),
    CardImage::Glyph("🐼"),
    CardImage::Glyph("🐸"),
    CardImage::Glyph("🐙"),
    CardImage::Glyph("🦋"),
    CardImage::Glyph("🐢"),
];

pub fn image_for(face: CellFace) -> CardImage {
    // Faces come from the model and are always below FACE_COUNT.
    CARD_IMAGES[face.image_index()]
}

pub fn draw_card_image(
    area: &gtk::DrawingArea,
    cr: &cairo::Context,
    width: i32,
    height: i32,
    image: CardImage,
) {
    cr.set_antialias(cairo::Antialias::Best);
    let result = match image {
        CardImage::Placeholder => draw_placeholder(cr, width, height),
        CardImage::Glyph(glyph) => {
            draw_glyph(area, cr, width, height, glyph);
            Ok(())
        }
    };
    if let Err(err) = result {
        warn!("failed to draw card back: {err}");
    }
}

fn draw_placeholder(cr: &cairo::Context, width: i32, height: i32) -> Result<(), cairo::Error> {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let radius = width.min(height) as f64 * 0.42;
    let band = radius * 0.14;

    // Top half.
    cr.new_path();
    cr.arc(cx, cy, radius, PI, 2.0 * PI);
    cr.close_path();
    cr.set_source_rgb(0.86, 0.16, 0.16);
    cr.fill()?;

    // Bottom half.
    cr.new_path();
    cr.arc(cx, cy, radius, 0.0, PI);
    cr.close_path();
    cr.set_source_rgb(0.96, 0.96, 0.96);
    cr.fill()?;

    cr.set_source_rgb(0.12, 0.12, 0.12);
    cr.rectangle(cx - radius, cy - band / 2.0, radius * 2.0, band);
    cr.fill()?;

    cr.set_line_width(band * 0.6);
    cr.new_path();
    cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
    cr.stroke()?;

    cr.arc(cx, cy, radius * 0.3, 0.0, 2.0 * PI);
    cr.fill()?;
    cr.set_source_rgb(0.96, 0.96, 0.96);
    cr.arc(cx, cy, radius * 0.18, 0.0, 2.0 * PI);
    cr.fill()?;
    Ok(())
}

fn draw_glyph(area: &gtk::DrawingArea, cr: &cairo::Context, width: i32, height: i32, glyph: &str) {
    let min_dim = width.min(height) as f64;
    let font_size = min_dim * 0.62;

    let layout = pangocairo::functions::create_layout(cr);
    let mut font_desc = pango::FontDescription::new();
    font_desc.set_family("Noto Color Emoji, Apple Color Emoji, Segoe UI Emoji, sans");
    font_desc.set_size((font_size * pango::SCALE as f64) as i32);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(glyph);

    let fg = area.style_context().color();
    cr.set_source_rgba(
        fg.red() as f64,
        fg.green() as f64,
        fg.blue() as f64,
        fg.alpha() as f64,
    );

    let (text_width, text_height) = layout.pixel_size();
    cr.move_to(
        (width as f64 - text_width as f64) / 2.0,
        (height as f64 - text_height as f64) / 2.0,
    );

    pangocairo::functions::show_layout(cr, &layout);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_sits_at_index_zero() {
        assert_eq!(image_for(CellFace::Hidden), CardImage::Placeholder);
    }

    #[test]
    fn every_face_has_a_distinct_glyph() {
        let glyphs: Vec<&str> = (0..FACE_COUNT as u8)
            .map(|face| match image_for(CellFace::Face(face)) {
                CardImage::Glyph(glyph) => glyph,
                CardImage::Placeholder => panic!("face {face} mapped to the card back"),
            })
            .collect();

        let mut unique = glyphs.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), FACE_COUNT);
    }
}
