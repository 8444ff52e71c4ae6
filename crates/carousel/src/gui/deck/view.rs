use super::model::{Card, CardFrame, Deck};
use super::{CORNER_RADIUS, LABEL_FONT_SIZE, LABEL_MARGIN, SHADOW_RADIUS, TITLE_FONT_SIZE};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

const SHADOW_LAYERS: u32 = 3;

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    fn inflate(&self, by: f64) -> Self {
        Self {
            x: self.x - by,
            y: self.y - by,
            width: self.width + 2.0 * by,
            height: self.height + 2.0 * by,
        }
    }
}

struct CardRenderer<'a> {
    card: &'a Card,
    bounds: Rect,
    opacity: f64,
    scale: f64,
}

impl<'a> CardRenderer<'a> {
    fn new(card: &'a Card, frame: CardFrame, center: (f64, f64)) -> Self {
        let (cx, cy) = center;
        Self {
            card,
            bounds: Rect::centered(cx + frame.offset, cy, frame.width, frame.height),
            opacity: frame.opacity,
            scale: frame.scale,
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        if self.opacity <= 0.0 {
            return Ok(());
        }

        // Fade the card as a whole so the shadow does not show through it.
        cr.push_group();
        self.draw_shadow(cr, colors)?;
        self.draw_body(cr)?;
        self.draw_title(cr, colors)?;
        cr.pop_group_to_source()?;
        cr.paint_with_alpha(self.opacity)
    }

    fn draw_shadow(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_source(cr, colors.shadow);
        for layer in (1..=SHADOW_LAYERS).rev() {
            let spread = SHADOW_RADIUS * layer as f64 / SHADOW_LAYERS as f64;
            rounded_rect(cr, self.bounds.inflate(spread), CORNER_RADIUS + spread);
            cr.fill()?;
        }
        Ok(())
    }

    fn draw_body(&self, cr: &Context) -> Result<(), cairo::Error> {
        set_source(cr, self.card.color);
        rounded_rect(cr, self.bounds, CORNER_RADIUS);
        cr.fill()
    }

    fn draw_title(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        set_source(cr, colors.title);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(TITLE_FONT_SIZE * self.scale);
        show_centered(
            cr,
            self.card.title.as_str(),
            self.bounds.x + self.bounds.width / 2.0,
            self.bounds.y + self.bounds.height / 2.0,
        )
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn rounded_rect(cr: &Context, rect: Rect, radius: f64) {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);

    cr.new_sub_path();
    cr.arc(right - r, top + r, r, -PI / 2.0, 0.0);
    cr.arc(right - r, bottom - r, r, 0.0, PI / 2.0);
    cr.arc(left + r, bottom - r, r, PI / 2.0, PI);
    cr.arc(left + r, top + r, r, PI, 3.0 * PI / 2.0);
    cr.close_path();
}

fn show_centered(cr: &Context, text: &str, cx: f64, cy: f64) -> Result<(), cairo::Error> {
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(
            cx - ext.width() / 2.0 - ext.x_bearing(),
            cy - ext.height() / 2.0 - ext.y_bearing(),
        );
        cr.show_text(text)?;
    }
    Ok(())
}

pub fn draw(
    cr: &Context,
    deck: &Deck,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let center = (width / 2.0, height / 2.0);

    for (card, frame) in deck.frames() {
        CardRenderer::new(card, frame, center).draw(cr, colors)?;
    }

    draw_window_label(cr, deck, colors, width, height)
}

fn draw_window_label(
    cr: &Context,
    deck: &Deck,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    set_source(cr, colors.label);
    cr.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );
    cr.set_font_size(LABEL_FONT_SIZE);
    show_centered(cr, &deck.window_label(), width / 2.0, height - LABEL_MARGIN)
}
