use super::spring::Spring;
use super::{FADE_SPRING, MAX_FRAME_DT, OFFSET_SPRING, SIZE_SPRING};
use crate::config::{CardConfig, CardTitle, Config};
use carousel_core::{
    CarouselController, CarouselLayout, InvalidArgument, SwipeDirection, SwipeTracker,
    VisualParameters,
};
use palette::Srgba;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct Card {
    pub title: CardTitle,
    pub color: Srgba<f64>,
}

impl Card {
    pub fn from_config(cfg: &CardConfig) -> Self {
        Self {
            title: cfg.title.clone(),
            color: cfg.color.to_srgba(),
        }
    }
}

/// Animated geometry of one card for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub offset: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    /// Height relative to a focused card.
    pub scale: f64,
}

#[derive(Debug, Clone, Copy)]
struct CardMotion {
    offset: Spring,
    height: Spring,
    opacity: Spring,
}

impl CardMotion {
    fn at_rest(target: VisualParameters, layout: &CarouselLayout) -> Self {
        let spring = |value, (stiffness, damping, kick): (f64, f64, f64)| {
            Spring::new(value, stiffness, damping).with_initial_velocity(kick)
        };
        Self {
            offset: spring(target.lateral_offset, OFFSET_SPRING),
            height: spring(target.height(layout), SIZE_SPRING),
            opacity: spring(target.opacity, FADE_SPRING),
        }
    }

    fn retarget(&mut self, target: VisualParameters, layout: &CarouselLayout) {
        self.offset.set_target(target.lateral_offset);
        self.height.set_target(target.height(layout));
        self.opacity.set_target(target.opacity);
    }

    fn step(&mut self, dt: f64) -> bool {
        // Non-short-circuiting so every spring advances.
        self.offset.step(dt) | self.height.step(dt) | self.opacity.step(dt)
    }
}

/// Cards, the controller deciding which one is in front, and the springs
/// easing each card toward where the controller wants it.
pub struct Deck {
    pub cards: Vec<Card>,
    controller: CarouselController,
    motions: Vec<CardMotion>,
    tracker: SwipeTracker,
    drag_started: Option<Instant>,
}

impl Deck {
    pub fn from_config(config: &Config) -> Result<Self, InvalidArgument> {
        let controller = CarouselController::new(config.cards.len(), config.layout)?;
        let mut deck = Self {
            cards: config.cards.iter().map(Card::from_config).collect(),
            controller,
            motions: Vec::new(),
            tracker: SwipeTracker::new(),
            drag_started: None,
        };
        deck.settle();
        Ok(deck)
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    pub fn drag_begin(&mut self) {
        self.tracker.reset();
        self.drag_started = Some(Instant::now());
    }

    pub fn drag_update(&mut self, offset_x: f64) {
        self.record(offset_x);
        self.controller.on_drag_update(offset_x);
        self.retarget();
    }

    pub fn drag_end(&mut self, offset_x: f64) -> Option<SwipeDirection> {
        self.record(offset_x);
        let direction = self.controller.on_drag_end(self.tracker.sample());
        self.tracker.reset();
        self.drag_started = None;
        self.retarget();
        direction
    }

    /// Swaps in new cards and layout. On error the deck is left untouched.
    pub fn reload(&mut self, config: &Config) -> Result<(), InvalidArgument> {
        let size = config.cards.len();

        if config.layout == *self.controller.layout() {
            self.controller.resize(size)?;
        } else {
            let active = self.controller.active().min(size.saturating_sub(1));
            let mut controller = CarouselController::new(size, config.layout)?;
            controller.select(active)?;
            self.controller = controller;
        }

        self.cards = config.cards.iter().map(Card::from_config).collect();
        self.tracker.reset();
        self.drag_started = None;
        self.settle();
        Ok(())
    }

    /// Advances all card animations. Returns whether anything moved.
    pub fn tick(&mut self, dt: f64) -> bool {
        let dt = dt.min(MAX_FRAME_DT);
        self.motions
            .iter_mut()
            .fold(false, |moved, motion| motion.step(dt) | moved)
    }

    pub fn frames(&self) -> impl Iterator<Item = (&Card, CardFrame)> {
        let size = self.controller.layout().card_size;
        self.cards.iter().zip(&self.motions).map(move |(card, m)| {
            let height = m.height.value();
            (
                card,
                CardFrame {
                    offset: m.offset.value(),
                    width: size.width,
                    height,
                    opacity: m.opacity.value().clamp(0.0, 1.0),
                    scale: height / size.height,
                },
            )
        })
    }

    pub fn window_label(&self) -> String {
        self.controller.window_label()
    }

    fn record(&mut self, offset_x: f64) {
        let started = *self.drag_started.get_or_insert_with(Instant::now);
        self.tracker.push(offset_x, started.elapsed());
    }

    fn retarget(&mut self) {
        let layout = *self.controller.layout();
        for (index, motion) in self.motions.iter_mut().enumerate() {
            motion.retarget(self.controller.visual_parameters(index), &layout);
        }
    }

    // Places every card at its target immediately. Used when the set of
    // cards changes, where animating from stale positions would be noise.
    fn settle(&mut self) {
        let layout = *self.controller.layout();
        self.motions = (0..self.cards.len())
            .map(|index| CardMotion::at_rest(self.controller.visual_parameters(index), &layout))
            .collect();
    }

    #[cfg(test)]
    fn elapse(&mut self, by: std::time::Duration) {
        if let Some(started) = self.drag_started.as_mut()
            && let Some(earlier) = started.checked_sub(by)
        {
            *started = earlier;
        }
    }
}
