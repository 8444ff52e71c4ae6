use crate::config;
use crate::events::AppEvent;
use crate::gui::deck::{self, Deck};
use crate::gui::theme::{self, ThemeColors};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

pub struct AppModel {
    pub deck: Rc<RefCell<Deck>>,
    pub config_path: PathBuf,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    DragBegin,
    DragUpdate(f64),
    DragEnd(f64),
    ConfigReload,
    Close,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Deck, PathBuf, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Carousel"),
            set_default_size: (1000, 700),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Close);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "carousel-drawing-area",

                add_controller = gtk::GestureDrag {
                    connect_drag_begin[sender] => move |_, _, _| {
                        sender.input(AppMsg::DragBegin);
                    },
                    connect_drag_update[sender] => move |_, offset_x, _| {
                        sender.input(AppMsg::DragUpdate(offset_x));
                    },
                    connect_drag_end[sender] => move |_, offset_x, _| {
                        sender.input(AppMsg::DragEnd(offset_x));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (deck, config_path, rx) = init;

        theme::load_css();

        let model = AppModel {
            deck: Rc::new(RefCell::new(deck)),
            config_path,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let deck_draw = model.deck.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = deck::draw(
                    cr,
                    &deck_draw.borrow(),
                    &colors,
                    width as f64,
                    height as f64,
                ) {
                    log::error!("Drawing error: {}", e);
                }
            });

        // Frame times are in microseconds.
        let deck_tick = model.deck.clone();
        let last_frame = Cell::new(None::<i64>);
        widgets
            .drawing_area
            .add_tick_callback(move |drawing_area, clock| {
                let now = clock.frame_time();
                let dt = last_frame
                    .replace(Some(now))
                    .map(|prev| (now - prev) as f64 / 1_000_000.0)
                    .unwrap_or(0.0);
                if deck_tick.borrow_mut().tick(dt) {
                    drawing_area.queue_draw();
                }
                glib::ControlFlow::Continue
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::DragBegin => self.deck.borrow_mut().drag_begin(),
            AppMsg::DragUpdate(offset_x) => self.deck.borrow_mut().drag_update(offset_x),
            AppMsg::DragEnd(offset_x) => {
                let mut deck = self.deck.borrow_mut();
                if let Some(direction) = deck.drag_end(offset_x) {
                    let window = deck.controller().window();
                    log::info!(
                        "Swiped {}, showing card {} [{}]",
                        direction,
                        window.active(),
                        window.label()
                    );
                }
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => match self.deck.borrow_mut().reload(&new_config) {
                    Ok(()) => log::info!("Configuration reloaded"),
                    Err(e) => log::error!("Rejected reloaded config: {}", e),
                },
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Close => self.root.close(),
        }
        self.drawing_area.queue_draw();
    }
}
