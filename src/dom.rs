use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent};

use crate::board::NUM_CELLS;
use crate::config::ViewConfig;
use crate::controller::{Controller, View};
use crate::error::{GameError, Result};
use crate::geometry::WinLine;
use crate::types::{Player, Scores};

const TILE_ATTR: &str = "data-tile";

fn js_err(err: JsValue) -> GameError {
    GameError::Js(format!("{err:?}"))
}

fn report(what: &str, result: std::result::Result<(), JsValue>) {
    if let Err(err) = result {
        warn!("{what} failed: {err:?}");
    }
}

fn select(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)
        .map_err(js_err)?
        .ok_or_else(|| GameError::MissingElement(selector.to_string()))
}

/// Renders the game into the page's existing markup.
pub struct DomView {
    document: Document,
    config: ViewConfig,
    title: Element,
    board: Element,
    line: Element,
    reset: Element,
    scores: [Element; 2],
}

impl DomView {
    pub fn new(document: Document, config: ViewConfig) -> Result<Self> {
        let title = select(&document, &config.title)?;
        let board = select(&document, &config.gameboard)?;
        let line = select(&document, &config.line)?;
        let reset = select(&document, &config.reset_button)?;
        let scores = [
            select(&document, config.score_selector(Player::One))?,
            select(&document, config.score_selector(Player::Two))?,
        ];
        for cell in 0..NUM_CELLS {
            let id = config.cell_id(cell);
            if document.get_element_by_id(&id).is_none() {
                return Err(GameError::MissingElement(format!("#{id}")));
            }
        }

        Ok(Self {
            document,
            config,
            title,
            board,
            line,
            reset,
            scores,
        })
    }

    fn cell(&self, cell: usize) -> Option<Element> {
        self.document.get_element_by_id(&self.config.cell_id(cell))
    }

    fn set_title(&self, text: &str) {
        self.title.set_text_content(Some(text));
    }

    fn set_hidden(&self, element: &Element, hidden: bool) {
        let classes = element.class_list();
        let result = if hidden {
            classes.add_1(&self.config.hidden_class)
        } else {
            classes.remove_1(&self.config.hidden_class)
        };
        report("toggle visibility", result);
    }
}

impl View for DomView {
    fn clear_board(&mut self) {
        for cell in 0..NUM_CELLS {
            if let Some(element) = self.cell(cell) {
                report("clear cell", element.remove_attribute(TILE_ATTR));
            }
        }
        self.set_hidden(&self.reset, true);
    }

    fn mark_cell(&mut self, cell: usize, player: Player) {
        if let Some(element) = self.cell(cell) {
            report(
                "mark cell",
                element.set_attribute(TILE_ATTR, self.config.mark_style(player)),
            );
        }
    }

    fn show_turn(&mut self, player: Player) {
        self.set_title(&format!("Player {}'s turn", player.id()));
    }

    fn show_win(&mut self, winner: Player) {
        self.set_title(&format!("Player {} wins!", winner.id()));
        self.set_hidden(&self.reset, false);
    }

    fn show_stalemate(&mut self) {
        self.set_title("Stalemate!");
        self.set_hidden(&self.reset, false);
    }

    fn show_scores(&mut self, scores: Scores) {
        self.scores[0].set_text_content(Some(&scores.player_one.to_string()));
        self.scores[1].set_text_content(Some(&scores.player_two.to_string()));
    }

    fn draw_line(&mut self, line: &WinLine) {
        for (name, value) in [
            ("x1", line.x1),
            ("y1", line.y1),
            ("x2", line.x2),
            ("y2", line.y2),
        ] {
            report("position line", self.line.set_attribute(name, &value.to_string()));
        }
        report("color line", self.line.set_attribute("stroke", &line.color));
        self.set_hidden(&self.line, false);
    }

    fn hide_line(&mut self) {
        self.set_hidden(&self.line, true);
    }

    fn board_size(&self) -> (f64, f64) {
        let rect = self.board.get_bounding_client_rect();
        (rect.width(), rect.height())
    }

    fn line_color(&self, player: Player) -> String {
        self.config.line_color(player).to_string()
    }
}

fn listen<F>(target: &Element, event: &str, handler: F) -> Result<()>
where
    F: FnMut(MouseEvent) + 'static,
{
    let callback = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(js_err)?;
    // Listeners live as long as the page.
    callback.forget();
    Ok(())
}

fn mount_with(config: ViewConfig) -> Result<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| GameError::Js("no document".to_string()))?;

    let view = DomView::new(document, config.clone())?;
    let board = view.board.clone();
    let reset = view.reset.clone();

    let controller = Rc::new(RefCell::new(Controller::new(view)));
    controller.borrow_mut().start();

    let on_board = Rc::clone(&controller);
    listen(&board, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if !target.class_list().contains(&config.field_class) {
            return;
        }
        let Some(cell) = config.cell_index(&target.id()) else {
            return;
        };
        if let Ok(mut controller) = on_board.try_borrow_mut() {
            controller.click(cell);
        }
    })?;

    let on_reset = Rc::clone(&controller);
    listen(&reset, "click", move |_| {
        if let Ok(mut controller) = on_reset.try_borrow_mut() {
            controller.new_round();
        }
    })?;

    info!("board mounted");
    Ok(())
}

/// Wires the game into the current page. `config` may be `undefined` or a
/// partial `ViewConfig` object.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> std::result::Result<(), JsError> {
    let config = if config.is_undefined() || config.is_null() {
        ViewConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|err| GameError::InvalidConfig(err.to_string()))?
    };
    mount_with(config)?;
    Ok(())
}
