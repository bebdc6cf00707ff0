//! Browser DOM renderer
//!
//! Owns the mapping from rendering handles to page elements and applies
//! each frame with plain style and class updates. The page ships the
//! board, the head and the fruit; everything else is built here.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::frame::RenderFrame;
use crate::sim::{ElementId, GameState};

pub struct DomRenderer {
    document: Document,
    board: HtmlElement,
    game_over: HtmlElement,
    elements: HashMap<ElementId, HtmlElement>,
    /// Segment divs so far, for the `snek-N` ids of grown ones
    segment_count: usize,
}

impl DomRenderer {
    /// Bind the page elements and build the board tiles
    pub fn new(state: &GameState) -> Self {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        let board = bind(&document, "board");
        let head = bind(&document, "snek");
        let fruit = bind(&document, "fruit");
        let game_over = bind(&document, "game-over");

        let mut elements = HashMap::new();
        elements.insert(state.snake.segments[0], head);
        elements.insert(state.fruit.element, fruit);

        let renderer = Self {
            document,
            board,
            game_over,
            elements,
            segment_count: 1,
        };
        renderer.build_board(state.board.rows);
        renderer
    }

    /// Apply one state snapshot to the page
    pub fn render(&mut self, state: &GameState) {
        let frame = RenderFrame::from_state(state);

        let mut prev: Option<HtmlElement> = None;
        for view in &frame.segments {
            let element = match self.elements.get(&view.element).cloned() {
                Some(element) => element,
                None => match prev {
                    Some(ref tail) => self.grow_segment(view.element, tail),
                    None => continue,
                },
            };
            let style = element.style();
            let _ = style.set_property("bottom", &px(view.bottom));
            let _ = style.set_property("left", &px(view.left));
            let _ = style.set_property("transition", "bottom 0.5s, left 0.5s");
            prev = Some(element);
        }

        if let Some(head) = frame
            .segments
            .first()
            .and_then(|view| self.elements.get(&view.element))
        {
            let _ = head
                .style()
                .set_property("transform", &format!("rotate({}deg)", frame.head_degrees));
            if frame.dead {
                let _ = head.class_list().replace("bg-gray-300", "bg-red-800");
            }
        }

        if let Some(fruit) = self.elements.get(&frame.fruit.element) {
            let style = fruit.style();
            let _ = style.set_property("bottom", &px(frame.fruit.bottom));
            let _ = style.set_property("left", &px(frame.fruit.left));
        }

        if frame.dead {
            let _ = self
                .game_over
                .class_list()
                .remove_2("invisible", "opacity-0");
        }
    }

    /// Regenerate the `tile-N` grid cells under the board
    fn build_board(&self, rows: i32) {
        if let Ok(tiles) = self.board.query_selector_all("[id^=tile-]") {
            for i in 0..tiles.length() {
                if let Some(tile) = tiles.item(i).and_then(|node| node.dyn_into::<Element>().ok())
                {
                    tile.remove();
                }
            }
        }

        for i in 0..rows * rows {
            let tile = self.document.create_element("div").expect("create tile");
            tile.set_id(&format!("tile-{i}"));
            let _ = tile.class_list().add_3("bg-black", "w-5", "h-5");
            let _ = self.board.append_child(&tile);
        }
        let _ = self
            .board
            .class_list()
            .add_1(&format!("grid-cols-[repeat({rows},1fr)]"));
    }

    /// Materialize the div for a freshly grown segment
    ///
    /// Clones the current tail, strips the head-only classes and appends
    /// the copy to the board.
    fn grow_segment(&mut self, id: ElementId, tail: &HtmlElement) -> HtmlElement {
        let clone: HtmlElement = tail
            .clone_node()
            .expect("clone tail")
            .dyn_into()
            .expect("clone is not an element");
        clone.set_id(&format!("snek-{}", self.segment_count));
        let _ = clone
            .class_list()
            .remove_3("rounded-bl-lg", "rounded-tl-lg", "z-10");
        let _ = self.board.append_child(&clone);

        self.segment_count += 1;
        self.elements.insert(id, clone.clone());
        clone
    }
}

fn bind(document: &Document, id: &str) -> HtmlElement {
    document
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("missing #{id} element"))
        .dyn_into()
        .unwrap_or_else(|_| panic!("#{id} is not an html element"))
}

fn px(value: f32) -> String {
    format!("{value}px")
}
