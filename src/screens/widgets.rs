//! Vertical list of buttons driven by keyboard and mouse.

use crossterm::event::KeyCode;

use crate::input::InputEvent;
use crate::term::{text, CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::BLINK_MS;

const IDLE: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160));
const FOCUS: CellStyle = CellStyle::fg(Rgb::new(255, 220, 80)).bold();
const FOCUS_DIM: CellStyle = CellStyle::fg(Rgb::new(170, 140, 50));

pub struct ButtonList {
    labels: &'static [&'static str],
    selected: usize,
    /// Hit boxes from the last render.
    rects: Vec<Rect>,
    blink_on: bool,
}

impl ButtonList {
    pub fn new(labels: &'static [&'static str]) -> Self {
        Self {
            labels,
            selected: 0,
            rects: Vec::with_capacity(labels.len()),
            blink_on: true,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn label(&self, index: usize) -> Option<&'static str> {
        self.labels.get(index).copied()
    }

    /// Returns the index of the activated button, if any.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<usize> {
        let count = self.labels.len();
        if count == 0 {
            return None;
        }

        match *event {
            InputEvent::Key(key) => match key.code {
                KeyCode::Up | KeyCode::BackTab => {
                    self.selected = (self.selected + count - 1) % count;
                    None
                }
                KeyCode::Down | KeyCode::Tab => {
                    self.selected = (self.selected + 1) % count;
                    None
                }
                KeyCode::Enter => Some(self.selected),
                _ => None,
            },
            InputEvent::MouseMove { column, row } => {
                if let Some(i) = self.hit(column, row) {
                    self.selected = i;
                }
                None
            }
            InputEvent::MouseDown { column, row } => {
                let i = self.hit(column, row)?;
                self.selected = i;
                Some(i)
            }
            InputEvent::KeyRelease(_) => None,
        }
    }

    pub fn update(&mut self, now_ms: u64) {
        self.blink_on = (now_ms / BLINK_MS) % 2 == 0;
    }

    /// Draw the buttons stacked under row `top`, centered on `center_x`.
    pub fn render(&mut self, fb: &mut FrameBuffer, center_x: u16, top: u16) {
        let width = self
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            + 4;

        self.rects.clear();
        for (i, label) in self.labels.iter().enumerate() {
            let style = match (i == self.selected, self.blink_on) {
                (true, true) => FOCUS,
                (true, false) => FOCUS_DIM,
                (false, _) => IDLE,
            };
            let (open, close) = if i == self.selected {
                ('>', '<')
            } else {
                ('[', ']')
            };
            let caption = format!("{open} {label:^w$} {close}", w = width - 4);
            let rect = text::draw_around(fb, center_x, top + (i as u16) * 2, &caption, style);
            self.rects.push(rect);
        }
    }

    fn hit(&self, column: u16, row: u16) -> Option<usize> {
        self.rects.iter().position(|r| r.contains(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyInput;

    const LABELS: &[&str] = &["New Game", "High Scores", "Exit"];

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyInput::new(code))
    }

    #[test]
    fn keyboard_navigation_wraps() {
        let mut list = ButtonList::new(LABELS);
        assert_eq!(list.handle_event(&key(KeyCode::Up)), None);
        assert_eq!(list.selected(), 2);
        list.handle_event(&key(KeyCode::Down));
        assert_eq!(list.selected(), 0);
        list.handle_event(&key(KeyCode::Down));
        assert_eq!(list.handle_event(&key(KeyCode::Enter)), Some(1));
    }

    #[test]
    fn mouse_hover_and_click_use_rendered_layout() {
        let mut list = ButtonList::new(LABELS);
        let mut fb = FrameBuffer::new(40, 10);
        assert_eq!(list.handle_event(&InputEvent::MouseDown { column: 20, row: 4 }), None);

        list.render(&mut fb, 20, 2);
        list.handle_event(&InputEvent::MouseMove { column: 20, row: 4 });
        assert_eq!(list.selected(), 1);
        assert_eq!(
            list.handle_event(&InputEvent::MouseDown { column: 20, row: 6 }),
            Some(2)
        );
        assert_eq!(list.handle_event(&InputEvent::MouseDown { column: 0, row: 0 }), None);
    }

    #[test]
    fn focus_blinks() {
        let mut list = ButtonList::new(LABELS);
        let mut fb = FrameBuffer::new(40, 10);
        list.update(0);
        list.render(&mut fb, 20, 0);
        let on = fb.get(20, 0).map(|c| c.style);
        list.update(BLINK_MS);
        list.render(&mut fb, 20, 0);
        let off = fb.get(20, 0).map(|c| c.style);
        assert_ne!(on, off);
    }
}
