//! On-screen controls and mouse hit-testing

use ratatui::layout::Rect;

/// Hebrew keyboard rows as laid out on a physical keyboard
pub const KEYBOARD_LAYOUT: [&[char]; 3] = [
    &['ק', 'ר', 'א', 'ט', 'ו', 'ן', 'ם', 'פ'],
    &['ש', 'ד', 'ג', 'כ', 'ע', 'י', 'ח', 'ל', 'ך', 'ף'],
    &['ז', 'ס', 'ב', 'ה', 'נ', 'מ', 'צ', 'ת', 'ץ'],
];

/// Something the player can press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Letter(char),
    Erase,
    Submit,
    NewRound,
    /// Index into `CATEGORIES`
    Category(usize),
    Quit,
}

/// Screen rectangles of the clickable controls from the last frame
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    targets: Vec<(Rect, Control)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, control: Control) {
        if area.width > 0 && area.height > 0 {
            self.targets.push((area, control));
        }
    }

    /// The control under a terminal cell, if any
    #[must_use]
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        self.targets
            .iter()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|&(_, control)| control)
    }

}

#[cfg(test)]
impl HitMap {
    /// Where a control was drawn
    pub fn area_of(&self, control: Control) -> Option<Rect> {
        self.targets
            .iter()
            .find(|&&(_, c)| c == control)
            .map(|&(area, _)| area)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
