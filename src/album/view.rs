use crate::album::model::{Sheet, SheetList};
use crate::album::navigation::{FlipDirection, Navigator};

/// At most this many position dots are shown; longer albums get a
/// window of dots centered on the current sheet.
pub const MAX_DOTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDot {
    pub index: usize,
    pub active: bool,
}

/// Everything the rendering layer needs for one frame of the book,
/// computed purely from the sheet list and the navigator.
#[derive(Debug, Clone, PartialEq)]
pub struct BookView {
    /// Sheet committed at rest.
    pub current: Sheet,
    /// Destination sheet while a flip is in flight.
    pub incoming: Option<Sheet>,
    pub direction: FlipDirection,
    pub indicator: String,
    pub dots: Vec<PageDot>,
    pub can_previous: bool,
    pub can_next: bool,
}

impl BookView {
    pub fn project(sheets: &SheetList, nav: &Navigator) -> Self {
        let visible = nav.visible_index();
        let incoming = nav
            .is_animating()
            .then(|| sheets.sheet(nav.target_index()));

        Self {
            current: sheets.sheet(visible),
            incoming,
            direction: nav.direction(),
            indicator: format!("Page {} of {}", visible + 1, sheets.len()),
            dots: dot_window(sheets.len(), visible),
            can_previous: nav.can_go_previous(),
            can_next: nav.can_go_next(),
        }
    }
}

/// Window of up to [`MAX_DOTS`] sheet indices around the current one.
/// Short albums show every sheet; long albums clamp the window to the
/// ends so it never runs off either edge.
fn dot_window(total: usize, current: usize) -> Vec<PageDot> {
    let shown = total.min(MAX_DOTS);
    (0..shown)
        .map(|slot| {
            let index = if total <= MAX_DOTS {
                slot
            } else if current < 3 {
                slot
            } else if current + 4 > total {
                total - MAX_DOTS + slot
            } else {
                current - 2 + slot
            };
            PageDot {
                index,
                active: index == current,
            }
        })
        .collect()
}
