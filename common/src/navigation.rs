//! Navigation state machine.
//!
//! Main is the hub: graph and settings pages are entered from it and ESC
//! always leads back to it. Every transition marks a full redraw as pending;
//! the driver consumes the flag once per frame with [`Navigation::take_redraw`].

use crate::pages::Page;
use crate::settings::SettingsRow;

/// Current page, settings cursor and pending full redraw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Navigation {
    page: Page,
    cursor: SettingsRow,
    redraw_pending: bool,
}

impl Navigation {
    /// Start on the main page with the first frame pending.
    pub const fn new() -> Self {
        Self {
            page: Page::Main,
            cursor: SettingsRow::Brightness,
            redraw_pending: true,
        }
    }

    #[inline]
    pub const fn page(&self) -> Page { self.page }

    #[inline]
    pub const fn cursor(&self) -> SettingsRow { self.cursor }

    #[inline]
    pub const fn redraw_pending(&self) -> bool { self.redraw_pending }

    /// Mark the current page for a full redraw.
    #[inline]
    pub const fn request_redraw(&mut self) { self.redraw_pending = true; }

    /// Return and clear the pending full-redraw flag.
    pub const fn take_redraw(&mut self) -> bool {
        let pending = self.redraw_pending;
        self.redraw_pending = false;
        pending
    }

    /// Enter `page` from the main page.
    ///
    /// Ignored anywhere else, since pages never link to each other directly.
    pub fn open(
        &mut self,
        page: Page,
    ) -> bool {
        if self.page != Page::Main || page == Page::Main {
            return false;
        }
        self.page = page;
        self.redraw_pending = true;
        log::info!("-> {}", page.label());
        true
    }

    /// ESC: return to the main page. No-op when already there.
    pub fn back(&mut self) -> bool {
        if self.page == Page::Main {
            return false;
        }
        self.page = Page::Main;
        self.redraw_pending = true;
        log::info!("-> BACK to main");
        true
    }

    /// Move the settings cursor up. Redraws even when already on the first row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.up();
        self.redraw_pending = true;
    }

    /// Move the settings cursor down. Redraws even when already on the last row.
    pub fn cursor_down(&mut self) {
        self.cursor = self.cursor.down();
        self.redraw_pending = true;
    }
}

impl Default for Navigation {
    fn default() -> Self { Self::new() }
}
