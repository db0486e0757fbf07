/// The modal panels the page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Search,
    Settings,
    Detail,
}

impl OverlayKind {
    /// Draw order, bottom to top.
    pub const ALL: [OverlayKind; 3] = [Self::Search, Self::Settings, Self::Detail];

    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Settings => "Settings",
            Self::Detail => "Detail",
        }
    }
}

/// Where focus lands when an overlay opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    SearchTitle,
}

/// One overlay's two-state machine. Starts closed and can be reopened forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    open: bool,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Search, settings and detail overlays, each independent of the others.
#[derive(Debug, Clone, Default)]
pub struct Overlays {
    search: Overlay,
    settings: Overlay,
    detail: Overlay,
}

impl Overlays {
    fn get_mut(&mut self, kind: OverlayKind) -> &mut Overlay {
        match kind {
            OverlayKind::Search => &mut self.search,
            OverlayKind::Settings => &mut self.settings,
            OverlayKind::Detail => &mut self.detail,
        }
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Search => self.search.is_open(),
            OverlayKind::Settings => self.settings.is_open(),
            OverlayKind::Detail => self.detail.is_open(),
        }
    }

    /// Open `kind`. The focus target is handed back so the caller can move focus.
    pub fn open(&mut self, kind: OverlayKind, focus: Option<FocusTarget>) -> Option<FocusTarget> {
        self.get_mut(kind).open();
        tracing::debug!(overlay = kind.label(), "overlay opened");
        focus
    }

    pub fn close(&mut self, kind: OverlayKind) {
        self.get_mut(kind).close();
        tracing::debug!(overlay = kind.label(), "overlay closed");
    }

    /// The open overlay drawn last, if any.
    pub fn topmost(&self) -> Option<OverlayKind> {
        OverlayKind::ALL
            .iter()
            .rev()
            .copied()
            .find(|kind| self.is_open(*kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_starts_closed() {
        let overlays = Overlays::default();
        for kind in OverlayKind::ALL {
            assert!(!overlays.is_open(kind));
        }
        assert_eq!(overlays.topmost(), None);
    }

    #[test]
    fn test_open_close_is_reusable() {
        let mut overlay = Overlay::default();
        for _ in 0..3 {
            overlay.open();
            assert!(overlay.is_open());
            overlay.open();
            assert!(overlay.is_open());
            overlay.close();
            assert!(!overlay.is_open());
        }
    }

    #[test]
    fn test_overlays_are_independent() {
        let mut overlays = Overlays::default();
        let focus = overlays.open(OverlayKind::Search, Some(FocusTarget::SearchTitle));
        assert_eq!(focus, Some(FocusTarget::SearchTitle));
        overlays.open(OverlayKind::Detail, None);
        overlays.close(OverlayKind::Settings);

        assert!(overlays.is_open(OverlayKind::Search));
        assert!(!overlays.is_open(OverlayKind::Settings));
        assert!(overlays.is_open(OverlayKind::Detail));
        assert_eq!(overlays.topmost(), Some(OverlayKind::Detail));

        overlays.close(OverlayKind::Detail);
        assert_eq!(overlays.topmost(), Some(OverlayKind::Search));
    }
}
