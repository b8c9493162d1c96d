//! Open/close bookkeeping for the lightbox scroll lock. The page-level
//! overflow style is shared state; only the closed-to-open transition
//! may record it, and the recorded value is handed back exactly once.

/// Guard around the modal's side of the body scroll lock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightboxLifecycle {
    is_open: bool,
    previous_body_overflow: Option<String>,
}

impl LightboxLifecycle {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Closed -> Open. Records the page's current overflow style for
    /// later restoration and reports whether the transition happened; a
    /// redundant open is a no-op and must not stomp the recorded value.
    pub fn open(&mut self, current_overflow: String) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        self.previous_body_overflow = Some(current_overflow);
        true
    }

    /// Open -> Closed. Returns the overflow style recorded at open time
    /// so the caller can restore it exactly; `None` when already closed.
    pub fn close(&mut self) -> Option<String> {
        if !self.is_open {
            return None;
        }
        self.is_open = false;
        self.previous_body_overflow.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_records_and_close_restores_exactly() {
        let mut lc = LightboxLifecycle::default();
        assert!(lc.open("scroll".to_string()));
        assert!(lc.is_open());
        assert_eq!(lc.close(), Some("scroll".to_string()));
        assert!(!lc.is_open());
    }

    #[test]
    fn empty_style_round_trips_as_empty() {
        let mut lc = LightboxLifecycle::default();
        assert!(lc.open(String::new()));
        assert_eq!(lc.close(), Some(String::new()));
    }

    #[test]
    fn redundant_open_keeps_the_first_recording() {
        let mut lc = LightboxLifecycle::default();
        assert!(lc.open("auto".to_string()));
        assert!(!lc.open("hidden".to_string()));
        assert_eq!(lc.close(), Some("auto".to_string()));
    }

    #[test]
    fn redundant_close_is_a_no_op() {
        let mut lc = LightboxLifecycle::default();
        assert_eq!(lc.close(), None);
        assert!(lc.open("visible".to_string()));
        assert_eq!(lc.close(), Some("visible".to_string()));
        assert_eq!(lc.close(), None);
    }

    #[test]
    fn reopening_records_afresh() {
        let mut lc = LightboxLifecycle::default();
        assert!(lc.open("auto".to_string()));
        lc.close();
        assert!(lc.open("hidden".to_string()));
        assert_eq!(lc.close(), Some("hidden".to_string()));
    }
}
