//! Auto-hiding "drag to pan" hint.
//!
//! Each activation hands out a token. A deferred hide only takes effect if its
//! token is still the current one, so a timer left over from an earlier
//! activation can never hide a newer hint.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HintToken(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HintState {
    visible: bool,
    generation: u64,
}

impl HintState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) -> HintToken {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        HintToken(self.generation)
    }

    /// Timer callback. Returns whether the hint was hidden.
    pub fn expire(&mut self, token: HintToken) -> bool {
        if token.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_hides() {
        let mut h = HintState::default();
        let t = h.show();
        assert!(h.is_visible());
        assert!(h.expire(t));
        assert!(!h.is_visible());
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut h = HintState::default();
        let first = h.show();
        let second = h.show();
        assert!(!h.expire(first));
        assert!(h.is_visible());
        assert!(h.expire(second));
    }

    #[test]
    fn test_dismiss_then_expire() {
        let mut h = HintState::default();
        let t = h.show();
        h.dismiss();
        assert!(!h.expire(t));
        assert!(!h.is_visible());
    }
}
