/// Tracks the seats a passenger group has picked, bounded by the passenger
/// count. Selecting past the cap displaces the oldest pick instead of
/// rejecting the new one.
///
/// Taken seats are the caller's responsibility to disable; the selection
/// itself does not re-validate them.
#[derive(Debug, Clone)]
pub struct SeatSelection {
    selected: Vec<String>,
    cap: usize,
}

impl SeatSelection {
    pub fn new(cap: usize) -> Self {
        Self {
            selected: Vec::new(),
            cap,
        }
    }

    /// Toggle a seat: deselect if present, otherwise select, displacing the
    /// oldest pick when already at the cap.
    pub fn toggle(&mut self, seat: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == seat) {
            self.selected.remove(pos);
            return;
        }
        if self.cap == 0 {
            return;
        }
        if self.selected.len() >= self.cap {
            self.selected.remove(0);
        }
        self.selected.push(seat.to_string());
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all picks, e.g. when the passenger count changes.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = SeatSelection::new(2);
        sel.toggle("A1");
        assert_eq!(sel.selected(), ["A1"]);
        sel.toggle("A1");
        assert!(sel.is_empty());
    }

    #[test]
    fn filling_to_cap_then_overflow_displaces_oldest() {
        let mut sel = SeatSelection::new(3);
        sel.toggle("A1");
        sel.toggle("A2");
        sel.toggle("A3");
        assert_eq!(sel.len(), 3);

        sel.toggle("B1");
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.selected(), ["A2", "A3", "B1"]);
    }

    #[test]
    fn never_exceeds_cap() {
        let mut sel = SeatSelection::new(2);
        for seat in ["A1", "A2", "B1", "B2", "C1"] {
            sel.toggle(seat);
            assert!(sel.len() <= 2);
        }
        assert_eq!(sel.selected(), ["B2", "C1"]);
    }

    #[test]
    fn survivors_keep_relative_order() {
        let mut sel = SeatSelection::new(3);
        sel.toggle("A1");
        sel.toggle("A2");
        sel.toggle("A3");
        sel.toggle("A2"); // deselect the middle pick
        assert_eq!(sel.selected(), ["A1", "A3"]);
        sel.toggle("B1");
        assert_eq!(sel.selected(), ["A1", "A3", "B1"]);
    }

    #[test]
    fn zero_cap_selects_nothing() {
        let mut sel = SeatSelection::new(0);
        sel.toggle("A1");
        assert!(sel.is_empty());
    }

    #[test]
    fn clear_resets_selection() {
        let mut sel = SeatSelection::new(2);
        sel.toggle("A1");
        sel.clear();
        assert!(sel.is_empty());
    }
}
