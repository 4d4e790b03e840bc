use crate::*;

/// Receives round events from [`ClickOutcome::notify`].
///
/// Every hook defaults to a no-op so collaborators only implement what they care about.
pub trait RoundListener {
    fn on_correct(&mut self, _cell: CellIndex) {}

    fn on_win(&mut self) {}

    fn on_lose(&mut self) {}
}

impl<L: RoundListener + ?Sized> RoundListener for &mut L {
    fn on_correct(&mut self, cell: CellIndex) {
        (**self).on_correct(cell);
    }

    fn on_win(&mut self) {
        (**self).on_win();
    }

    fn on_lose(&mut self) {
        (**self).on_lose();
    }
}

impl<A: RoundListener, B: RoundListener> RoundListener for (A, B) {
    fn on_correct(&mut self, cell: CellIndex) {
        self.0.on_correct(cell);
        self.1.on_correct(cell);
    }

    fn on_win(&mut self) {
        self.0.on_win();
        self.1.on_win();
    }

    fn on_lose(&mut self) {
        self.0.on_lose();
        self.1.on_lose();
    }
}
