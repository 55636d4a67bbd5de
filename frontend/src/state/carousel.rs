use std::rc::Rc;

use yew::functional::Reducible;

/// Position within a fixed-length list of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    Goto(usize),
}

impl Carousel {
    /// Starts on the first slide. A carousel always has at least one slot.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slides(&self) -> usize {
        self.len
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Jumps to `index`; out of range leaves the carousel where it is.
    pub fn goto(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::Goto(index) => self.goto(index),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(len: usize, index: usize) -> Carousel {
        Carousel::new(len).goto(index)
    }

    #[test]
    fn next_and_prev_wrap_around() {
        assert_eq!(at(5, 4).next().index(), 0);
        assert_eq!(at(5, 0).prev().index(), 4);
        assert_eq!(at(5, 2).next().index(), 3);
        assert_eq!(at(5, 2).prev().index(), 1);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=6 {
            for start in 0..len {
                let mut forward = at(len, start);
                let mut backward = at(len, start);
                for _ in 0..len {
                    forward = forward.next();
                    backward = backward.prev();
                }
                assert_eq!(forward.index(), start, "next x{len} from {start}");
                assert_eq!(backward.index(), start, "prev x{len} from {start}");
            }
        }
    }

    #[test]
    fn goto_selects_exactly_that_slide() {
        let carousel = Carousel::new(5);
        for k in 0..5 {
            assert_eq!(carousel.goto(k).index(), k);
        }
    }

    #[test]
    fn goto_out_of_range_is_ignored() {
        assert_eq!(at(5, 3).goto(5).index(), 3);
        assert_eq!(at(5, 3).goto(usize::MAX).index(), 3);
    }

    #[test]
    fn single_slide_stays_put() {
        let one = Carousel::new(1);
        assert_eq!(one.next().index(), 0);
        assert_eq!(one.prev().index(), 0);
    }

    #[test]
    fn empty_list_is_treated_as_one_slot() {
        let empty = Carousel::new(0);
        assert_eq!(empty.slides(), 1);
        assert_eq!(empty.next().index(), 0);
    }

    #[test]
    fn reducer_dispatches_actions() {
        let state = Rc::new(Carousel::new(3));
        let state = state.reduce(CarouselAction::Prev);
        assert_eq!(state.index(), 2);
        let state = state.reduce(CarouselAction::Next);
        assert_eq!(state.index(), 0);
        let state = state.reduce(CarouselAction::Goto(1));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn reducer_keeps_allocation_when_nothing_changes() {
        let state = Rc::new(Carousel::new(3));
        let same = state.clone().reduce(CarouselAction::Goto(0));
        assert!(Rc::ptr_eq(&state, &same));
    }
}
