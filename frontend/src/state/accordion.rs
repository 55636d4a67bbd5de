use std::rc::Rc;

use yew::functional::Reducible;

/// Which panel of a one-at-a-time accordion is open, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionAction {
    Toggle(usize),
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Closes `index` if it is the open panel, otherwise opens it in place
    /// of whatever was open.
    pub fn toggle(self, index: usize) -> Self {
        Self {
            open: if self.is_open(index) { None } else { Some(index) },
        }
    }
}

impl Reducible for Accordion {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Toggle(index) => Rc::new(self.toggle(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_panels(accordion: &Accordion, count: usize) -> Vec<usize> {
        (0..count).filter(|&i| accordion.is_open(i)).collect()
    }

    #[test]
    fn starts_closed() {
        assert!(open_panels(&Accordion::default(), 6).is_empty());
    }

    #[test]
    fn opening_another_entry_closes_the_first() {
        let accordion = Accordion::default().toggle(0).toggle(3);
        assert!(accordion.is_open(3));
        assert!(!accordion.is_open(0));
        assert_eq!(open_panels(&accordion, 6), vec![3]);
    }

    #[test]
    fn toggling_the_open_entry_closes_it() {
        let accordion = Accordion::default().toggle(2).toggle(2);
        assert!(open_panels(&accordion, 6).is_empty());
    }

    #[test]
    fn reducer_toggles_through_actions() {
        let state = Rc::new(Accordion::default()).reduce(AccordionAction::Toggle(1));
        assert!(state.is_open(1));
        let state = state.reduce(AccordionAction::Toggle(4));
        assert_eq!(open_panels(&state, 6), vec![4]);
        let state = state.reduce(AccordionAction::Toggle(4));
        assert!(open_panels(&state, 6).is_empty());
    }
}
