use std::rc::Rc;

use yew::functional::Reducible;

/// A single optional pick from a static list, e.g. the testimonial shown in
/// the video modal.
#[derive(Debug, PartialEq, Eq)]
pub struct Selection<T: 'static> {
    selected: Option<&'static T>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SelectionAction<T: 'static> {
    Select(&'static T),
    Dismiss,
}

impl<T: 'static> Default for Selection<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T: 'static> Clone for Selection<T> {
    fn clone(&self) -> Self {
        Self {
            selected: self.selected,
        }
    }
}

impl<T: 'static> Selection<T> {
    pub fn selected(&self) -> Option<&'static T> {
        self.selected
    }
}

impl<T: 'static> Reducible for Selection<T> {
    type Action = SelectionAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SelectionAction::Select(item) => Rc::new(Self {
                selected: Some(item),
            }),
            SelectionAction::Dismiss if self.selected.is_none() => self,
            SelectionAction::Dismiss => Rc::new(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Testimonial, TESTIMONIALS};

    #[test]
    fn select_holds_the_chosen_item() {
        let state = Rc::new(Selection::<Testimonial>::default());
        let state = state.reduce(SelectionAction::Select(&TESTIMONIALS[2]));
        let picked = state.selected().unwrap();
        assert_eq!(picked.author, TESTIMONIALS[2].author);
        assert_eq!(picked.video_url, TESTIMONIALS[2].video_url);
    }

    #[test]
    fn selecting_again_replaces_the_previous_pick() {
        let state = Rc::new(Selection::<Testimonial>::default())
            .reduce(SelectionAction::Select(&TESTIMONIALS[0]))
            .reduce(SelectionAction::Select(&TESTIMONIALS[4]));
        assert_eq!(state.selected(), Some(&TESTIMONIALS[4]));
    }

    #[test]
    fn dismiss_clears_the_selection() {
        let state = Rc::new(Selection::<Testimonial>::default())
            .reduce(SelectionAction::Select(&TESTIMONIALS[1]))
            .reduce(SelectionAction::Dismiss);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn dismissing_nothing_is_a_no_op() {
        let state = Rc::new(Selection::<Testimonial>::default());
        let after = state.clone().reduce(SelectionAction::Dismiss);
        assert!(Rc::ptr_eq(&state, &after));
    }
}
