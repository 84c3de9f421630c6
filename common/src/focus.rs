// focus trap for the project modal
//
// the front end collects the focusable descendants of the dialog in document order
// and asks where focus should go on Tab.  None means let the browser handle it

pub const FOCUSABLE_SELECTOR: &str = "a[href], button, textarea, input, select";

// count: number of focusables in the dialog
// current: index of the focused one, None if focus is somewhere else
pub fn trap_tab(count: usize, current: Option<usize>, shift: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let last = count - 1;

    match (current, shift) {
        // focus escaped the dialog, pull it back in
        (None, false) => Some(0),
        (None, true) => Some(last),

        (Some(0), true) => Some(last),
        (Some(i), false) if i >= last => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_from_last() {
        assert_eq!(trap_tab(4, Some(3), false), Some(0));
    }

    #[test]
    fn wraps_backward_from_first() {
        assert_eq!(trap_tab(4, Some(0), true), Some(3));
    }

    #[test]
    fn leaves_inner_moves_to_browser() {
        assert_eq!(trap_tab(4, Some(1), false), None);
        assert_eq!(trap_tab(4, Some(2), true), None);
        assert_eq!(trap_tab(4, Some(0), false), None);
        assert_eq!(trap_tab(4, Some(3), true), None);
    }

    #[test]
    fn single_focusable_stays_put() {
        assert_eq!(trap_tab(1, Some(0), false), Some(0));
        assert_eq!(trap_tab(1, Some(0), true), Some(0));
    }

    #[test]
    fn never_leaks() {
        assert_eq!(trap_tab(3, None, false), Some(0));
        assert_eq!(trap_tab(3, None, true), Some(2));
        assert_eq!(trap_tab(0, None, false), None);
    }

    #[test]
    fn shift_tab_from_the_page_lands_on_last() {
        // focus sits on the body after clicking a non-focusable part of the dialog
        let outside = None;
        assert_eq!(trap_tab(5, outside, true), Some(4));
        assert_eq!(trap_tab(5, outside, false), Some(0));
    }
}
