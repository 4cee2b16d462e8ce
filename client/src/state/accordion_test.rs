use super::*;

#[test]
fn all_panels_start_collapsed() {
    let accordion = AccordionState::default();
    assert!(!accordion.is_open(0));
    assert!(!accordion.is_open(1));
}

#[test]
fn opening_second_panel_closes_first() {
    let mut accordion = AccordionState::default();
    accordion.toggle(0);
    assert!(accordion.is_open(0));
    accordion.toggle(1);
    assert!(accordion.is_open(1));
    assert!(!accordion.is_open(0));
}

#[test]
fn clicking_open_panel_collapses_it() {
    let mut accordion = AccordionState::default();
    accordion.toggle(2);
    accordion.toggle(2);
    assert_eq!(accordion.open, None);
}
