use std::rc::Rc;

use super::*;
use crate::testkit::FakePopup;

#[test]
fn initial_state_comes_from_markup() {
    assert_eq!(Popup::new(Rc::new(FakePopup::open())).state(), PopupState::Open);
    assert_eq!(Popup::new(Rc::new(FakePopup::closed())).state(), PopupState::Closed);
}

#[test]
fn backdrop_click_closes_open_popup() {
    let view = Rc::new(FakePopup::open());
    let popup = Popup::new(view.clone());
    assert!(popup.on_click(ClickTarget::Backdrop));
    assert_eq!(popup.state(), PopupState::Closed);
    assert!(!view.visible.get());
}

#[test]
fn content_click_keeps_popup_open() {
    let popup = Popup::new(Rc::new(FakePopup::open()));
    assert!(!popup.on_click(ClickTarget::Other));
    assert_eq!(popup.state(), PopupState::Open);
    assert_eq!(popup.generation(), 0);
}

#[test]
fn close_bumps_generation_only_on_transition() {
    let popup = Popup::new(Rc::new(FakePopup::open()));
    assert!(popup.close());
    assert_eq!(popup.generation(), 1);
    assert!(!popup.close());
    assert!(!popup.on_click(ClickTarget::Backdrop));
    assert_eq!(popup.generation(), 1);
}

#[test]
fn open_then_close_cycles() {
    let popup = Popup::new(Rc::new(FakePopup::closed()));
    popup.open();
    assert_eq!(popup.state(), PopupState::Open);
    popup.open();
    assert_eq!(popup.state(), PopupState::Open);
    assert!(popup.close());
    popup.open();
    assert!(popup.close());
    assert_eq!(popup.generation(), 2);
}
