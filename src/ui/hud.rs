use gtk4 as gtk;
use gtk4::prelude::*;

use super::presenter::{StatusLine, moves_text};

pub(super) fn build_status_label() -> gtk::Label {
    gtk::Label::builder()
        .label(StatusLine::AwaitingFirst.text())
        .halign(gtk::Align::Start)
        .css_classes(vec!["status-label", "title-4"])
        .build()
}

pub(super) fn build_moves_label() -> gtk::Label {
    gtk::Label::builder()
        .label(moves_text(0))
        .halign(gtk::Align::End)
        .css_classes(vec!["moves-label", "numeric"])
        .build()
}

fn command_button(label: &str, action: &str, tooltip: &str) -> gtk::Button {
    let button = gtk::Button::with_label(label);
    button.set_action_name(Some(action));
    button.set_tooltip_text(Some(tooltip));
    button
}

/// Reset, Undo and Cheat in a centered row, move counter pinned to the end.
pub(super) fn build_command_bar(moves_label: &gtk::Label) -> gtk::CenterBox {
    let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    buttons.append(&command_button("Reset", "app.reset", "New Game (Ctrl+N)"));
    buttons.append(&command_button("Undo", "app.undo", "Undo (Ctrl+Z)"));
    buttons.append(&command_button("Cheat", "app.cheat", "Show every card"));

    let bar = gtk::CenterBox::new();
    bar.add_css_class("command-bar");
    bar.set_center_widget(Some(&buttons));
    bar.set_end_widget(Some(moves_label));
    bar
}

pub(super) fn set_status(label: &gtk::Label, status: StatusLine) {
    label.set_text(status.text());
    if status == StatusLine::Win {
        label.add_css_class("win");
    } else {
        label.remove_css_class("win");
    }
}

pub(super) fn set_moves(label: &gtk::Label, text: &str) {
    label.set_text(text);
}
