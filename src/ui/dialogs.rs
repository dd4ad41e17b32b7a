use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

pub fn show_instructions_dialog(app: &adw::Application) {
    let dialog = adw::AlertDialog::new(
        Some("Instructions"),
        Some(
            "Turn over two cards at a time and find the matching pairs.\n\
A pair that does not match stays up until you undo or pick another card.\n\
Turn every card face up to win.",
        ),
    );
    dialog.add_response("ok", "Got it");
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    dialog.present(app.active_window().as_ref());
}

pub fn show_about_dialog(app: &adw::Application) {
    let dialog = adw::AboutDialog::builder()
        .application_name("Concentration")
        .application_icon("applications-games-symbolic")
        .version(env!("CARGO_PKG_VERSION"))
        .comments("Find the matching pairs.")
        .build();
    dialog.add_legal_section("Concentration", None, gtk::License::MitX11, None);
    dialog.present(app.active_window().as_ref());
}
