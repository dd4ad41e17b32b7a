use std::cell::RefCell;
use std::rc::Rc;

use gio::SimpleAction;
use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use log::{debug, error, info};

use super::AppError;
use super::board::{TILE_GAP, build_board_grid};
use super::cheat::CheatWindow;
use super::debug_tools;
use super::dialogs::{show_about_dialog, show_instructions_dialog};
use super::hud::{build_command_bar, build_moves_label, build_status_label};
use super::presenter::BoardPresenter;
use super::surface::GtkBoardSurface;
use crate::config::Settings;
use crate::model::ConcentrationModel;

const APP_ID: &str = "io.github.concentration.Concentration";
const RESOURCE_PREFIX: &str = "/io/github/concentration/Concentration";
const CONTENT_MARGIN: i32 = 12;

pub fn run(settings: Settings) -> glib::ExitCode {
    glib::set_prgname(Some("concentration"));
    if let Err(err) = register_resources() {
        error!("{err}");
        return glib::ExitCode::FAILURE;
    }

    let app = adw::Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| build_ui(app, &settings));

    // Command line arguments are not consumed.
    let no_args: [&str; 0] = [];
    app.run_with_args(&no_args)
}

fn register_resources() -> Result<(), AppError> {
    gio::resources_register_include!("concentration.gresource").map_err(AppError::Resources)
}

fn load_css() {
    let Some(display) = gtk::gdk::Display::default() else {
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_resource(&format!("{RESOURCE_PREFIX}/style.css"));
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn build_ui(app: &adw::Application, settings: &Settings) {
    if let Some(win) = app.active_window() {
        win.present();
        return;
    }
    load_css();

    let model = Rc::new(match settings.seed {
        Some(seed) => {
            info!("dealing from seed {seed}");
            ConcentrationModel::with_seed(seed)
        }
        None => ConcentrationModel::new(),
    });

    let status_label = build_status_label();
    let moves_label = build_moves_label();
    let (board_grid, cells) = build_board_grid(&model);
    let command_bar = build_command_bar(&moves_label);

    let content = gtk::Box::new(gtk::Orientation::Vertical, TILE_GAP);
    content.set_margin_top(CONTENT_MARGIN);
    content.set_margin_bottom(CONTENT_MARGIN);
    content.set_margin_start(CONTENT_MARGIN);
    content.set_margin_end(CONTENT_MARGIN);
    content.append(&status_label);
    content.append(&board_grid);
    content.append(&command_bar);

    let menu_model = gio::Menu::new();
    menu_model.append(Some("Instructions"), Some("app.instructions"));
    menu_model.append(Some("About Concentration"), Some("app.about"));
    menu_model.append(Some("Quit"), Some("app.quit"));
    let menu_button = gtk::MenuButton::builder()
        .icon_name("open-menu-symbolic")
        .menu_model(&menu_model)
        .build();

    let header = adw::HeaderBar::builder()
        .title_widget(&adw::WindowTitle::new("Concentration", ""))
        .build();
    header.pack_end(&menu_button);

    let toolbar = adw::ToolbarView::new();
    toolbar.add_top_bar(&header);
    toolbar.set_content(Some(&content));

    let win = adw::ApplicationWindow::builder()
        .application(app)
        .title("Concentration")
        .resizable(false)
        .content(&toolbar)
        .build();

    let cheat_window = CheatWindow::new(&win);
    let surface = GtkBoardSurface::new(cells, status_label, moves_label, cheat_window.clone());
    let presenter = Rc::new(RefCell::new(BoardPresenter::new(
        model.clone(),
        surface,
        settings.win_rule,
    )));
    BoardPresenter::attach(&presenter);

    install_actions(app, &model, &cheat_window);

    if settings.debug {
        info!("debug shortcuts enabled");
        let keys = gtk::EventControllerKey::new();
        keys.set_propagation_phase(gtk::PropagationPhase::Capture);
        keys.connect_key_pressed({
            let model = model.clone();
            move |_, key, _, mods| {
                if debug_tools::handle_debug_shortcut(&model, key, mods) {
                    glib::Propagation::Stop
                } else {
                    glib::Propagation::Proceed
                }
            }
        });
        win.add_controller(keys);
    }

    // The window owns the presenter; the model only holds a weak handle.
    win.connect_destroy(move |_| {
        debug!("window closed, final status {:?}", presenter.borrow().status());
    });

    win.present();
}

fn install_actions(app: &adw::Application, model: &Rc<ConcentrationModel>, cheat_window: &CheatWindow) {
    let reset_action = SimpleAction::new("reset", None);
    reset_action.connect_activate({
        let model = model.clone();
        move |_, _| model.reset()
    });
    app.add_action(&reset_action);

    let undo_action = SimpleAction::new("undo", None);
    undo_action.connect_activate({
        let model = model.clone();
        move |_, _| {
            if !model.undo() {
                debug!("nothing to undo");
            }
        }
    });
    app.add_action(&undo_action);

    let cheat_action = SimpleAction::new("cheat", None);
    cheat_action.connect_activate({
        let model = model.clone();
        let cheat_window = cheat_window.clone();
        move |_, _| {
            model.cheat();
            cheat_window.present();
        }
    });
    app.add_action(&cheat_action);

    let instructions_action = SimpleAction::new("instructions", None);
    instructions_action.connect_activate({
        let app = app.clone();
        move |_, _| {
            show_instructions_dialog(&app);
        }
    });
    app.add_action(&instructions_action);

    let about_action = SimpleAction::new("about", None);
    about_action.connect_activate({
        let app = app.clone();
        move |_, _| {
            show_about_dialog(&app);
        }
    });
    app.add_action(&about_action);

    let quit_action = SimpleAction::new("quit", None);
    quit_action.connect_activate({
        let app = app.clone();
        move |_, _| app.quit()
    });
    app.add_action(&quit_action);

    app.set_accels_for_action("app.reset", &["<Primary>n"]);
    app.set_accels_for_action("app.undo", &["<Primary>z"]);
    app.set_accels_for_action("app.quit", &["<Primary>q"]);
}
