//! Application initialization and configuration

use crate::core::cli::CliArgs;
use crate::core::errors::Result;
use crate::core::pointer::PointerPlugin;
use crate::data::LocationStore;
use crate::explorer::filters::CategoryFilters;
use crate::explorer::selection::SelectionPlugin;
use crate::rendering::{CameraPlugin, MapBackgroundPlugin, MarkerPlugin};
use crate::ui::hud::HudPlugin;
use crate::ui::theme::{
    BACKGROUND_COLOR, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use bevy::prelude::*;
use bevy::winit::WinitSettings;
use bevy_pancam::PanCamPlugin;

/// Creates a fully configured Bevy GUI application ready to run
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args.validate()?;

    let mut app = App::new();
    configure_app_settings(&mut app, cli_args);
    add_all_plugins(&mut app);
    Ok(app)
}

/// Sets up application resources and configuration
fn configure_app_settings(app: &mut App, cli_args: CliArgs) {
    app.insert_resource(cli_args)
        .init_resource::<CategoryFilters>()
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(WinitSettings::desktop_app());
}

/// Adds all plugins to the application in logical groups
fn add_all_plugins(app: &mut App) {
    app.add_plugins(configure_default_plugins())
        .add_plugins(PanCamPlugin::default())
        .add_plugins((
            PointerPlugin,
            CameraPlugin,
            MapBackgroundPlugin,
            MarkerPlugin,
        ))
        .add_plugins(SelectionPlugin)
        .add_plugins(HudPlugin)
        // The store must exist before Startup systems spawn markers
        .add_systems(PreStartup, load_location_store);
}

/// Configure the default Bevy plugins with custom settings
fn configure_default_plugins() -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..default()
            }),
            ..default()
        })
        // Disable Bevy's default LogPlugin since we're using our own
        // custom logger
        .build()
        .disable::<bevy::log::LogPlugin>()
}

/// Loads the location dataset (or its fallback) and makes it available to
/// every downstream system as a resource
fn load_location_store(mut commands: Commands, cli_args: Res<CliArgs>) {
    let store = LocationStore::load(&cli_args.data_source());
    commands.insert_resource(store);
}
