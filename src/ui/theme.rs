use crate::data::Category;
use bevy::prelude::*;

// Asset Paths
pub const DEFAULT_FONT_PATH: &str = "fonts/CrimsonPro-Regular.ttf";
pub const MONO_FONT_PATH: &str = "fonts/HasubiMono-Regular.ttf";
pub const MAP_IMAGE_PATH: &str = "images/worldmap.png";
pub const PLACEHOLDER_IMAGE_PATH: &str = "images/locations/placeholder.png";

// Window Configuration
pub const WINDOW_TITLE: &str = "Loremap";
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

pub const BACKGROUND_COLOR: Color = Color::srgb(0.07, 0.07, 0.09);

// Font Sizes
pub const WIDGET_TITLE_FONT_SIZE: f32 = 28.0;
pub const WIDGET_TEXT_FONT_SIZE: f32 = 20.0;
pub const TOOLBAR_BUTTON_FONT_SIZE: f32 = 20.0;

// Widget Visual Style Constants
pub const WIDGET_BACKGROUND_COLOR: Color = Color::srgba(0.1, 0.1, 0.12, 0.96);
pub const WIDGET_BORDER_COLOR: Color = Color::srgba(0.5, 0.45, 0.35, 1.0);
pub const WIDGET_BORDER_RADIUS: f32 = 4.0;
pub const WIDGET_BORDER_WIDTH: f32 = 2.0;
pub const WIDGET_PADDING: f32 = 16.0;
pub const WIDGET_MARGIN: f32 = 24.0;
pub const WIDGET_ROW_GAP: f32 = 8.0;

pub const WIDGET_LABEL_COLOR: Color = Color::srgba(0.7, 0.65, 0.55, 1.0);
pub const WIDGET_VALUE_COLOR: Color = Color::srgba(0.92, 0.89, 0.82, 1.0);
pub const LINK_COLOR: Color = Color::srgb(0.45, 0.75, 1.0);
pub const LINK_HOVER_COLOR: Color = Color::srgb(0.7, 0.88, 1.0);

// Toolbar Visual Style Constants
pub const TOOLBAR_BACKGROUND_COLOR: Color = Color::srgba(0.1, 0.1, 0.12, 0.96);
pub const TOOLBAR_BORDER_COLOR: Color = Color::srgba(0.5, 0.45, 0.35, 1.0);
pub const TOOLBAR_BORDER_WIDTH: f32 = 2.0;
pub const TOOLBAR_BORDER_RADIUS: f32 = 4.0;
pub const TOOLBAR_PADDING: f32 = 8.0;
pub const TOOLBAR_MARGIN: f32 = 16.0;
pub const TOOLBAR_ITEM_SPACING: f32 = 4.0;

// Button Colors
pub const NORMAL_BUTTON: Color = Color::srgb(0.12, 0.12, 0.14);
pub const HOVERED_BUTTON: Color = Color::srgb(0.25, 0.25, 0.28);
pub const PRESSED_BUTTON: Color = Color::srgb(0.85, 0.55, 0.15);
pub const ACTIVE_BUTTON: Color = Color::srgb(0.3, 0.25, 0.15);
pub const BUTTON_TEXT_COLOR: Color = Color::srgb(0.85, 0.82, 0.75);
pub const ACTIVE_BUTTON_TEXT_COLOR: Color = Color::srgb(1.0, 0.95, 0.8);

// Map Underlay (shows through until the map image loads)
pub const MAP_UNDERLAY_COLOR: Color = Color::srgb(0.16, 0.2, 0.24);

// Marker Rendering
pub const MARKER_SIZE: f32 = 18.0;
pub const MARKER_GLYPH_FONT_SIZE: f32 = 14.0;
pub const MARKER_HOVER_TINT: Color = Color::srgb(1.0, 1.0, 1.0);
pub const HIGHLIGHT_COLOR: Color = Color::srgb(1.0, 0.85, 0.3);
pub const HIGHLIGHT_SCALE: f32 = 1.6;

/// Marker fill color for a category
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Nation => Color::srgb(0.75, 0.25, 0.25),
        Category::City => Color::srgb(0.25, 0.55, 0.85),
        Category::Region => Color::srgb(0.3, 0.65, 0.35),
        Category::Landmark => Color::srgb(0.7, 0.55, 0.85),
        Category::Unknown => Color::srgb(0.5, 0.5, 0.5),
    }
}

/// Marker glyph character for a category
pub fn category_glyph(category: Category) -> &'static str {
    match category {
        Category::Nation => "\u{2655}",   // crown
        Category::City => "\u{25C9}",     // ringed dot
        Category::Region => "\u{25B2}",   // triangle
        Category::Landmark => "\u{2605}", // star
        Category::Unknown => "\u{25CF}",  // plain dot
    }
}

/// Creates the shared container style for HUD widgets
pub fn create_widget_style<T: Component>(
    position: PositionType,
    position_props: UiRect,
    marker: T,
    name: &str,
) -> impl Bundle {
    (
        Node {
            position_type: position,
            left: position_props.left,
            right: position_props.right,
            top: position_props.top,
            bottom: position_props.bottom,
            padding: UiRect::all(Val::Px(WIDGET_PADDING)),
            margin: UiRect::all(Val::Px(0.0)),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(WIDGET_ROW_GAP),
            border: UiRect::all(Val::Px(WIDGET_BORDER_WIDTH)),
            width: Val::Auto,
            height: Val::Auto,
            max_width: Val::Px(360.0),
            max_height: Val::Percent(80.0),
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::FlexStart,
            ..default()
        },
        BackgroundColor(WIDGET_BACKGROUND_COLOR),
        BorderColor(WIDGET_BORDER_COLOR),
        BorderRadius::all(Val::Px(WIDGET_BORDER_RADIUS)),
        // Widget roots report hover so world-space input can stand down
        Interaction::default(),
        marker,
        Name::new(name.to_string()),
    )
}
