//! The location detail panel
//!
//! Shows the selected location's name, category, illustration, description,
//! attribute list, and related-location links in a panel on the right edge
//! of the window. The panel renders whatever `CurrentDetails` holds; the
//! select-location flow fills that resource, and related links feed back
//! into the same flow.
//!
//! Dismissing the panel only hides it; the marker highlight expires on its
//! own clock and is deliberately left alone here.

use crate::data::{LocationRecord, LocationStore};
use crate::explorer::selection::SelectLocation;
use crate::ui::theme::*;
use bevy::asset::LoadState;
use bevy::prelude::*;
use std::path::Path;

/// What the detail panel is currently showing.
#[derive(Resource, Default)]
pub struct CurrentDetails {
    visible: bool,
    record: Option<PresentedLocation>,
}

impl CurrentDetails {
    /// Show the panel with this location's details.
    pub fn present(&mut self, presented: PresentedLocation) {
        self.record = Some(presented);
        self.visible = true;
    }

    /// Hide the panel. The last record is kept so re-opening is cheap, and
    /// the marker highlight is untouched.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn record(&self) -> Option<&PresentedLocation> {
        self.record.as_ref()
    }
}

/// A resolved related-location link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedLink {
    pub id: String,
    pub name: String,
}

/// A location record shaped for display: category labeled, related ids
/// resolved to names, unresolvable ones already skipped.
#[derive(Debug, Clone)]
pub struct PresentedLocation {
    pub id: String,
    pub name: String,
    pub category_label: String,
    pub description: String,
    pub image: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub related: Vec<RelatedLink>,
}

impl PresentedLocation {
    /// Shape a record for the panel. Related ids that do not resolve
    /// against the store are silently dropped, a data-integrity gap rather than
    /// a runtime fault.
    pub fn from_record(
        store: &LocationStore,
        record: &LocationRecord,
    ) -> PresentedLocation {
        let related = record
            .related
            .iter()
            .filter_map(|id| {
                store.find_by_id(id).map(|target| RelatedLink {
                    id: target.id.clone(),
                    name: target.name.clone(),
                })
            })
            .collect();
        PresentedLocation {
            id: record.id.clone(),
            name: record.name.clone(),
            category_label: record.category.label().to_string(),
            description: record.description.clone(),
            image: record.image.clone(),
            attributes: record
                .attributes
                .iter()
                .map(|attribute| {
                    (attribute.label.clone(), attribute.value.clone())
                })
                .collect(),
            related,
        }
    }
}

// Component markers for the pane's pieces

#[derive(Component)]
pub struct DetailPane;

#[derive(Component)]
struct LocationNameText;

#[derive(Component)]
struct LocationCategoryText;

#[derive(Component)]
struct LocationDescriptionText;

#[derive(Component)]
struct LocationImage;

#[derive(Component)]
struct AttributesSection;

#[derive(Component)]
struct RelatedSection;

#[derive(Component)]
struct DismissButton;

/// Button component for one related-location link
#[derive(Component)]
struct RelatedLinkButton {
    target_id: String,
}

/// Plugin that adds the detail panel
pub struct DetailPanePlugin;

impl Plugin for DetailPanePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentDetails>()
            .add_systems(Startup, spawn_detail_pane)
            .add_systems(
                Update,
                (
                    update_detail_pane,
                    handle_related_links,
                    handle_dismiss_button,
                    swap_broken_image,
                ),
            );
    }
}

/// Spawns the (initially hidden) detail pane on the right edge
fn spawn_detail_pane(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
) {
    let position_props = UiRect {
        right: Val::Px(WIDGET_MARGIN),
        top: Val::Px(WIDGET_MARGIN * 3.0),
        left: Val::Auto,
        bottom: Val::Auto,
    };

    commands
        .spawn((
            create_widget_style(
                PositionType::Absolute,
                position_props,
                DetailPane,
                "DetailPane",
            ),
            Visibility::Hidden,
        ))
        .with_children(|pane| {
            // Header row: name + dismiss button
            pane.spawn(Node {
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                width: Val::Percent(100.0),
                column_gap: Val::Px(12.0),
                ..default()
            })
            .with_children(|header| {
                header.spawn((
                    Text::new(""),
                    TextFont {
                        font: asset_server.load(DEFAULT_FONT_PATH),
                        font_size: WIDGET_TITLE_FONT_SIZE,
                        ..default()
                    },
                    TextColor(WIDGET_VALUE_COLOR),
                    LocationNameText,
                ));
                header
                    .spawn((
                        Button,
                        DismissButton,
                        Node {
                            padding: UiRect::all(Val::Px(4.0)),
                            ..default()
                        },
                        BackgroundColor(NORMAL_BUTTON),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new("X"),
                            TextFont {
                                font: asset_server.load(MONO_FONT_PATH),
                                font_size: WIDGET_TEXT_FONT_SIZE,
                                ..default()
                            },
                            TextColor(BUTTON_TEXT_COLOR),
                        ));
                    });
            });

            pane.spawn((
                Text::new(""),
                TextFont {
                    font: asset_server.load(MONO_FONT_PATH),
                    font_size: WIDGET_TEXT_FONT_SIZE,
                    ..default()
                },
                TextColor(WIDGET_LABEL_COLOR),
                LocationCategoryText,
            ));

            pane.spawn((
                ImageNode::new(
                    asset_server.load(PLACEHOLDER_IMAGE_PATH),
                ),
                Node {
                    width: Val::Px(320.0),
                    height: Val::Px(180.0),
                    ..default()
                },
                LocationImage,
            ));

            pane.spawn((
                Text::new(""),
                TextFont {
                    font: asset_server.load(DEFAULT_FONT_PATH),
                    font_size: WIDGET_TEXT_FONT_SIZE,
                    ..default()
                },
                TextColor(WIDGET_VALUE_COLOR),
                LocationDescriptionText,
            ));

            pane.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(2.0),
                    ..default()
                },
                AttributesSection,
            ));

            pane.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(2.0),
                    ..default()
                },
                RelatedSection,
            ));
        });
}

/// Rebuilds the pane's contents whenever the presented record changes
#[allow(clippy::too_many_arguments)]
fn update_detail_pane(
    mut commands: Commands,
    details: Res<CurrentDetails>,
    asset_server: Res<AssetServer>,
    mut pane_query: Query<&mut Visibility, With<DetailPane>>,
    mut name_query: Query<
        &mut Text,
        (
            With<LocationNameText>,
            Without<LocationCategoryText>,
            Without<LocationDescriptionText>,
        ),
    >,
    mut category_query: Query<
        &mut Text,
        (
            With<LocationCategoryText>,
            Without<LocationNameText>,
            Without<LocationDescriptionText>,
        ),
    >,
    mut description_query: Query<
        &mut Text,
        (
            With<LocationDescriptionText>,
            Without<LocationNameText>,
            Without<LocationCategoryText>,
        ),
    >,
    mut image_query: Query<&mut ImageNode, With<LocationImage>>,
    attributes_query: Query<Entity, With<AttributesSection>>,
    related_query: Query<Entity, With<RelatedSection>>,
) {
    if !details.is_changed() {
        return;
    }

    for mut visibility in &mut pane_query {
        *visibility = if details.is_visible() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }

    let Some(presented) = details.record() else {
        return;
    };

    for mut text in &mut name_query {
        *text = Text::new(presented.name.clone());
    }
    for mut text in &mut category_query {
        *text = Text::new(presented.category_label.clone());
    }
    for mut text in &mut description_query {
        *text = Text::new(presented.description.clone());
    }

    // Missing image falls straight to the placeholder; a broken one is
    // swapped later by swap_broken_image once the load fails.
    let image_path = presented
        .image
        .as_deref()
        .unwrap_or(PLACEHOLDER_IMAGE_PATH);
    for mut image in &mut image_query {
        image.image = asset_server.load(image_path.to_string());
    }

    for section in &attributes_query {
        rebuild_attributes(
            &mut commands,
            section,
            &asset_server,
            &presented.attributes,
        );
    }
    for section in &related_query {
        rebuild_related(
            &mut commands,
            section,
            &asset_server,
            &presented.related,
        );
    }
}

/// Replaces the attribute rows; the whole section is left empty when the
/// record has no attributes
fn rebuild_attributes(
    commands: &mut Commands,
    section: Entity,
    asset_server: &AssetServer,
    attributes: &[(String, String)],
) {
    commands.entity(section).despawn_related::<Children>();
    if attributes.is_empty() {
        return;
    }
    commands.entity(section).with_children(|list| {
        for (label, value) in attributes {
            list.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(6.0),
                ..default()
            })
            .with_children(|row| {
                row.spawn((
                    Text::new(format!("{label}:")),
                    TextFont {
                        font: asset_server.load(MONO_FONT_PATH),
                        font_size: WIDGET_TEXT_FONT_SIZE,
                        ..default()
                    },
                    TextColor(WIDGET_LABEL_COLOR),
                ));
                row.spawn((
                    Text::new(value.clone()),
                    TextFont {
                        font: asset_server.load(MONO_FONT_PATH),
                        font_size: WIDGET_TEXT_FONT_SIZE,
                        ..default()
                    },
                    TextColor(WIDGET_VALUE_COLOR),
                ));
            });
        }
    });
}

/// Replaces the related-location links
fn rebuild_related(
    commands: &mut Commands,
    section: Entity,
    asset_server: &AssetServer,
    related: &[RelatedLink],
) {
    commands.entity(section).despawn_related::<Children>();
    commands.entity(section).with_children(|list| {
        list.spawn((
            Text::new("Related"),
            TextFont {
                font: asset_server.load(MONO_FONT_PATH),
                font_size: WIDGET_TEXT_FONT_SIZE,
                ..default()
            },
            TextColor(WIDGET_LABEL_COLOR),
        ));
        if related.is_empty() {
            list.spawn((
                Text::new("No related locations"),
                TextFont {
                    font: asset_server.load(DEFAULT_FONT_PATH),
                    font_size: WIDGET_TEXT_FONT_SIZE,
                    ..default()
                },
                TextColor(WIDGET_VALUE_COLOR),
            ));
            return;
        }
        for link in related {
            list.spawn((
                Button,
                RelatedLinkButton {
                    target_id: link.id.clone(),
                },
                Node {
                    padding: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(Color::NONE),
            ))
            .with_children(|button| {
                button.spawn((
                    Text::new(link.name.clone()),
                    TextFont {
                        font: asset_server.load(DEFAULT_FONT_PATH),
                        font_size: WIDGET_TEXT_FONT_SIZE,
                        ..default()
                    },
                    TextColor(LINK_COLOR),
                ));
            });
        }
    });
}

/// Related links re-enter the same select-location flow as marker clicks
fn handle_related_links(
    interactions: Query<
        (&Interaction, &RelatedLinkButton, &Children),
        Changed<Interaction>,
    >,
    mut link_text: Query<&mut TextColor>,
    mut select_requests: EventWriter<SelectLocation>,
) {
    for (interaction, link, children) in &interactions {
        match interaction {
            Interaction::Pressed => {
                select_requests.write(SelectLocation {
                    id: link.target_id.clone(),
                });
            }
            Interaction::Hovered => {
                for child in children {
                    if let Ok(mut color) = link_text.get_mut(*child) {
                        *color = TextColor(LINK_HOVER_COLOR);
                    }
                }
            }
            Interaction::None => {
                for child in children {
                    if let Ok(mut color) = link_text.get_mut(*child) {
                        *color = TextColor(LINK_COLOR);
                    }
                }
            }
        }
    }
}

/// Hides the panel on the X button. Highlight expiry is time-based and
/// intentionally not cleared here.
fn handle_dismiss_button(
    interactions: Query<
        &Interaction,
        (Changed<Interaction>, With<DismissButton>),
    >,
    mut details: ResMut<CurrentDetails>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            details.dismiss();
        }
    }
}

/// A failed illustration is swapped for the placeholder exactly once; a
/// handle that already points at the placeholder is left alone, even if
/// the placeholder itself fails to load.
fn needs_placeholder_swap(load_failed: bool, is_placeholder: bool) -> bool {
    load_failed && !is_placeholder
}

/// Swaps the illustration for the placeholder once its load fails
fn swap_broken_image(
    asset_server: Res<AssetServer>,
    mut image_query: Query<&mut ImageNode, With<LocationImage>>,
) {
    for mut image in &mut image_query {
        let is_placeholder = image.image.path().is_some_and(|path| {
            path.path() == Path::new(PLACEHOLDER_IMAGE_PATH)
        });
        let load_failed = matches!(
            asset_server.get_load_state(image.image.id()),
            Some(LoadState::Failed(_))
        );
        if needs_placeholder_swap(load_failed, is_placeholder) {
            image.image = asset_server.load(PLACEHOLDER_IMAGE_PATH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_ids_resolve_to_names_in_order() {
        let store = LocationStore::fallback();
        let palace = store.find_by_id("royal-palace").unwrap();
        let presented = PresentedLocation::from_record(&store, palace);
        let names: Vec<&str> = presented
            .related
            .iter()
            .map(|link| link.name.as_str())
            .collect();
        assert_eq!(names, ["Highcrown", "Kingdom of Falkrest"]);
    }

    #[test]
    fn unresolvable_related_ids_are_silently_skipped() {
        let json = r#"[
            {"id": "keep", "name": "The Keep", "category": "landmark",
             "coordinates": {"x": 1.0, "y": 1.0}, "description": "",
             "related": ["ghost-town", "keep"]}
        ]"#;
        let store = LocationStore::parse(json).unwrap();
        let keep = store.find_by_id("keep").unwrap();
        let presented = PresentedLocation::from_record(&store, keep);
        // Only the self-reference resolves; the dangling id vanishes
        assert_eq!(presented.related.len(), 1);
        assert_eq!(presented.related[0].id, "keep");
    }

    #[test]
    fn records_without_attributes_present_an_empty_section() {
        let store = LocationStore::fallback();
        let emberwood = store.find_by_id("emberwood").unwrap();
        let presented = PresentedLocation::from_record(&store, emberwood);
        assert!(presented.attributes.is_empty());
        assert!(presented.related.is_empty());
    }

    #[test]
    fn failed_placeholders_are_never_reloaded() {
        // A broken illustration gets the placeholder once
        assert!(needs_placeholder_swap(true, false));
        // A broken placeholder stays put instead of reloading every frame
        assert!(!needs_placeholder_swap(true, true));
        // Pending or loaded images are left alone either way
        assert!(!needs_placeholder_swap(false, false));
        assert!(!needs_placeholder_swap(false, true));
    }

    #[test]
    fn dismiss_hides_the_panel_but_keeps_the_record() {
        let store = LocationStore::fallback();
        let highcrown = store.find_by_id("highcrown").unwrap();
        let mut details = CurrentDetails::default();
        details.present(PresentedLocation::from_record(&store, highcrown));
        assert!(details.is_visible());

        details.dismiss();
        assert!(!details.is_visible());
        assert!(details.record().is_some());
    }
}
