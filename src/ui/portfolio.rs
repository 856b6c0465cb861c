use eframe::egui;

use crate::app::controller::ApplicationController;
use crate::app::events::AppEvent;
use crate::catalog::models::{CatalogEntry, CategoryTag};

const CARD_WIDTH: f32 = 230.0;
const LIGHTBOX_MAX_WIDTH: f32 = 720.0;

/// Category chips plus the work grid. Events are collected and dispatched
/// by the shell after the frame.
pub fn portfolio_view(
    ui: &mut egui::Ui,
    controller: &ApplicationController,
    events: &mut Vec<AppEvent>,
) {
    ui.heading("Creative Portfolio");
    ui.label("Showcasing my journey through design, video editing, and 3D visualization.");
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        for tag in CategoryTag::ALL {
            let selected = controller.selected_category() == tag;
            if ui.selectable_label(selected, tag.label()).clicked() {
                events.push(AppEvent::SelectCategory(tag));
            }
        }
    });
    ui.separator();

    // The whole grid is keyed by the generation counter, so a selection
    // change swaps the block in one piece instead of diffing cards.
    ui.push_id(controller.state().grid_generation, |ui| {
        ui.horizontal_wrapped(|ui| {
            for entry in controller.visible_entries() {
                entry_card(ui, entry, events);
            }
        });
    });
}

fn entry_card(ui: &mut egui::Ui, entry: &CatalogEntry, events: &mut Vec<AppEvent>) {
    let frame_response = egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            match entry {
                CatalogEntry::Product {
                    title,
                    description,
                    tools,
                    ..
                } => {
                    ui.label(egui::RichText::new(title).strong());
                    ui.label(egui::RichText::new(description).small());
                    if !tools.is_empty() {
                        ui.label(egui::RichText::new(tools.join(" / ")).weak().small());
                    }
                }
                CatalogEntry::Design {
                    title, description, ..
                } => {
                    ui.label(egui::RichText::new(title).strong());
                    ui.label(egui::RichText::new(description).small());
                }
                CatalogEntry::Video {
                    title,
                    description,
                    external_url,
                    ..
                } => {
                    ui.label(egui::RichText::new(title).strong());
                    ui.label(egui::RichText::new(description).small());
                    ui.hyperlink_to("Watch on YouTube", external_url);
                }
            }
        })
        .response;

    // Only image-bearing entries open the lightbox.
    if let Some(image_url) = entry.image_url() {
        let click = ui.interact(
            frame_response.rect,
            frame_response.id.with("card_click"),
            egui::Sense::click(),
        );
        if click.clicked() {
            events.push(AppEvent::OpenLightbox {
                image_url: image_url.to_string(),
                title: entry.title().to_string(),
            });
        }
    }
}

/// Full-screen focused view. The backdrop click closes; clicks inside the
/// content region are claimed by a higher layer and never reach it.
pub fn lightbox_overlay(
    ctx: &egui::Context,
    controller: &ApplicationController,
    events: &mut Vec<AppEvent>,
) {
    let Some((image_url, title)) = controller.lightbox().focused() else {
        return;
    };

    if ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
        events.push(AppEvent::CloseLightbox);
    }

    let screen = ctx.screen_rect();

    let backdrop_clicked = egui::Area::new(egui::Id::new("lightbox_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(217),
            );
            ui.allocate_rect(screen, egui::Sense::click()).clicked()
        })
        .inner;
    if backdrop_clicked {
        events.push(AppEvent::LightboxBackdropPressed);
    }

    egui::Area::new(egui::Id::new("lightbox_content"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let inner = egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(LIGHTBOX_MAX_WIDTH.min(screen.width() * 0.9));
                ui.vertical_centered(|ui| {
                    if ui.button("Close").clicked() {
                        events.push(AppEvent::CloseLightbox);
                    }
                    ui.add_space(8.0);
                    ui.heading(title);
                    ui.label(egui::RichText::new(image_url).weak().small());
                });
            });

            let content_click = ui.interact(
                inner.response.rect,
                egui::Id::new("lightbox_content_region"),
                egui::Sense::click(),
            );
            if content_click.clicked() {
                events.push(AppEvent::LightboxContentPressed);
            }
        });
}
