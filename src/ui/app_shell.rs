use eframe::egui;

use crate::app::controller::ApplicationController;
use crate::app::error::AppError;
use crate::app::events::AppEvent;
use crate::app::state::HEADER_SCROLL_THRESHOLD;
use crate::i18n::TextKey;
use crate::infra::config::AppConfig;
use crate::nav::Route;
use crate::theme::ThemeMode;
use crate::ui::portfolio;

pub struct AppShell {
    controller: ApplicationController,
}

impl AppShell {
    pub fn new(controller: ApplicationController) -> Self {
        Self { controller }
    }

    fn header(&self, ctx: &egui::Context, events: &mut Vec<AppEvent>) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            let padding = if self.controller.state().header_condensed {
                4.0
            } else {
                10.0
            };
            ui.add_space(padding);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("PANDU").heading().strong());
                ui.separator();

                for route in Route::ALL {
                    let active = self.controller.is_nav_active(route);
                    let label = self.controller.text(route.label_key());
                    if ui.selectable_label(active, label).clicked() {
                        events.push(AppEvent::Navigate(route));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let menu_icon = if self.controller.state().menu_open {
                        "✖"
                    } else {
                        "☰"
                    };
                    if ui.button(menu_icon).clicked() {
                        events.push(AppEvent::ToggleMenu);
                    }

                    if ui
                        .button(self.controller.locale().locale().code())
                        .clicked()
                    {
                        events.push(AppEvent::ToggleLocale);
                    }

                    let theme_icon = match self.controller.theme_mode() {
                        ThemeMode::Light => "🌙",
                        ThemeMode::Dark => "☀",
                    };
                    if ui.button(theme_icon).clicked() {
                        events.push(AppEvent::ToggleTheme);
                    }
                });
            });
            ui.add_space(padding);

            if self.controller.state().menu_open {
                ui.separator();
                for route in Route::ALL {
                    let active = self.controller.is_nav_active(route);
                    let label = self.controller.text(route.label_key());
                    if ui.selectable_label(active, label).clicked() {
                        events.push(AppEvent::Navigate(route));
                    }
                }
                if ui
                    .link(self.controller.text(TextKey::LanguageSwitch))
                    .clicked()
                {
                    events.push(AppEvent::ToggleLocale);
                }
                ui.add_space(4.0);
            }
        });
    }

    fn footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(self.controller.text(TextKey::FooterTagline)).small(),
            );
            ui.label(
                egui::RichText::new(format!(
                    "PANDU. {}",
                    self.controller.text(TextKey::FooterRights)
                ))
                .weak()
                .small(),
            );
            ui.add_space(6.0);
        });
    }

    fn page(&self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        match self.controller.state().route {
            Route::Home => {
                ui.heading(self.controller.text(TextKey::NavHome));
                ui.label(self.controller.text(TextKey::FooterTagline));
                if ui
                    .button(self.controller.text(TextKey::NavPortfolio))
                    .clicked()
                {
                    events.push(AppEvent::Navigate(Route::Portfolio));
                }
            }
            Route::Portfolio => {
                portfolio::portfolio_view(ui, &self.controller, events);
            }
            Route::Cv => {
                ui.heading(self.controller.text(TextKey::NavCv));
            }
            Route::Services => {
                ui.heading(self.controller.text(TextKey::NavServices));
            }
            Route::Contact => {
                ui.heading(self.controller.text(TextKey::NavContact));
            }
        }
    }
}

impl eframe::App for AppShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_theme(match self.controller.theme_mode() {
            ThemeMode::Light => egui::Theme::Light,
            ThemeMode::Dark => egui::Theme::Dark,
        });

        let mut events: Vec<AppEvent> = Vec::new();
        let scroll_reset = self.controller.take_scroll_reset();

        self.header(ctx, &mut events);
        self.footer(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = egui::ScrollArea::vertical()
                .enable_scrolling(!self.controller.scroll_suspended());
            if scroll_reset {
                scroll = scroll.scroll_offset(egui::Vec2::ZERO);
            }

            let output = scroll.show(ui, |ui| {
                self.page(ui, &mut events);
            });

            let offset = output.state.offset.y;
            if (offset > HEADER_SCROLL_THRESHOLD) != self.controller.state().header_condensed {
                events.push(AppEvent::HeaderScrolled(offset));
            }
        });

        portfolio::lightbox_overlay(ctx, &self.controller, &mut events);

        // One user event at a time, fully applied before the next.
        for event in events {
            self.controller.dispatch(event);
        }

        if self.controller.quit_requested() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

pub fn launch_window(config: AppConfig) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PANDU Portfolio",
        options,
        Box::new(move |cc| {
            let hint = system_theme_hint(&cc.egui_ctx);
            let controller = ApplicationController::new(&config, hint)?;
            Ok(Box::new(AppShell::new(controller)))
        }),
    )
    .map_err(|error| AppError::Ui(format!("failed to start UI: {error}")))
}

/// The window system's light/dark hint, read once at startup.
fn system_theme_hint(ctx: &egui::Context) -> Option<ThemeMode> {
    ctx.input(|input| input.raw.system_theme)
        .map(|theme| match theme {
            egui::Theme::Dark => ThemeMode::Dark,
            egui::Theme::Light => ThemeMode::Light,
        })
}
