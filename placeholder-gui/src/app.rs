use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, Rounding, Stroke};
use placeholder_core::{
    Action, AppConfig, Cell, Debouncer, Fetcher, FetchStatus, ResourceKind, Session, TableView,
    Toasts, ViewState,
};
use tokio::runtime::Runtime;
use tracing::warn;

const ERROR_COLOR: Color32 = Color32::from_rgb(229, 57, 53);
const TOAST_REFRESH: Duration = Duration::from_millis(250);

pub struct AppInit {
    pub runtime: Arc<Runtime>,
    pub fetcher: Fetcher,
    pub config: AppConfig,
}

pub struct PlaceholderApp {
    // Fetch tasks run here; dropping it would cancel them.
    _runtime: Arc<Runtime>,
    session: Session<Toasts>,
    limit_input: u32,
    min_input: usize,
    max_input: usize,
    limit_debounce: Debouncer<u32>,
    min_debounce: Debouncer<usize>,
    max_debounce: Debouncer<usize>,
}

impl PlaceholderApp {
    pub fn new(init: AppInit, ctx: &egui::Context) -> Self {
        let params = init.config.defaults;
        let window = init.config.ui.debounce_window();
        let repaint = ctx.clone();
        let session = Session::new(
            ViewState::new(params),
            init.fetcher,
            Toasts::new(init.config.ui.notification_duration()),
            init.runtime.handle().clone(),
        )
        .with_wake(move || repaint.request_repaint());

        setup_dark_theme(ctx);

        Self {
            _runtime: init.runtime,
            session,
            limit_input: params.limit.max(1),
            min_input: params.min_chars,
            max_input: params.max_chars,
            limit_debounce: Debouncer::new(window),
            min_debounce: Debouncer::new(window),
            max_debounce: Debouncer::new(window),
        }
    }

    /// Commits input values whose quiet window has passed.
    fn flush_inputs(&mut self, ctx: &egui::Context, now: Instant) {
        if let Some(limit) = self.limit_debounce.poll(now) {
            self.session.dispatch(Action::SetLimit(limit));
        }
        if let Some(min_chars) = self.min_debounce.poll(now) {
            self.session.dispatch(Action::SetMinChars(min_chars));
        }
        if let Some(max_chars) = self.max_debounce.poll(now) {
            self.session.dispatch(Action::SetMaxChars(max_chars));
        }

        let next = [
            self.limit_debounce.remaining(now),
            self.min_debounce.remaining(now),
            self.max_debounce.remaining(now),
        ]
        .into_iter()
        .flatten()
        .min();
        if let Some(delay) = next {
            ctx.request_repaint_after(delay);
        }
    }

    fn draw_header(&mut self, ctx: &egui::Context, now: Instant) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading(egui::RichText::new("Welcome to jsonplaceholder project").size(20.0));
            ui.label("This project utilizes the jsonplaceholder API to display posts, comments, albums and photos.");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Post Limit:");
                let limit = ui.add(egui::DragValue::new(&mut self.limit_input).clamp_range(1..=5000));
                if limit.changed() {
                    self.limit_debounce.push(self.limit_input, now);
                }

                ui.separator();
                ui.label("Min Char Count:");
                if ui.add(egui::DragValue::new(&mut self.min_input)).changed() {
                    self.min_debounce.push(self.min_input, now);
                }

                ui.separator();
                ui.label("Max Char Count:");
                if ui.add(egui::DragValue::new(&mut self.max_input)).changed() {
                    self.max_debounce.push(self.max_input, now);
                }
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let active = self.session.state().active();
                for kind in ResourceKind::ALL {
                    let caption = format!("Display {}", kind);
                    if ui.selectable_label(active == Some(kind), caption).clicked() {
                        // A click uses the limit as typed, even mid-debounce
                        let action = match self.limit_debounce.flush() {
                            Some(limit) => Action::SelectViewWithLimit { kind, limit },
                            None => Action::SelectView(kind),
                        };
                        self.session.dispatch(action);
                    }
                }
                if active.is_some() && ui.small_button("Hide").clicked() {
                    self.session.dispatch(Action::ClearView);
                }
            });
            ui.add_space(6.0);
        });
    }

    fn draw_content(&mut self, ctx: &egui::Context) {
        let table = self.session.table();
        egui::CentralPanel::default().show(ctx, |ui| match table {
            Some(table) => draw_table(ui, &table),
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(50.0);
                    ui.label(egui::RichText::new("Pick a collection to display").weak().size(16.0));
                });
            }
        });
    }

    fn draw_toasts(&mut self, ctx: &egui::Context) {
        let toasts = self.session.sink_mut();
        if toasts.is_empty() {
            return;
        }
        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (index, toast) in toasts.iter().enumerate() {
                    egui::Frame::popup(ui.style())
                        .fill(ERROR_COLOR)
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(toast.title).strong().color(Color32::WHITE));
                                if ui.small_button("x").clicked() {
                                    dismissed = Some(index);
                                }
                            });
                            ui.label(egui::RichText::new(&toast.message).color(Color32::WHITE));
                        });
                    ui.add_space(6.0);
                }
            });
        if let Some(index) = dismissed {
            toasts.dismiss(index);
        }
        ctx.request_repaint_after(TOAST_REFRESH);
    }
}

fn draw_table(ui: &mut egui::Ui, table: &TableView) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(table.label).strong().size(16.0));
        match &table.status {
            FetchStatus::Loading => {
                ui.spinner();
            }
            FetchStatus::Failed(message) => {
                ui.label(egui::RichText::new(message).color(ERROR_COLOR).size(13.0));
            }
            FetchStatus::Idle | FetchStatus::Loaded => {}
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format!("{} rows", table.rows.len())).weak().size(13.0));
        });
    });
    ui.separator();

    egui::ScrollArea::both()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new(table.kind.path())
                .striped(true)
                .num_columns(table.headers.len())
                .spacing(egui::vec2(16.0, 6.0))
                .show(ui, |ui| {
                    for header in table.headers {
                        ui.label(egui::RichText::new(*header).strong());
                    }
                    ui.end_row();

                    for row in &table.rows {
                        for cell in row {
                            draw_cell(ui, cell);
                        }
                        ui.end_row();
                    }
                });
        });
}

fn draw_cell(ui: &mut egui::Ui, cell: &Cell) {
    match cell {
        Cell::Text(text) => {
            ui.add(egui::Label::new(text.as_str()).wrap(true));
        }
        Cell::Image { url, alt } => {
            if ui.link(alt.as_str()).on_hover_text(url.as_str()).clicked() {
                if let Err(e) = webbrowser::open(url) {
                    warn!(error = %e, url = %url, "failed to open thumbnail");
                }
            }
        }
    }
}

fn setup_dark_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let panel_color = Color32::from_rgb(37, 37, 38);
    let border_color = Color32::from_rgb(62, 62, 66);
    let text_color = Color32::from_rgb(204, 204, 204);
    let accent_color = Color32::from_rgb(0, 122, 204);

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = panel_color;
    style.visuals.window_fill = Color32::from_rgb(30, 30, 30);
    style.visuals.faint_bg_color = Color32::from_rgb(45, 45, 45);
    style.visuals.override_text_color = Some(text_color);

    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(50, 50, 50);
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, border_color);
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent_color);
    style.visuals.widgets.active.bg_fill = accent_color;
    style.visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(0, 122, 204, 60);
    style.visuals.selection.stroke = Stroke::new(1.0, accent_color);

    for widget in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(3.0);
    }

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    ctx.set_style(style);
}

impl eframe::App for PlaceholderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.session.drain();
        self.flush_inputs(ctx, now);
        self.session.sink_mut().prune(now);

        self.draw_header(ctx, now);
        self.draw_content(ctx);
        self.draw_toasts(ctx);
    }
}
