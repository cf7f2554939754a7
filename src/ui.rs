//! Window shell: toolbar, map surface, status bar, and the title prompt.
//!
//! All state transitions live in [`crate::input::state`]; this module only
//! translates widget events into method calls and renders the result.

use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::draw::{Color, color};
use crate::input::{DrawPhase, EditorState, Tool};
use crate::map::{LayerStyle, MapHost, PointerEvent, PointerEvents, ShapeLayerPlugin};
use walkers::Map;

/// Window title.
const APP_TITLE: &str = "geoscriber";

/// Opens the map window and runs it until the user closes it.
pub fn run(config: Config) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(config)))),
    )
    .map_err(|err| anyhow::anyhow!("map window failed: {err}"))
}

struct App {
    host: MapHost,
    editor: EditorState,
    style: LayerStyle,
    pointer_events: PointerEvents,
    show_status_bar: bool,
}

impl App {
    fn new(config: Config) -> Self {
        let mut host = MapHost::new(&config.map);
        host.initialize();

        let stroke = Color::from_name(&config.drawing.stroke_color).unwrap_or(color::BLUE);
        let preview = Color::from_name(&config.drawing.preview_color).unwrap_or(color::ORANGE);
        let style = LayerStyle::new(
            stroke,
            config.drawing.fill_opacity,
            config.drawing.stroke_width,
            preview,
        );

        Self {
            host,
            editor: EditorState::with_defaults(Tool::Polygon, config.ui.max_title_len),
            style,
            pointer_events: Arc::new(Mutex::new(Vec::new())),
            show_status_bar: config.ui.show_status_bar,
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let drawing_enabled = !self.editor.is_titling();
            for tool in [Tool::Polygon, Tool::Rect] {
                let selected = self.editor.active_tool == tool;
                let label = egui::SelectableLabel::new(selected, tool.label());
                if ui.add_enabled(drawing_enabled, label).clicked() {
                    self.editor.select_tool(tool);
                }
            }

            ui.separator();

            let finish = egui::Button::new("Finish");
            if ui.add_enabled(self.editor.can_close_polygon(), finish).clicked() {
                self.editor.close_polygon();
            }
            let cancel = egui::Button::new("Cancel");
            if ui.add_enabled(self.editor.is_sketching(), cancel).clicked() {
                self.editor.cancel_sketch();
            }
        });
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("{} shapes", self.editor.collection.len()));
            ui.separator();
            if let Some(zoom) = self.host.zoom() {
                ui.label(format!("Zoom: {zoom:.1}"));
                ui.separator();
            }
            ui.label(self.hint());
        });
    }

    fn hint(&self) -> &'static str {
        match &self.editor.phase {
            DrawPhase::Titling { .. } => "Type a title - Enter to confirm, Escape to discard",
            DrawPhase::Sketching {
                tool: Tool::Polygon,
                ..
            } => "Click to add vertices - double-click or Finish to close, Escape to cancel",
            DrawPhase::Sketching {
                tool: Tool::Rect, ..
            } => "Click the opposite corner - Escape to cancel",
            DrawPhase::Idle => match self.editor.active_tool {
                Tool::Polygon => "Click the map to start an outline",
                Tool::Rect => "Click the first corner of a rectangle",
            },
        }
    }

    fn map_panel(&mut self, ui: &mut egui::Ui) {
        self.host.ensure_tiles(ui.ctx());

        let plugin = ShapeLayerPlugin::new(
            self.editor.collection.iter().cloned().collect(),
            self.editor.pending_subject(),
            self.editor.sketch(),
            self.style,
            Arc::clone(&self.pointer_events),
        );

        let center = self.host.center_position();
        let Some((memory, tiles)) = self.host.widget_state() else {
            ui.centered_and_justified(|ui| ui.label("Map is not initialized"));
            return;
        };
        let tiles = tiles.map(|t| t as &mut dyn walkers::Tiles);
        ui.add(Map::new(tiles, memory, center).with_plugin(plugin));

        self.drain_pointer_events();
    }

    fn drain_pointer_events(&mut self) {
        let drained: Vec<PointerEvent> = match self.pointer_events.lock() {
            Ok(mut events) => events.drain(..).collect(),
            Err(_) => Vec::new(),
        };

        for event in drained {
            match event {
                PointerEvent::Click(at) => self.editor.on_map_click(at),
                PointerEvent::DoubleClick(at) => {
                    // The second click of the gesture may land as a stray
                    // vertex; close_polygon dedups it
                    self.editor.on_map_click(at);
                    self.editor.close_polygon();
                }
                PointerEvent::SecondaryClick => self.editor.cancel_sketch(),
            }
        }
    }

    fn title_prompt(&mut self, ctx: &egui::Context) {
        if !self.editor.is_titling() {
            return;
        }

        egui::Window::new("Add Title to Shape")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let mut submit = false;
                let mut cancel = false;

                if let Some(buffer) = self.editor.title_buffer_mut() {
                    let field = egui::TextEdit::singleline(buffer)
                        .hint_text("Enter title for this shape...")
                        .desired_width(280.0);
                    let response = ui.add(field);
                    if ui.ctx().memory(|m| m.focused().is_none()) {
                        response.request_focus();
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                }
                self.editor.enforce_title_cap();

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    cancel = true;
                }

                ui.horizontal(|ui| {
                    let confirm = egui::Button::new("Add Title");
                    if ui.add_enabled(self.editor.can_submit(), confirm).clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });

                if cancel {
                    self.editor.cancel_title();
                } else if submit {
                    self.editor.submit_title();
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.editor.is_sketching() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.editor.cancel_sketch();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));
        if self.show_status_bar {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.status_bar(ui));
        }
        egui::CentralPanel::default().show(ctx, |ui| self.map_panel(ui));

        self.title_prompt(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.host.teardown();
    }
}
