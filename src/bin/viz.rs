use std::time::{Duration, Instant};

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use tracing::warn;

use drone_sim::io::hud;
use drone_sim::sim::FixedStepClock;
use drone_sim::{compute, Settings, Simulator, SpecTable, ThrottleCommand};

fn main() -> eframe::Result {
    drone_sim::init_logging();
    let settings = Settings::load_or_default(Settings::FILENAME).unwrap_or_else(|e| {
        warn!("Ignoring settings file: {}", e);
        Settings::default()
    });

    let app = DroneViz::new(&settings);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native("Drone Dev Studio", options, Box::new(|_| Ok(Box::new(app))))
}

struct DroneViz {
    table: SpecTable,
    log: Vec<String>,
    sim: Simulator,
    clock: FixedStepClock,
    last_frame: Option<Instant>,
    history: Vec<[f64; 2]>,
}

impl DroneViz {
    fn new(settings: &Settings) -> Self {
        let hw = settings.hardware;
        let mut table = SpecTable::studio_default();
        table.set("Motor", format!("{}KV", hw.motor_kv));
        table.set("Battery", format!("{}S", hw.battery_cells));
        table.set("Weight", format!("{}g", hw.weight_grams));
        table.set("Prop Diameter", format!("{}in", hw.prop_diameter_inches));
        table.set("Prop Pitch", format!("{}in", hw.prop_pitch_inches));

        let sim = Simulator::new(settings.sim).unwrap_or_else(|e| {
            warn!("Ignoring sim settings: {}", e);
            Simulator::default()
        });
        let clock = FixedStepClock::new(sim.config().tick_interval());
        Self {
            table,
            log: vec!["System: Initialized Drone Dev Studio.".to_string()],
            sim,
            clock,
            last_frame: None,
            history: Vec::new(),
        }
    }

    fn sync(&mut self) {
        match self.table.to_config().and_then(|hw| compute(&hw)) {
            Ok(stats) => {
                self.log.push("Sync: flight stats".to_string());
                self.log.extend(hud::stats_lines(&stats));
            }
            Err(e) => self.log.push(format!("Error: {}", e)),
        }
    }

    fn run(&mut self) {
        match self.table.to_config().and_then(|hw| self.sim.start(hw)) {
            Ok(stats) => {
                self.log.push(format!(
                    "Run: hover throttle {:.1}%, TWR {:.2}. Up/Down arrows adjust throttle.",
                    stats.hover_throttle_pct, stats.twr
                ));
                self.clock.reset();
                self.last_frame = None;
                self.history.clear();
            }
            Err(e) => self.log.push(format!("Error: {}", e)),
        }
    }

    fn advance(&mut self, ctx: &egui::Context) {
        if !self.sim.is_running() {
            return;
        }

        let (up, down) = ctx.input(|i| {
            (i.key_pressed(egui::Key::ArrowUp), i.key_pressed(egui::Key::ArrowDown))
        });
        if up {
            self.sim.press(ThrottleCommand::Increase);
        }
        if down {
            self.sim.press(ThrottleCommand::Decrease);
        }

        let now = Instant::now();
        let elapsed = self.last_frame.map_or(Duration::ZERO, |t| now - t);
        self.last_frame = Some(now);

        for _ in 0..self.clock.advance(elapsed) {
            if let Some(tick) = self.sim.step() {
                self.history.push([tick.time, tick.altitude_m]);
            }
        }
        ctx.request_repaint_after(self.sim.config().tick_interval());
    }
}

impl eframe::App for DroneViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance(ctx);

        egui::SidePanel::left("hardware").min_width(260.0).show(ctx, |ui| {
            ui.heading("Hardware Specs");
            let mut edits = Vec::new();
            egui::Grid::new("spec_table").striped(true).show(ui, |ui| {
                ui.strong("Parameter");
                ui.strong("Value");
                ui.end_row();
                for (name, value) in self.table.rows() {
                    ui.label(name);
                    let mut text = value.clone();
                    if ui.text_edit_singleline(&mut text).changed() {
                        edits.push((name.clone(), text));
                    }
                    ui.end_row();
                }
            });
            for (name, value) in edits {
                let line = self.table.set(&name, value);
                self.log.push(line);
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Sync").clicked() {
                    self.sync();
                }
                if ui.button("Run").clicked() {
                    self.run();
                }
                if ui.button("Stop").clicked() && self.sim.stop().is_some() {
                    self.log.push("Simulation stopped.".to_string());
                }
                if ui.button("Reset").clicked() {
                    self.sim.reset();
                    self.history.clear();
                }
            });
        });

        egui::TopBottomPanel::bottom("telemetry").min_height(140.0).show(ctx, |ui| {
            ui.label("Telemetry & Output");
            egui::ScrollArea::vertical().stick_to_bottom(true).show(ui, |ui| {
                for line in &self.log {
                    ui.monospace(line);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Side view: the drone moves along Z only
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(half_w, available.y),
                    egui::Sense::hover(),
                );
                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(26, 26, 26));

                let ground_y = rect.bottom() - 20.0;
                painter.line_segment(
                    [egui::pos2(rect.left(), ground_y), egui::pos2(rect.right(), ground_y)],
                    egui::Stroke::new(1.0, egui::Color32::GRAY),
                );

                let (throttle, altitude) = self
                    .sim
                    .state()
                    .map_or((0.0, 0.0), |s| (s.throttle_pct, s.position().z));
                let ceiling = self.history.iter().map(|p| p[1]).fold(10.0_f64, f64::max);
                let px_per_m = (ground_y - rect.top() - 40.0) as f64 / ceiling;
                let center = egui::pos2(rect.center().x, ground_y - 15.0 - (altitude * px_per_m) as f32);
                painter.rect_filled(
                    egui::Rect::from_center_size(center, egui::vec2(30.0, 30.0)),
                    2.0,
                    egui::Color32::from_rgb(26, 128, 230),
                );

                painter.text(
                    rect.right_top() + egui::vec2(-20.0, 20.0),
                    egui::Align2::RIGHT_TOP,
                    hud::hud_text(throttle, altitude),
                    egui::FontId::monospace(18.0),
                    egui::Color32::from_rgb(0, 255, 0),
                );

                ui.vertical(|ui| {
                    ui.label("Altitude (m)");
                    let points: PlotPoints = self.history.iter().copied().collect();
                    Plot::new("altitude")
                        .width(half_w)
                        .height(available.y - 24.0)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Altitude", points));
                        });
                });
            });
        });
    }
}
