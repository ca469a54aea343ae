use eframe::{egui, CreationContext};
use waveform_scope::{egui_backend, RenderLoopDriver};

struct ViewerApp {
    driver: RenderLoopDriver,
}

impl ViewerApp {
    fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            driver: RenderLoopDriver::new(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                egui_backend::scope(ui, &mut self.driver);
            });
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Waveform scope",
        options,
        Box::new(|cc| Box::new(ViewerApp::new(cc))),
    )
}
