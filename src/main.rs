// Chess Titan: click-to-move chessboard on egui
// Rules are delegated to shakmaty; the board is drawn as an SVG image.

// Single threaded: presses are handled and the board re-rendered inside `update`.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(rustdoc::missing_crate_level_docs)]

use eframe::egui;

mod controller;
mod engine;
mod geometry;
mod render;

use controller::{Button, InputController, Press, PressOutcome};
use engine::{Game, Rules};
use geometry::Geometry;
use render::RenderOptions;

// ────────────────────────────────────────────────────────────────────────────────
// Window and board layout
// ────────────────────────────────────────────────────────────────────────────────

const WINDOW_TITLE: &str = "Chess Titan";
const WINDOW_SIZE: [f32; 2] = [800.0, 800.0];
const BOARD_ORIGIN: [f32; 2] = [50.0, 50.0];
const BOARD_SIZE: f32 = 600.0;
const SHOW_COORDINATES: bool = true;

fn press_from_event(event: &egui::Event) -> Option<Press> {
    match event {
        egui::Event::PointerButton {
            pos,
            button,
            pressed: true,
            ..
        } => {
            let button = match button {
                egui::PointerButton::Primary => Button::Primary,
                egui::PointerButton::Secondary => Button::Secondary,
                egui::PointerButton::Middle => Button::Middle,
                _ => Button::Other,
            };
            Some(Press::new(pos.x, pos.y, button))
        }
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────────
// App
// ────────────────────────────────────────────────────────────────────────────────

struct ChessTitan {
    game: Game,
    controller: InputController,
    coordinates: bool,

    // URI of the board image egui currently holds in its cache
    shown_uri: Option<String>,
}

impl Default for ChessTitan {
    fn default() -> Self {
        Self {
            game: Game::new(),
            controller: InputController::new(Geometry::new(
                BOARD_ORIGIN[0],
                BOARD_ORIGIN[1],
                BOARD_SIZE,
                SHOW_COORDINATES,
            )),
            coordinates: SHOW_COORDINATES,
            shown_uri: None,
        }
    }
}

/// Lines written to stdout for a handled press: the position after every move
/// attempt, the label notice, and a game-over notice.
fn console_lines(outcome: &PressOutcome, game: &Game) -> Vec<String> {
    match outcome {
        PressOutcome::PassThrough | PressOutcome::Ignored | PressOutcome::Selected(_) => {
            Vec::new()
        }
        PressOutcome::LabelMargin => vec!["coordinates clicked".to_owned()],
        PressOutcome::Attempted { result, .. } => {
            let mut lines = vec![game.fen()];
            if result.is_ok() {
                if game.is_checkmate() {
                    lines.push("Checkmate, game terminated!".to_owned());
                } else if game.is_stalemate() {
                    lines.push("Stalemate, game terminated!".to_owned());
                }
            }
            lines
        }
    }
}

impl ChessTitan {
    fn handle_press(&mut self, ctx: &egui::Context, press: &Press) {
        let outcome = self.controller.handle_press(&mut self.game, press);
        match &outcome {
            PressOutcome::PassThrough => {
                log::trace!("press at ({}, {}) left to egui", press.x, press.y);
            }
            PressOutcome::Attempted { uci, result: Ok(()) } => log::info!("move {uci} accepted"),
            _ => {}
        }
        for line in console_lines(&outcome, &self.game) {
            println!("{line}");
        }
        if outcome.needs_repaint() {
            ctx.request_repaint();
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            last_move: self.game.last_move(),
            selected: self.controller.pending().map(|s| s.square),
            check: self.game.checked_king(),
            ..RenderOptions::new(BOARD_SIZE, self.coordinates)
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init(); // filter with RUST_LOG
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| {
            // Enable image loading (svg) for egui
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::<ChessTitan>::default())
        }),
    )
}

impl eframe::App for ChessTitan {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Presses first, so the image below already shows their effect.
        let presses: Vec<Press> =
            ctx.input(|i| i.events.iter().filter_map(press_from_event).collect());
        for press in &presses {
            self.handle_press(ctx, press);
        }

        let svg = render::render(self.game.board(), &self.render_options());
        let uri = format!("bytes://board-{:016x}.svg", egui::util::hash(&svg));
        if self.shown_uri.as_deref() != Some(uri.as_str()) {
            if let Some(old) = self.shown_uri.replace(uri.clone()) {
                ctx.forget_image(&old);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let geometry = self.controller.geometry();
            let rect = egui::Rect::from_min_size(
                egui::pos2(geometry.origin_x, geometry.origin_y),
                egui::vec2(geometry.size, geometry.size),
            );
            ui.put(
                rect,
                egui::Image::from_bytes(uri, svg).fit_to_exact_size(rect.size()),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_pointer_presses_only() {
        let press = egui::Event::PointerButton {
            pos: egui::pos2(120.0, 340.0),
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(
            press_from_event(&press),
            Some(Press::new(120.0, 340.0, Button::Primary))
        );

        let release = egui::Event::PointerButton {
            pos: egui::pos2(120.0, 340.0),
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(press_from_event(&release), None);

        let right = egui::Event::PointerButton {
            pos: egui::pos2(1.0, 2.0),
            button: egui::PointerButton::Extra1,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(
            press_from_event(&right),
            Some(Press::new(1.0, 2.0, Button::Other))
        );
        assert_eq!(press_from_event(&egui::Event::PointerGone), None);
    }

    fn press_on(app: &mut ChessTitan, square: shakmaty::Square) -> PressOutcome {
        let (x, y) = app.controller.geometry().square_center(square);
        app.controller
            .handle_press(&mut app.game, &Press::new(x, y, Button::Primary))
    }

    #[test]
    fn console_prints_position_after_accepted_move() {
        let mut app = ChessTitan::default();
        let outcome = press_on(&mut app, shakmaty::Square::E2);
        assert!(console_lines(&outcome, &app.game).is_empty());

        let outcome = press_on(&mut app, shakmaty::Square::E4);
        assert_eq!(
            console_lines(&outcome, &app.game),
            vec!["rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1".to_owned()]
        );
    }

    #[test]
    fn console_prints_unchanged_position_after_rejected_move() {
        let mut app = ChessTitan::default();
        press_on(&mut app, shakmaty::Square::E4);
        let outcome = press_on(&mut app, shakmaty::Square::E5);
        assert!(matches!(
            outcome,
            PressOutcome::Attempted { result: Err(_), .. }
        ));
        assert_eq!(
            console_lines(&outcome, &app.game),
            vec!["rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_owned()]
        );
    }

    #[test]
    fn console_reports_labels_and_mate_only() {
        let mut app = ChessTitan::default();
        assert_eq!(
            console_lines(&PressOutcome::LabelMargin, &app.game),
            vec!["coordinates clicked".to_owned()]
        );
        assert!(console_lines(&PressOutcome::PassThrough, &app.game).is_empty());
        assert!(console_lines(&PressOutcome::Ignored, &app.game).is_empty());

        for uci in ["f2f3", "e7e5", "g2g4"] {
            app.game.play_uci(uci).unwrap();
        }
        let mut outcome = PressOutcome::Ignored;
        for square in [shakmaty::Square::D8, shakmaty::Square::H4] {
            outcome = press_on(&mut app, square);
        }
        assert_eq!(
            console_lines(&outcome, &app.game),
            vec![
                "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3".to_owned(),
                "Checkmate, game terminated!".to_owned(),
            ]
        );
    }

    #[test]
    fn default_app_matches_window_layout() {
        let app = ChessTitan::default();
        let geometry = app.controller.geometry();
        assert_eq!((geometry.origin_x, geometry.origin_y), (50.0, 50.0));
        assert_eq!(geometry.size, 600.0);
        assert_eq!(geometry.margin, 30.0);

        let options = app.render_options();
        assert_eq!(options.size, BOARD_SIZE);
        assert!(options.coordinates);
        assert_eq!(options.selected, None);
        assert_eq!(options.last_move, None);
        assert_eq!(options.check, None);
    }

    #[test]
    fn selection_and_last_move_reach_the_renderer() {
        let mut app = ChessTitan::default();
        let ctx = egui::Context::default();

        let (x, y) = app.controller.geometry().square_center(shakmaty::Square::G1);
        app.handle_press(&ctx, &Press::new(x, y, Button::Primary));
        assert_eq!(app.render_options().selected, Some(shakmaty::Square::G1));

        let (x, y) = app.controller.geometry().square_center(shakmaty::Square::F3);
        app.handle_press(&ctx, &Press::new(x, y, Button::Primary));
        let options = app.render_options();
        assert_eq!(options.selected, None);
        assert_eq!(
            options.last_move,
            Some((shakmaty::Square::G1, shakmaty::Square::F3))
        );
        assert_eq!(
            app.game.fen(),
            "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 1 1"
        );
    }
}
