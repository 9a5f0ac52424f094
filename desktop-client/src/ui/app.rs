use std::sync::Arc;
use std::time::Instant;

use common::{
    ControlCommand, GameController, GamePhase, GameState, InputEvent, InputSource, SettingsStore,
};
use egui::{Align, Layout};

use crate::feedback::BoardFlash;
use crate::input::{ButtonInput, KeyboardInput, PointerInput};

use super::board::render_board;
use super::overlay::render_overlay;

pub struct SnakeApp {
    controller: GameController,
    flash: Arc<BoardFlash>,
    keyboard: KeyboardInput,
    pointer: PointerInput,
    buttons: ButtonInput,
}

impl SnakeApp {
    pub fn new(controller: GameController, flash: Arc<BoardFlash>) -> Self {
        Self {
            controller,
            flash,
            keyboard: KeyboardInput::new(),
            pointer: PointerInput::new(),
            buttons: ButtonInput::new(),
        }
    }

    fn render_header(
        &mut self,
        ui: &mut egui::Ui,
        state: &GameState,
        settings: &dyn SettingsStore,
    ) {
        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", state.score));
            ui.add_space(16.0);
            ui.label(format!("High score: {}", settings.high_score()));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let mut haptics = settings.haptics_enabled();
                if ui.checkbox(&mut haptics, "Haptics").changed() {
                    settings.set_haptics_enabled(haptics);
                }
                let mut sound = settings.sound_enabled();
                if ui.checkbox(&mut sound, "Sound").changed() {
                    settings.set_sound_enabled(sound);
                }

                if ui.button(control_label(state.phase())).clicked() {
                    self.buttons.press(InputEvent::Command(ControlCommand::Toggle));
                }
            });
        });
    }
}

fn control_label(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::NotStarted => "Start",
        GamePhase::Running => "Pause",
        GamePhase::Paused => "Resume",
        GamePhase::GameOver => "Restart",
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let controller = self.controller.clone();
        let mut dispatch = |event: InputEvent| controller.apply(event);

        self.keyboard.poll(ctx, &mut dispatch);

        let state = self.controller.snapshot();
        let settings = self.controller.settings();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_header(ui, &state, settings.as_ref());
            ui.add_space(6.0);
        });

        let flash = self.flash.intensity(Instant::now());
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let response = render_board(ui, &state, flash);
                self.pointer.poll(&response, &mut dispatch);
                render_overlay(ui, response.rect, &state, &mut self.buttons);
            });
        });

        self.buttons.poll(&(), &mut dispatch);

        if flash.is_some() {
            ctx.request_repaint();
        }
    }
}
