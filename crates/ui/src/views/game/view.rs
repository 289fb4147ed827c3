use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;

use quiz_core::ROUND_DURATION;
use quiz_core::model::{GamePhase, Theme};
use services::{RoundTimer, TimerHandle};

use crate::context::AppContext;
use crate::vm::{GameVm, map_timer_display};

use super::screens::{
    LoadingOverlay, PlayingScreen, ReadyScreen, ResultScreen, StartScreen, SummaryScreen,
    ThemeScreen,
};
use super::scripts::buzzer_script;

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let questions = ctx.questions();

    let mut vm = use_signal(|| Some(GameVm::new()));
    let mut remaining = use_signal(|| ROUND_DURATION);
    let mut timer_handle = use_signal(|| None::<TimerHandle>);

    let start = use_callback(move |()| {
        if let Some(game) = vm.write().as_mut() {
            game.start_game();
        }
    });

    // The session is taken out of the signal while the fetch resolves, so
    // no write borrow is held across the await.
    let pick_theme = use_callback(move |theme: Theme| {
        let questions = Arc::clone(&questions);
        spawn(async move {
            let taken = vm.write().take();
            let Some(mut game) = taken else { return };
            game.select_theme(questions.as_ref(), theme).await;
            vm.set(Some(game));
        });
    });

    let arm_round = use_callback(move |()| {
        let started = vm.write().as_mut().is_some_and(GameVm::begin_round);
        if !started {
            return;
        }
        let Ok(timer) = RoundTimer::new(ROUND_DURATION) else {
            return;
        };
        timer_handle.set(Some(timer.handle()));
        remaining.set(ROUND_DURATION);
        spawn(async move {
            timer
                .run(
                    move |left| remaining.set(left),
                    move || {
                        let expired = vm.write().as_mut().is_some_and(GameVm::expire_round);
                        if expired {
                            let _ = eval(buzzer_script());
                        }
                    },
                )
                .await;
        });
    });

    let judge = use_callback(move |success: bool| {
        if let Some(game) = vm.write().as_mut() {
            game.submit_result(success);
        }
    });

    let reset = use_callback(move |()| {
        if let Some(handle) = timer_handle.write().take() {
            handle.cancel();
        }
        remaining.set(ROUND_DURATION);
        if let Some(game) = vm.write().as_mut() {
            game.reset();
        }
    });

    let snapshot = vm.read();
    let Some(game) = snapshot.as_ref() else {
        // Parked while a theme fetch resolves.
        return rsx! {
            div { class: "board",
                LoadingOverlay {}
            }
        };
    };

    let phase = game.phase();
    let display = map_timer_display(remaining(), ROUND_DURATION);

    rsx! {
        div { class: "board",
            if phase != GamePhase::Start {
                button {
                    class: "home-button",
                    title: "Back to start",
                    onclick: move |_| reset.call(()),
                    "Home"
                }
            }
            match phase {
                GamePhase::Start => rsx! {
                    StartScreen { on_start: start }
                },
                GamePhase::ThemeSelection => rsx! {
                    ThemeScreen { on_pick: pick_theme }
                },
                GamePhase::Ready => rsx! {
                    ReadyScreen {
                        progress: game.progress_label(),
                        on_ready: arm_round,
                    }
                },
                GamePhase::Playing => rsx! {
                    PlayingScreen {
                        question: game.question_text().unwrap_or_default().to_string(),
                        display,
                    }
                },
                GamePhase::Result => rsx! {
                    ResultScreen { on_judge: judge }
                },
                GamePhase::Summary => rsx! {
                    SummaryScreen {
                        theme: game.theme_label().unwrap_or_default().to_string(),
                        score: game.score_label(),
                        on_again: reset,
                    }
                },
            }
            if game.is_loading() {
                LoadingOverlay {}
            }
        }
    }
}
