use dioxus::prelude::*;

use quiz_core::model::Theme;

use crate::vm::TimerDisplayVm;

#[component]
pub(super) fn StartScreen(on_start: EventHandler<()>) -> Element {
    rsx! {
        div { class: "screen start-screen",
            h1 { class: "game-title",
                "SIX SECONDS"
                br {}
                span { class: "game-title-accent", "BIOLOGY" }
            }
            p { class: "tagline", "Can you give 3 answers in 6 seconds?" }
            button {
                class: "btn btn-primary btn-big",
                onclick: move |_| on_start.call(()),
                "Start the game"
            }
            p { class: "hint",
                "Tip: play with a classmate as referee. Fresh questions are generated every game!"
            }
        }
    }
}

#[component]
pub(super) fn ThemeScreen(on_pick: EventHandler<Theme>) -> Element {
    rsx! {
        div { class: "screen theme-screen",
            h2 { "Pick a theme" }
            div { class: "theme-grid",
                for theme in Theme::ALL {
                    button {
                        key: "{theme.key()}",
                        class: "theme-button",
                        onclick: move |_| on_pick.call(theme),
                        "{theme.label()}"
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn ReadyScreen(progress: String, on_ready: EventHandler<()>) -> Element {
    rsx! {
        div { class: "screen ready-screen",
            p { class: "progress-label", "{progress}" }
            p { class: "ready-hint", "The question appears after the click..." }
            button {
                class: "btn btn-primary btn-big",
                onclick: move |_| on_ready.call(()),
                "I'm ready!"
            }
            p { class: "hint", "The 6 second timer starts as soon as you press." }
        }
    }
}

#[component]
pub(super) fn PlayingScreen(question: String, display: TimerDisplayVm) -> Element {
    rsx! {
        div { class: "screen playing-screen",
            h3 { class: "question-text", "{question}" }
            div {
                class: "timer-ring {display.band_class}",
                style: "--progress: {display.progress}",
                span { class: "timer-label", "{display.label}" }
            }
            p { class: "shout-cue", "Shout your answers now!" }
        }
    }
}

#[component]
pub(super) fn ResultScreen(on_judge: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "screen result-screen",
            h3 { class: "result-heading", "Time's up!" }
            p { class: "result-question", "Did you manage to give 3 correct answers?" }
            div { class: "judge-row",
                button {
                    class: "btn btn-success",
                    onclick: move |_| on_judge.call(true),
                    "Yes!"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_judge.call(false),
                    "No..."
                }
            }
        }
    }
}

#[component]
pub(super) fn SummaryScreen(theme: String, score: String, on_again: EventHandler<()>) -> Element {
    rsx! {
        div { class: "screen summary-screen",
            h2 { "Well done!" }
            p { class: "summary-theme",
                "You finished the round on "
                span { class: "summary-theme-name", "{theme}" }
            }
            div { class: "score-card",
                div { class: "score-value", "{score}" }
                p { "Correct answers" }
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| on_again.call(()),
                "Play again"
            }
        }
    }
}

#[component]
pub(super) fn LoadingOverlay() -> Element {
    rsx! {
        div { class: "loading-overlay",
            div { class: "spinner" }
            p { class: "loading-label", "Generating questions..." }
        }
    }
}
