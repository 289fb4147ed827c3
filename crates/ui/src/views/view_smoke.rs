use super::test_harness::setup_view_harness;

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_start_screen() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("SIX SECONDS"), "missing title in {html}");
    assert!(
        html.contains("Start the game"),
        "missing start button in {html}"
    );
    // The reset control only appears once the game has left the start screen.
    assert!(!html.contains("Back to start"), "unexpected home button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_has_no_loading_overlay_at_start() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    let html = harness.render();
    assert!(
        !html.contains("Generating questions"),
        "unexpected loading overlay in {html}"
    );
}
