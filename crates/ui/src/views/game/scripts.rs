/// Buzzer tone played on round expiry.
///
/// One `AudioContext` is lazily created and cached on `window` for the whole
/// session. The body is wrapped in try/catch; playback failures stay in the
/// console and never reach the game.
pub(super) fn buzzer_script() -> &'static str {
    r#"(function() {
        try {
            const ctx = window.__quizAudioCtx
                || (window.__quizAudioCtx = new (window.AudioContext || window.webkitAudioContext)());
            const oscillator = ctx.createOscillator();
            const gain = ctx.createGain();

            oscillator.type = "square";
            oscillator.frequency.setValueAtTime(150, ctx.currentTime);
            oscillator.frequency.exponentialRampToValueAtTime(100, ctx.currentTime + 0.5);

            gain.gain.setValueAtTime(0.1, ctx.currentTime);
            gain.gain.exponentialRampToValueAtTime(0.01, ctx.currentTime + 0.5);

            oscillator.connect(gain);
            gain.connect(ctx.destination);

            oscillator.start();
            oscillator.stop(ctx.currentTime + 0.5);
        } catch (error) {
            console.error("buzzer playback failed", error);
        }
    })();"#
}
