//! Incremental reveal of already-known text
//!
//! The backend returns complete answers in one response; the reveal slot
//! replays them one character at a time so the UI reads like a live stream.
//! Each on-screen text area (the main answer, the quiz explanation) owns one
//! `RevealSlot`. Starting a slot cancels any running timer and bumps a
//! generation counter; events from an older generation are dropped on
//! `apply`, so a restarted slot can never show characters from the previous
//! text and a cancelled slot never changes again.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Per-character cadence for main answers
pub const ANSWER_INTERVAL_MS: u64 = 10;

/// Per-character cadence for quiz explanations
pub const FEEDBACK_INTERVAL_MS: u64 = 20;

/// Which display slot an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    /// The main answer panel
    Answer,
    /// The explanation under an answered quiz question
    Feedback,
}

/// One step of a running reveal
#[derive(Debug, Clone)]
pub enum RevealStep {
    /// The text revealed so far (grows by one character per tick)
    Advance(String),
    /// The full text is on screen; emitted exactly once
    Complete,
}

/// Event emitted by a reveal timer task
#[derive(Debug, Clone)]
pub struct RevealEvent {
    pub target: RevealTarget,
    pub generation: u64,
    pub step: RevealStep,
}

/// A display slot undergoing (or done with) incremental disclosure
#[derive(Debug)]
pub struct RevealSlot {
    target: RevealTarget,
    generation: u64,
    revealed: String,
    complete: bool,
    cancel: Option<CancellationToken>,
}

impl RevealSlot {
    pub fn new(target: RevealTarget) -> Self {
        Self { target, generation: 0, revealed: String::new(), complete: false, cancel: None }
    }

    /// Begin revealing `text` from scratch, cancelling any reveal in
    /// progress. A zero interval shows the full text immediately without
    /// spawning a timer.
    pub fn start(&mut self, text: &str, interval_ms: u64, tx: &mpsc::UnboundedSender<RevealEvent>) {
        self.stop_timer();
        self.generation += 1;
        self.revealed.clear();
        self.complete = false;

        if interval_ms == 0 {
            self.revealed = text.to_string();
            self.complete = true;
            return;
        }

        let token = CancellationToken::new();
        self.cancel = Some(token.clone());
        tokio::spawn(run_timer(
            text.to_string(),
            interval_ms,
            self.target,
            self.generation,
            tx.clone(),
            token,
        ));
    }

    /// Stop the reveal where it is. Queued events become stale; safe to call
    /// repeatedly or after natural completion.
    pub fn cancel(&mut self) {
        self.stop_timer();
        self.generation += 1;
    }

    /// Cancel and blank the slot (used when its owning view is torn down)
    pub fn clear(&mut self) {
        self.cancel();
        self.revealed.clear();
        self.complete = false;
    }

    /// Apply a timer event. Returns false (and changes nothing) for events
    /// addressed to another slot or an older generation.
    pub fn apply(&mut self, event: &RevealEvent) -> bool {
        if event.target != self.target || event.generation != self.generation {
            return false;
        }
        match &event.step {
            RevealStep::Advance(prefix) => self.revealed = prefix.clone(),
            RevealStep::Complete => {
                self.complete = true;
                self.cancel = None;
            }
        }
        true
    }

    /// Text revealed so far
    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    /// Whether the full text is on screen
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    fn stop_timer(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }
}

/// Scale a base cadence by the configured animation speed (0 = instant)
pub fn scaled_interval(base_ms: u64, speed: f32) -> u64 {
    (base_ms as f32 * speed.max(0.0)).round() as u64
}

/// Timer task: one tick per character, then a final completion tick
async fn run_timer(
    text: String,
    interval_ms: u64,
    target: RevealTarget,
    generation: u64,
    tx: mpsc::UnboundedSender<RevealEvent>,
    token: CancellationToken,
) {
    let period = Duration::from_millis(interval_ms);
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);

    // Byte offset one past each successive character
    let mut ends: Vec<usize> = text.char_indices().map(|(i, _)| i).skip(1).collect();
    if !text.is_empty() {
        ends.push(text.len());
    }

    let mut revealed = 0;
    loop {
        tokio::select! {
            _ = token.cancelled() => return,
            _ = ticker.tick() => {}
        }

        if revealed < ends.len() {
            let prefix = text[..ends[revealed]].to_string();
            revealed += 1;
            let event = RevealEvent { target, generation, step: RevealStep::Advance(prefix) };
            if tx.send(event).is_err() {
                return;
            }
        } else {
            let _ = tx.send(RevealEvent { target, generation, step: RevealStep::Complete });
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Receive events until the slot completes, applying each one
    async fn drain_until_complete(
        slot: &mut RevealSlot,
        rx: &mut mpsc::UnboundedReceiver<RevealEvent>,
    ) -> Vec<String> {
        let mut prefixes = Vec::new();
        while !slot.is_complete() {
            let event = rx.recv().await.expect("timer task ended early");
            if slot.apply(&event) {
                if let RevealStep::Advance(_) = event.step {
                    prefixes.push(slot.revealed().to_string());
                }
            }
        }
        prefixes
    }

    #[tokio::test(start_paused = true)]
    async fn reveals_one_char_per_tick_then_completes_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = RevealSlot::new(RevealTarget::Answer);
        slot.start("héllo", 10, &tx);

        let prefixes = drain_until_complete(&mut slot, &mut rx).await;

        assert_eq!(prefixes, vec!["h", "hé", "hél", "héll", "héllo"]);
        assert_eq!(slot.revealed(), "héllo");
        assert!(slot.is_complete());

        // Task has exited; nothing further arrives
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_text_completes_without_advancing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = RevealSlot::new(RevealTarget::Answer);
        slot.start("", 10, &tx);

        let prefixes = drain_until_complete(&mut slot, &mut rx).await;

        assert!(prefixes.is_empty());
        assert_eq!(slot.revealed(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn restart_never_shows_previous_text() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = RevealSlot::new(RevealTarget::Answer);
        slot.start("aaaa", 10, &tx);

        // Let the first reveal make some progress
        for _ in 0..2 {
            let event = rx.recv().await.unwrap();
            slot.apply(&event);
        }
        assert_eq!(slot.revealed(), "aa");

        slot.start("bb", 10, &tx);
        assert_eq!(slot.revealed(), "");

        let prefixes = drain_until_complete(&mut slot, &mut rx).await;
        assert!(prefixes.iter().all(|p| !p.contains('a')), "stale text leaked: {prefixes:?}");
        assert_eq!(slot.revealed(), "bb");
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_slot_never_changes_again() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = RevealSlot::new(RevealTarget::Feedback);
        slot.start("frozen", 10, &tx);

        let event = rx.recv().await.unwrap();
        slot.apply(&event);
        let before = slot.revealed().to_string();

        slot.cancel();
        slot.cancel(); // repeated cancel is a no-op

        // Anything still queued (or racing the cancellation) is stale now
        tokio::task::yield_now().await;
        while let Ok(event) = rx.try_recv() {
            assert!(!slot.apply(&event));
        }
        assert_eq!(slot.revealed(), before);
        assert!(!slot.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_reveals_instantly() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = RevealSlot::new(RevealTarget::Answer);
        slot.start("all at once", 0, &tx);

        assert_eq!(slot.revealed(), "all at once");
        assert!(slot.is_complete());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn events_for_other_slot_are_ignored() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut answer = RevealSlot::new(RevealTarget::Answer);
        let mut feedback = RevealSlot::new(RevealTarget::Feedback);
        answer.start("hi", 10, &tx);

        let event = rx.recv().await.unwrap();
        assert!(!feedback.apply(&event));
        assert!(answer.apply(&event));
        assert_eq!(feedback.revealed(), "");
    }

    #[test]
    fn interval_scales_with_animation_speed() {
        assert_eq!(scaled_interval(10, 1.0), 10);
        assert_eq!(scaled_interval(10, 2.0), 20);
        assert_eq!(scaled_interval(10, 0.0), 0);
        assert_eq!(scaled_interval(10, -1.0), 0);
    }
}
