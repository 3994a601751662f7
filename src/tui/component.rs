use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable prompt widget.
///
/// Components follow the persistent state + transient wrapper pattern:
/// the state struct survives between frames, the component borrows it and
/// renders into a `Frame` within a given `Rect`.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so stateful widgets (e.g. list scroll offsets) can
    /// update their state during the render pass.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A prompt state machine driven by terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a `PromptEvent` and optionally return a high-level event.
    /// Returning `Some` finishes the prompt.
    fn handle_event(&mut self, event: &super::event::PromptEvent) -> Option<Self::Event>;
}
