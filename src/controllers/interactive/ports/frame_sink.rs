use std::sync::mpsc::{self, Receiver, Sender};

use tracing::debug;

use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives every completed render, in completion order.
pub trait FrameSink: Send + Sync {
    fn submit(&self, event: RenderEvent);
}

/// Forwards events over an mpsc channel so the interactive side can poll
/// or block on them without sharing state with the worker.
#[derive(Debug)]
pub struct ChannelFrameSink {
    sender: Sender<RenderEvent>,
}

impl ChannelFrameSink {
    #[must_use]
    pub fn new() -> (Self, Receiver<RenderEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl FrameSink for ChannelFrameSink {
    fn submit(&self, event: RenderEvent) {
        let generation = event.generation();

        if self.sender.send(event).is_err() {
            debug!(generation, "frame receiver dropped; discarding event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::errors::render_error::RenderError;

    #[test]
    fn test_events_arrive_in_submission_order() {
        let (sink, receiver) = ChannelFrameSink::new();

        for generation in 1..=3 {
            sink.submit(RenderEvent::Error(RenderError {
                generation,
                message: String::from("stub"),
            }));
        }

        let generations: Vec<u64> = receiver.try_iter().map(|e| e.generation()).collect();
        assert_eq!(generations, vec![1, 2, 3]);
    }

    #[test]
    fn test_submit_after_receiver_dropped_does_not_panic() {
        let (sink, receiver) = ChannelFrameSink::new();
        drop(receiver);

        sink.submit(RenderEvent::Error(RenderError {
            generation: 1,
            message: String::from("stub"),
        }));
    }
}
