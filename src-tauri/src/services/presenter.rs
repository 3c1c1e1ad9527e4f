/// Presenter Service
/// Owns the display state and pushes every change to a single listener

use crate::models::{CommandResult, DisplayState, DisplayUpdatedPayload};
use parking_lot::Mutex;

type Listener = Box<dyn Fn(DisplayUpdatedPayload) + Send + Sync>;

/// Writes command results onto the display surface
pub struct ResultPresenter {
    state: Mutex<DisplayState>,
    on_change: Listener,
}

impl ResultPresenter {
    pub fn new(on_change: impl Fn(DisplayUpdatedPayload) + Send + Sync + 'static) -> Self {
        Self {
            state: Mutex::new(DisplayState::new()),
            on_change: Box::new(on_change),
        }
    }

    /// Replace whatever is shown with `result`
    pub fn present(&self, result: CommandResult) {
        let status = result.status();
        let payload = {
            let mut state = self.state.lock();

            state.read_only = false;
            state.text.clear();
            state.text.push_str(&result.output);
            state.read_only = true;
            state.status = Some(status);

            DisplayUpdatedPayload::from(&*state)
        };

        log::info!(
            "[Presenter] Status {} ({} bytes of output)",
            status.color(),
            payload.text.len()
        );

        // Listener runs outside the lock so it may call back into snapshot()
        (self.on_change)(payload);
    }

    pub fn snapshot(&self) -> DisplayUpdatedPayload {
        DisplayUpdatedPayload::from(&*self.state.lock())
    }

    #[cfg(test)]
    fn state(&self) -> DisplayState {
        self.state.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::Status;

    fn fixture() -> (ResultPresenter, Arc<Mutex<Vec<DisplayUpdatedPayload>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let presenter = ResultPresenter::new(move |payload| sink.lock().push(payload));
        (presenter, seen)
    }

    #[test]
    fn test_starts_showing_nothing() {
        let (presenter, seen) = fixture();
        assert_eq!(presenter.state(), DisplayState::new());
        assert_eq!(
            presenter.snapshot(),
            DisplayUpdatedPayload { text: String::new(), color: None }
        );
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_success_sets_green() {
        let (presenter, _) = fixture();
        presenter.present(CommandResult::new("hello\n", 0));

        let actual = presenter.state();
        let expected = DisplayState {
            text: "hello\n".to_string(),
            read_only: true,
            status: Some(Status::Success),
        };
        assert_eq!(actual, expected);
        assert_eq!(presenter.snapshot().color, Some("green"));
    }

    #[test]
    fn test_failure_sets_red_and_keeps_text_verbatim() {
        let (presenter, _) = fixture();
        presenter.present(CommandResult::new("oops\n\n  trailing  ", 2));

        let actual = presenter.snapshot();
        let expected = DisplayUpdatedPayload {
            text: "oops\n\n  trailing  ".to_string(),
            color: Some("red"),
        };
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_present_is_idempotent() {
        let (once, _) = fixture();
        once.present(CommandResult::new("same\n", 1));

        let (twice, _) = fixture();
        twice.present(CommandResult::new("same\n", 1));
        twice.present(CommandResult::new("same\n", 1));

        assert_eq!(twice.state(), once.state());
    }

    #[test]
    fn test_later_result_overwrites_earlier() {
        let (presenter, _) = fixture();
        presenter.present(CommandResult::new("first run output\n", 1));
        presenter.present(CommandResult::new("", 0));

        let actual = presenter.state();
        assert_eq!(actual.text, "");
        assert_eq!(actual.status, Some(Status::Success));
    }

    #[test]
    fn test_listener_gets_one_payload_per_present() {
        let (presenter, seen) = fixture();
        presenter.present(CommandResult::new("a", 0));
        presenter.present(CommandResult::new("b", 5));

        let actual = seen.lock().clone();
        let expected = vec![
            DisplayUpdatedPayload { text: "a".to_string(), color: Some("green") },
            DisplayUpdatedPayload { text: "b".to_string(), color: Some("red") },
        ];
        assert_eq!(actual, expected);
    }
}
