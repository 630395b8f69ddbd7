use tracing::info;

use super::TabStripEvent;

type PathCallback<'a, S> = Box<dyn FnMut(&mut S, &str) + 'a>;
type OrderCallback<'a, S> = Box<dyn FnMut(&mut S, Vec<String>) + 'a>;

/// Callbacks the tab strip reports to, with the caller's state `S` passed
/// to each one.
pub struct TabStripCallbacks<'a, S> {
    /// A tab body was clicked
    pub on_select_file: PathCallback<'a, S>,
    /// A close control was clicked
    pub on_close_file: PathCallback<'a, S>,
    /// A drag finished; receives the full new order of paths
    pub on_reorder_tabs: OrderCallback<'a, S>,
}

impl<'a, S> TabStripCallbacks<'a, S> {
    pub fn new(
        on_select_file: impl FnMut(&mut S, &str) + 'a,
        on_close_file: impl FnMut(&mut S, &str) + 'a,
        on_reorder_tabs: impl FnMut(&mut S, Vec<String>) + 'a,
    ) -> Self {
        Self {
            on_select_file: Box::new(on_select_file),
            on_close_file: Box::new(on_close_file),
            on_reorder_tabs: Box::new(on_reorder_tabs),
        }
    }

    /// Invoke exactly one callback for `event`
    pub fn dispatch(&mut self, state: &mut S, event: TabStripEvent) {
        info!("Tab strip {}", event.kind());
        match event {
            TabStripEvent::Select(path) => (self.on_select_file)(state, &path),
            TabStripEvent::Close(path) => (self.on_close_file)(state, &path),
            TabStripEvent::Reorder(order) => (self.on_reorder_tabs)(state, order),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<'a>() -> TabStripCallbacks<'a, Vec<String>> {
        TabStripCallbacks::new(
            |log: &mut Vec<String>, path: &str| log.push(format!("select {}", path)),
            |log: &mut Vec<String>, path: &str| log.push(format!("close {}", path)),
            |log: &mut Vec<String>, order: Vec<String>| {
                log.push(format!("reorder {}", order.join(",")))
            },
        )
    }

    #[test]
    fn test_dispatch_invokes_one_callback() {
        let mut callbacks = recorder();
        let mut log = Vec::new();

        callbacks.dispatch(&mut log, TabStripEvent::Select("/a/x.ts".into()));
        assert_eq!(log, vec!["select /a/x.ts"]);

        callbacks.dispatch(&mut log, TabStripEvent::Close("/a/y.ts".into()));
        assert_eq!(log, vec!["select /a/x.ts", "close /a/y.ts"]);

        callbacks.dispatch(
            &mut log,
            TabStripEvent::Reorder(vec!["/a/y.ts".into(), "/a/x.ts".into()]),
        );
        assert_eq!(log.len(), 3);
        assert_eq!(log[2], "reorder /a/y.ts,/a/x.ts");
    }

    #[test]
    fn test_callbacks_may_capture() {
        let mut selected = 0;
        {
            let mut callbacks: TabStripCallbacks<'_, ()> = TabStripCallbacks::new(
                |_, _| selected += 1,
                |_, _| {},
                |_, _| {},
            );
            callbacks.dispatch(&mut (), TabStripEvent::Select("a".into()));
            callbacks.dispatch(&mut (), TabStripEvent::Close("a".into()));
        }
        assert_eq!(selected, 1);
    }
}
