/// Handle for removing a subscriber from a [`Signal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubId(u64);

/// A value cell with synchronous observers.
///
/// The single-threaded rendition of a replay-last-value stream: `set`
/// stores the new value and notifies every subscriber in subscription
/// order before returning; `subscribe` immediately invokes the callback
/// with the current value, so late subscribers see the latest emission
/// and nothing older.
pub struct Signal<T> {
    value: T,
    subscribers: Vec<(SubId, Box<dyn FnMut(&T)>)>,
    next_id: u64,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Signal<T> {
        Signal {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Borrow the current value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify all subscribers, in subscription order
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, callback) in &mut self.subscribers {
            callback(&self.value);
        }
    }

    /// Register a subscriber. The callback fires immediately with the
    /// current value, then again on every subsequent `set`.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&T) + 'static) -> SubId {
        let id = SubId(self.next_id);
        self.next_id += 1;
        callback(&self.value);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber; no-op if already removed
    pub fn unsubscribe(&mut self, id: SubId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }
}

impl<T: Clone> Signal<T> {
    /// Clone out the current value
    pub fn get(&self) -> T {
        self.value.clone()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
