// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt;

use crate::error::BuilderError;

pub type Listener = Box<dyn FnMut(&BuilderError)>;

/// Handle returned by `add_listener`, used to remove the listener later.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ListenerId(usize);

/// Holds the listeners interested in builder failures.
#[derive(Default)]
pub struct Notifier {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: usize,
}

impl Notifier {
    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false if no listener with the given id exists.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let count = self.listeners.len();
        self.listeners.retain(|(item_id, _)| *item_id != id);
        self.listeners.len() != count
    }

    /// Calls every listener in registration order.
    pub fn publish(&mut self, error: &BuilderError) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(error);
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
