//! Instrumented value type shared by the lifecycle tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Clone and drop counts observed by every `Tracked` sharing them.
#[derive(Default, Debug)]
pub struct Counters {
    clones: Cell<usize>,
    drops: Cell<usize>,
}

impl Counters {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    counters: Rc<Counters>,
}

impl Tracked {
    pub fn new(id: u32, counters: &Rc<Counters>) -> Self {
        Self { id, counters: Rc::clone(counters) }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counters.clones.set(self.counters.clones.get() + 1);
        Self { id: self.id, counters: Rc::clone(&self.counters) }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counters.drops.set(self.counters.drops.get() + 1);
    }
}
