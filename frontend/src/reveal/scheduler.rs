use gloo_timers::callback::Timeout;

/// Deferred one-shot tasks.
///
/// Dropping the returned handle cancels the task. Dropping a handle whose
/// task already ran does nothing.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` on the browser event loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Virtual clock for tests. Nothing runs until the test advances time.
#[cfg(test)]
pub mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::Scheduler;

    struct Entry {
        id: u64,
        due: u64,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        entries: Vec<Entry>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                // Tasks run with the queue released, so this only fails if a
                // handle is dropped from inside `schedule` itself.
                if let Ok(mut queue) = queue.try_borrow_mut() {
                    queue.entries.retain(|e| e.id != self.id);
                }
            }
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().entries.len()
        }

        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            self.advance_to(target);
        }

        /// Runs every task due at or before `target`, earliest first and in
        /// scheduling order on ties. Tasks may schedule more tasks.
        pub fn advance_to(&self, target: u64) {
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let earliest = queue
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.due <= target)
                        .min_by_key(|(_, e)| (e.due, e.id))
                        .map(|(i, _)| i);
                    match earliest {
                        Some(i) => {
                            let entry = queue.entries.remove(i);
                            queue.now = entry.due;
                            Some(entry.task)
                        }
                        None => {
                            queue.now = queue.now.max(target);
                            None
                        }
                    }
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + u64::from(delay_ms);
            queue.entries.push(Entry { id, due, task });
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    mod tests {
        use std::cell::RefCell;
        use std::rc::Rc;

        use super::*;

        fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
            let log = Rc::new(RefCell::new(Vec::new()));
            let sink = log.clone();
            let make = move |name: &'static str| -> Box<dyn FnOnce()> {
                let sink = sink.clone();
                Box::new(move || sink.borrow_mut().push(name))
            };
            (log, make)
        }

        #[test]
        fn fires_in_due_order_with_ties_in_schedule_order() {
            let clock = ManualScheduler::new();
            let (log, task) = recorder();
            let _a = clock.schedule(300, task("a"));
            let _b = clock.schedule(100, task("b"));
            let _c = clock.schedule(300, task("c"));

            clock.advance(1000);
            assert_eq!(*log.borrow(), vec!["b", "a", "c"]);
            assert_eq!(clock.now(), 1000);
        }

        #[test]
        fn dropping_handle_cancels() {
            let clock = ManualScheduler::new();
            let (log, task) = recorder();
            let handle = clock.schedule(100, task("a"));
            drop(handle);
            assert_eq!(clock.pending(), 0);
            clock.advance(500);
            assert!(log.borrow().is_empty());
        }

        #[test]
        fn dropping_fired_handle_is_noop() {
            let clock = ManualScheduler::new();
            let (log, task) = recorder();
            let handle = clock.schedule(100, task("a"));
            let _other = clock.schedule(200, task("b"));
            clock.advance(150);
            drop(handle);
            assert_eq!(clock.pending(), 1);
            clock.advance(100);
            assert_eq!(*log.borrow(), vec!["a", "b"]);
        }
    }
}
