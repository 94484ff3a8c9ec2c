//! FIFO button queue connecting the services thread to the emulator
//! thread. Services never press buttons directly; this is the sole
//! channel.

use std::collections::VecDeque;
use std::sync::Mutex;

use harness_core::emulator::Button;

pub struct ButtonQueue {
    inner: Mutex<VecDeque<Button>>,
}

impl Default for ButtonQueue {
    fn default() -> Self {
        Self { inner: Mutex::new(VecDeque::new()) }
    }
}

impl ButtonQueue {
    pub fn append(&self, button: Button) {
        self.inner.lock().unwrap().push_back(button);
    }

    pub fn pop_or_none(&self) -> Option<Button> {
        self.inner.lock().unwrap().pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order_is_preserved() {
        let queue = ButtonQueue::default();
        queue.append(Button::A);
        queue.append(Button::B);
        assert_eq!(queue.pop_or_none(), Some(Button::A));
        assert_eq!(queue.pop_or_none(), Some(Button::B));
        assert_eq!(queue.pop_or_none(), None);
    }

    #[test]
    fn clear_empties_the_queue() {
        let queue = ButtonQueue::default();
        queue.append(Button::Start);
        queue.clear();
        assert!(queue.is_empty());
    }
}
