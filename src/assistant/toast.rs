/// Toast notifications
///
/// Toasts are shown, fade, then go away. The dashboard schedules the fade and
/// removal; this queue only keeps track of what is on screen.

use crate::view::{Emphasis, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub fading: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            fading: false,
        });
        id
    }

    /// Start fading a toast out
    pub fn fade(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|toast| toast.id == id) {
            Some(toast) => {
                toast.fading = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn messages(&self) -> Vec<&str> {
        self.toasts.iter().map(|t| t.message.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Oldest toast first, fading ones muted
    pub fn render<A>(&self) -> View<A> {
        self.toasts.iter().fold(View::new(), |view, toast| {
            let emphasis = if toast.fading {
                Emphasis::Muted
            } else {
                Emphasis::Active
            };
            view.styled(toast.message.as_str(), emphasis)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut queue = ToastQueue::new();
        let first = queue.push("Item approved");
        let second = queue.push("Item rejected. Reprocessing...");
        assert_eq!(queue.messages(), vec!["Item approved", "Item rejected. Reprocessing..."]);

        assert!(queue.fade(first));
        assert!(queue.toasts()[0].fading);
        assert!(!queue.toasts()[1].fading);

        assert!(queue.remove(first));
        assert!(!queue.remove(first));
        assert!(!queue.fade(first));
        assert_eq!(queue.toasts()[0].id, second);
    }
}
