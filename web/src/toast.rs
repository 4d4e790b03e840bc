use memgrid_core::RoundListener;
use yew::prelude::*;

pub(crate) const TOAST_DURATION_MS: u32 = 3000;

pub(crate) const WIN_MESSAGE: &str = "😄 Yaaay! you won";
pub(crate) const LOSE_MESSAGE: &str = "😔 you lost, try again";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: AttrValue,
}

/// Notifications currently on screen, newest last.
#[derive(Debug, Default)]
pub(crate) struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
    unscheduled: Vec<u32>,
}

impl ToastQueue {
    pub(crate) fn push(&mut self, kind: ToastKind, message: impl Into<AttrValue>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        self.unscheduled.push(id);
        id
    }

    pub(crate) fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Toasts still waiting for their auto-dismiss timer.
    pub(crate) fn take_unscheduled(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.unscheduled)
    }

    pub(crate) fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl RoundListener for ToastQueue {
    fn on_win(&mut self) {
        self.push(ToastKind::Success, WIN_MESSAGE);
    }

    fn on_lose(&mut self) {
        self.push(ToastKind::Error, LOSE_MESSAGE);
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ToastContainerProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastContainer)]
pub(crate) fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div class="toasts top-center">
            {
                for props.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let class = classes!(
                        "toast",
                        match toast.kind {
                            ToastKind::Success => "success",
                            ToastKind::Error => "error",
                        }
                    );
                    let onclick = props.on_dismiss.reform(move |_: MouseEvent| id);
                    html! {
                        <div key={id} {class} {onclick} role="status">{toast.message.clone()}</div>
                    }
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memgrid_core::ClickOutcome;

    #[test]
    fn terminal_outcomes_raise_one_toast_each() {
        let mut queue = ToastQueue::default();

        ClickOutcome::Correct(1).notify(&mut queue);
        assert!(queue.toasts().is_empty());

        ClickOutcome::Won(2).notify(&mut queue);
        ClickOutcome::Lost(4).notify(&mut queue);

        let kinds: Vec<_> = queue.toasts().iter().map(|toast| toast.kind).collect();
        assert_eq!(kinds, [ToastKind::Success, ToastKind::Error]);
        assert_eq!(queue.toasts()[0].message.as_str(), WIN_MESSAGE);
    }

    #[test]
    fn each_toast_is_scheduled_once() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "a");
        let second = queue.push(ToastKind::Error, "b");

        assert_eq!(queue.take_unscheduled(), [first, second]);
        assert!(queue.take_unscheduled().is_empty());
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "a");
        let second = queue.push(ToastKind::Error, "b");

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }
}
