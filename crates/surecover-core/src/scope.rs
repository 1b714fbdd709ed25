//! Ambient access to a notification center from async code.
//!
//! UI components reach the center through the component tree's context.
//! Code running outside the tree (service callbacks, background tasks) can
//! instead run inside [`NotificationCenter::scope`] and fetch the center with
//! [`NotificationCenter::current`].

use std::future::Future;

use crate::center::NotificationCenter;
use crate::error::{NotifyError, NotifyResult};

tokio::task_local! {
    static CURRENT: NotificationCenter;
}

impl NotificationCenter {
    /// Run `fut` with this center installed as the ambient center.
    pub async fn scope<F>(&self, fut: F) -> F::Output
    where
        F: Future,
    {
        CURRENT.scope(self.clone(), fut).await
    }

    /// Run `f` synchronously with this center installed as the ambient center.
    pub fn sync_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        CURRENT.sync_scope(self.clone(), f)
    }

    /// The ambient center.
    ///
    /// Fails with [`NotifyError::OutsideScope`] when no enclosing
    /// [`scope`](Self::scope) is active. Spawned tasks do not inherit the
    /// scope.
    pub fn current() -> NotifyResult<NotificationCenter> {
        CURRENT
            .try_with(Clone::clone)
            .map_err(|_| NotifyError::OutsideScope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotificationKind;

    #[tokio::test]
    async fn current_outside_scope_fails() {
        assert_eq!(NotificationCenter::current(), Err(NotifyError::OutsideScope));
    }

    #[tokio::test]
    async fn current_inside_scope_is_the_same_center() {
        let center = NotificationCenter::new().unwrap();

        let id = center
            .scope(async {
                let ambient = NotificationCenter::current().unwrap();
                ambient.notify(NotificationKind::Info, "from scope", None, None)
            })
            .await;

        assert!(center.contains(id));
        assert_eq!(NotificationCenter::current(), Err(NotifyError::OutsideScope));
    }

    #[tokio::test]
    async fn spawned_tasks_do_not_inherit_scope() {
        let center = NotificationCenter::new().unwrap();

        let inner = center
            .scope(async { tokio::spawn(async { NotificationCenter::current() }).await })
            .await
            .unwrap();

        assert_eq!(inner, Err(NotifyError::OutsideScope));
    }

    #[tokio::test]
    async fn sync_scope_exposes_center() {
        let center = NotificationCenter::new().unwrap();
        let found = center.sync_scope(|| NotificationCenter::current().unwrap());
        assert!(found.same_center(&center));
    }
}
