//! Process-wide shutdown token.

use std::sync::Arc;

use tokio::sync::watch;

/// Fires the shutdown. Cloning shares the same token.
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    tx: Arc<watch::Sender<bool>>,
}

/// Observes the shutdown.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

pub fn shutdown_channel() -> (ShutdownTrigger, ShutdownSignal) {
    let (tx, rx) = watch::channel(false);
    (
        ShutdownTrigger { tx: Arc::new(tx) },
        ShutdownSignal { rx },
    )
}

impl ShutdownTrigger {
    /// Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }
}

impl ShutdownSignal {
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once shutdown has been triggered, or every trigger is gone.
    pub async fn wait(&mut self) {
        let _ = self.rx.wait_for(|stop| *stop).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn every_subscriber_sees_the_trigger() {
        let (trigger, mut first) = shutdown_channel();
        let mut second = trigger.subscribe();
        assert!(!first.is_triggered());

        let waiter = tokio::spawn(async move {
            second.wait().await;
            second.is_triggered()
        });

        trigger.trigger();
        trigger.trigger();
        first.wait().await;
        assert!(first.is_triggered());
        assert!(waiter.await.unwrap());
    }

    #[tokio::test]
    async fn late_subscribers_see_an_earlier_trigger() {
        let (trigger, _signal) = shutdown_channel();
        trigger.trigger();
        let mut late = trigger.subscribe();
        tokio::time::timeout(Duration::from_secs(1), late.wait())
            .await
            .unwrap();
    }
}
