//! Banner carousel.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use storefront_commerce::catalog::Banner;
use storefront_data::CatalogClient;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::error::AppError;
use crate::lifecycle::Lifecycle;

/// Banner carousel state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliderState {
    /// Slides in display order.
    pub banners: Vec<Banner>,
    /// Index of the slide on screen.
    pub current: usize,
}

/// Banner carousel. Clones share state.
#[derive(Clone)]
pub struct SliderScreen {
    catalog: CatalogClient,
    lifecycle: Lifecycle,
    state: Arc<RwLock<SliderState>>,
}

impl SliderScreen {
    pub fn new(catalog: CatalogClient) -> Self {
        Self {
            catalog,
            lifecycle: Lifecycle::new(),
            state: Arc::new(RwLock::new(SliderState::default())),
        }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Mount and load the banners. A failed load leaves the slider empty.
    pub async fn mount(&self) {
        let token = self.lifecycle.mount();
        let banners = self.catalog.banners().await.unwrap_or_default();
        token.apply(|| {
            *self.state.write() = SliderState {
                banners,
                current: 0,
            };
        });
    }

    /// Unmount, stopping autoplay at its next tick.
    pub fn unmount(&self) {
        self.lifecycle.unmount();
    }

    pub fn state(&self) -> SliderState {
        self.state.read().clone()
    }

    /// The banner on screen, `None` while there are no banners.
    pub fn current(&self) -> Option<Banner> {
        let state = self.state.read();
        state.banners.get(state.current).cloned()
    }

    /// Advance one slide, wrapping to the first.
    pub fn next(&self) {
        let mut state = self.state.write();
        if !state.banners.is_empty() {
            state.current = (state.current + 1) % state.banners.len();
        }
    }

    /// Go back one slide, wrapping to the last.
    pub fn prev(&self) {
        let mut state = self.state.write();
        let len = state.banners.len();
        if len > 0 {
            state.current = (state.current + len - 1) % len;
        }
    }

    /// Jump to a slide. Out-of-range indexes are ignored.
    pub fn go_to(&self, index: usize) {
        let mut state = self.state.write();
        if index < state.banners.len() {
            state.current = index;
        }
    }

    /// Advance every `period` until the slider is unmounted.
    pub fn autoplay(&self, period: Duration) -> Result<JoinHandle<()>, AppError> {
        if period.is_zero() {
            return Err(AppError::ZeroPeriod);
        }
        let token = self.lifecycle.token().ok_or(AppError::NotMounted)?;
        let slider = self.clone();

        Ok(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if token.apply(|| slider.next()).is_none() {
                    break;
                }
            }
            tracing::debug!("slider autoplay stopped");
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_data::mock::StaticTransport;
    use storefront_data::{FetchClient, Method};

    fn slider(count: usize) -> SliderScreen {
        let banners: Vec<_> = (0..count)
            .map(|i| json!({"id": i, "image": format!("b{i}.jpg")}))
            .collect();
        let transport = Arc::new(StaticTransport::new().respond_json(
            Method::Get,
            "/admin/banner",
            json!(banners),
        ));
        SliderScreen::new(CatalogClient::new(
            FetchClient::new(transport).with_base_url("http://api"),
        ))
    }

    #[tokio::test]
    async fn test_next_and_prev_wrap() {
        let slider = slider(3);
        slider.mount().await;

        slider.prev();
        assert_eq!(slider.state().current, 2);
        slider.next();
        assert_eq!(slider.state().current, 0);
        slider.next();
        assert_eq!(slider.current().unwrap().image, "b1.jpg");
    }

    #[tokio::test]
    async fn test_empty_slider_is_noop() {
        let slider = slider(0);
        slider.mount().await;

        slider.next();
        slider.prev();
        slider.go_to(4);
        assert_eq!(slider.state().current, 0);
        assert!(slider.current().is_none());
    }

    #[tokio::test]
    async fn test_go_to() {
        let slider = slider(3);
        slider.mount().await;

        slider.go_to(2);
        assert_eq!(slider.state().current, 2);
        slider.go_to(3);
        assert_eq!(slider.state().current, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_until_unmount() {
        let slider = slider(3);
        slider.mount().await;

        let handle = slider.autoplay(Duration::from_secs(3)).unwrap();
        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert_eq!(slider.state().current, 1);
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(slider.state().current, 2);

        slider.unmount();
        handle.await.unwrap();
        assert_eq!(slider.state().current, 2);
    }

    #[test]
    fn test_autoplay_requires_mount() {
        assert!(matches!(
            slider(1).autoplay(Duration::from_secs(1)),
            Err(AppError::NotMounted)
        ));
    }

    #[tokio::test]
    async fn test_autoplay_rejects_zero_period() {
        let slider = slider(2);
        slider.mount().await;

        assert!(matches!(
            slider.autoplay(Duration::ZERO),
            Err(AppError::ZeroPeriod)
        ));
        assert_eq!(slider.state().current, 0);
    }
}
