use async_stream::stream;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};
use tokio_stream::Stream;

/// Yields `items` in order, item `i` no earlier than `i * delay` after the
/// stream is first polled.
///
/// The schedule is anchored to the start so a slow consumer does not push
/// later items further back.
pub fn reveal<T>(items: Vec<T>, delay: Duration) -> impl Stream<Item = T> {
    stream! {
        let start = Instant::now();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                sleep_until(start + delay * i as u32).await;
            }
            yield item;
        }
    }
}
