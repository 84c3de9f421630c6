use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use tracing::{Level, info, instrument};

// structs and types

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

// messages

// deliver a message from the contact form
//
// there is no backend to talk to, so this just waits out a fake round trip and
// reports success.  swapping in a real endpoint only needs this function body to
// change, since callers already handle the error path
#[instrument(level=Level::DEBUG, skip(msg), fields(email = %msg.email))]
pub async fn send_message(msg: &ContactMessage, latency_ms: u32) -> anyhow::Result<()> {
    TimeoutFuture::new(latency_ms).await;

    info!(
        name = %msg.name,
        length = msg.message.len(),
        "contact message accepted"
    );
    Ok(())
}
