//! MQTT bus client: a thin wrapper over `rumqttc` exposing the
//! publish/subscribe shape the runtime's services need, with a
//! last-will of `offline` on the status topic.

use std::sync::mpsc::{self, Receiver};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use rumqttc::{Client, ConnAck, Event, LastWill, MqttOptions, Packet, QoS};

use harness_core::config::MqttConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub const BASE_TOPIC: &str = "/dforirdod/PKM/";

#[derive(Clone)]
pub struct Topics {
    base: String,
}

impl Default for Topics {
    fn default() -> Self {
        Self::new(BASE_TOPIC)
    }
}

impl Topics {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    pub fn start(&self) -> String {
        format!("{}start", self.base)
    }

    pub fn status(&self) -> String {
        format!("{}status", self.base)
    }

    pub fn battle_info(&self) -> String {
        format!("{}battle/info", self.base)
    }

    pub fn battle_move(&self) -> String {
        format!("{}battle/move", self.base)
    }
}

/// An incoming message delivered from the bus's own I/O thread.
pub struct IncomingMessage {
    pub topic: String,
    pub payload: Vec<u8>,
}

pub struct BusClient {
    client: Client,
    /// `rumqttc::Client` is `Sync`, but `mpsc::Receiver` is not; this
    /// client is shared across threads behind an `Arc`, so the receiver
    /// needs its own lock even though only one thread ever drains it.
    incoming: Mutex<Receiver<IncomingMessage>>,
}

impl BusClient {
    /// Connect to the broker described by `config`, registering a
    /// retained last-will of `offline` on `{base}/status`. Blocks up to
    /// [`CONNECT_TIMEOUT`] for the broker's connection acknowledgement,
    /// logging a warning (not an error) on timeout — the transport's
    /// own event loop keeps retrying regardless.
    pub fn connect(config: &MqttConfig, topics: &Topics) -> Self {
        let client_id = config
            .client_id
            .clone()
            .unwrap_or_else(|| format!("harness-{}", std::process::id()));

        let mut options = MqttOptions::new(client_id, config.broker.clone(), config.port);
        options.set_keep_alive(Duration::from_secs(30));
        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            options.set_credentials(user.clone(), pass.clone());
        }
        options.set_last_will(LastWill::new(topics.status(), "offline", QoS::AtLeastOnce, true));

        let (client, mut connection) = Client::new(options, 10);
        let (tx, rx) = mpsc::channel();
        let (connack_tx, connack_rx) = mpsc::channel();
        let mut connack_tx = Some(connack_tx);

        thread::spawn(move || {
            for notification in connection.iter() {
                match notification {
                    Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                        if let Some(tx) = connack_tx.take() {
                            let _ = tx.send(ack);
                        }
                    }
                    Ok(Event::Incoming(Packet::Publish(publish))) => {
                        let _ = tx.send(IncomingMessage {
                            topic: publish.topic,
                            payload: publish.payload.to_vec(),
                        });
                    }
                    Ok(_) => {}
                    Err(e) => {
                        log::warn!("mqtt transport error: {e}");
                    }
                }
            }
        });

        match connack_rx.recv_timeout(CONNECT_TIMEOUT) {
            Ok(ConnAck { code, .. }) => log::info!("mqtt connected: {code:?}"),
            Err(_) => log::warn!("mqtt connect acknowledgement not received within {CONNECT_TIMEOUT:?}"),
        }

        Self { client, incoming: Mutex::new(rx) }
    }

    pub fn publish(&self, topic: &str, payload: impl Into<Vec<u8>>, qos: QoS, retain: bool) {
        if let Err(e) = self.client.publish(topic, qos, retain, payload) {
            log::warn!("mqtt publish to {topic} failed: {e}");
        }
    }

    pub fn subscribe(&self, topic: &str) {
        if let Err(e) = self.client.subscribe(topic, QoS::AtLeastOnce) {
            log::warn!("mqtt subscribe to {topic} failed: {e}");
        }
    }

    /// Drain any messages that arrived on subscribed topics since the
    /// last call. Never blocks.
    pub fn poll_incoming(&self) -> Vec<IncomingMessage> {
        self.incoming.lock().unwrap().try_iter().collect()
    }

    pub fn disconnect(&self) {
        let _ = self.client.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_are_rooted_at_the_base_with_a_single_trailing_slash() {
        let topics = Topics::new("/dforirdod/PKM");
        assert_eq!(topics.start(), "/dforirdod/PKM/start");
        assert_eq!(topics.status(), "/dforirdod/PKM/status");
        assert_eq!(topics.battle_info(), "/dforirdod/PKM/battle/info");
        assert_eq!(topics.battle_move(), "/dforirdod/PKM/battle/move");
    }

    #[test]
    fn base_with_trailing_slash_is_not_doubled() {
        let topics = Topics::new("/dforirdod/PKM/");
        assert_eq!(topics.status(), "/dforirdod/PKM/status");
    }
}
