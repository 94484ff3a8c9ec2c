//! Top-level wiring: owns the emulator, the button queue, the bus, and
//! the two threads (emulator tick loop, services loop) described in
//! the harness's concurrency design.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use harness_core::config::Config;
use harness_core::emulator::Emulator;

use crate::bus::{BusClient, Topics};
use crate::button_queue::ButtonQueue;
use crate::emulator_loop::EmulatorLoop;
use crate::services::battle_command_listener;
use crate::services::{AutosaveService, SceneManagerService};
use crate::snapshot_store::SnapshotStore;

const BUTTON_COOLDOWN: Duration = Duration::from_secs(1);
const SCENE_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Serialises every access to the emulator: ROM bank switches and
/// save-state I/O must never interleave with a concurrent read from
/// the other thread.
pub struct EmulatorHandle<E> {
    inner: Mutex<E>,
}

impl<E: Emulator> EmulatorHandle<E> {
    pub fn new(emu: E) -> Self {
        Self { inner: Mutex::new(emu) }
    }

    pub fn with_lock<R>(&self, f: impl FnOnce(&mut E) -> R) -> R {
        let mut guard = self.inner.lock().unwrap();
        f(&mut guard)
    }
}

pub struct Runtime<E: Emulator + Send + 'static> {
    emu: Arc<EmulatorHandle<E>>,
    config: Config,
    queue: Arc<ButtonQueue>,
    bus: Arc<BusClient>,
    topics: Topics,
    scene_manager: Arc<SceneManagerService>,
    autosave: Arc<AutosaveService>,
    emulator_loop: EmulatorLoop,
    shutdown: Arc<AtomicBool>,
}

impl<E: Emulator + Send + 'static> Runtime<E> {
    pub fn new(config: Config, emu: E) -> Self {
        let topics = Topics::default();
        let bus = Arc::new(BusClient::connect(&config.mqtt, &topics));
        let snapshot_store = SnapshotStore::new(config.save_state_path.clone());
        let autosave = Arc::new(AutosaveService::new(snapshot_store, config.autosave_interval));
        let scene_manager = Arc::new(SceneManagerService::new(config.variant, SCENE_POLL_INTERVAL));

        Self {
            emu: Arc::new(EmulatorHandle::new(emu)),
            config,
            queue: Arc::new(ButtonQueue::default()),
            bus,
            topics,
            scene_manager,
            autosave,
            emulator_loop: EmulatorLoop::new(BUTTON_COOLDOWN),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Run until the emulator stops or a shutdown signal (SIGINT) is
    /// received. Blocks the calling thread for the lifetime of the run.
    pub fn run(self) {
        let shutdown = Arc::clone(&self.shutdown);
        if let Err(e) = ctrlc::set_handler(move || shutdown.store(true, Ordering::SeqCst)) {
            log::warn!("failed to install signal handler: {e}");
        }

        if self.config.autoload_state {
            self.emu.with_lock(|emu| self.autosave.start(emu));
        }
        self.scene_manager.start(&self.bus, &self.topics);
        self.bus.subscribe(&self.topics.battle_move());

        let services_handle = self.spawn_services_thread();

        log::info!("starting emulator loop");
        loop {
            if self.shutdown.load(Ordering::SeqCst) {
                log::info!("shutdown signal received");
                break;
            }
            let now = Instant::now();
            let running = self.emu.with_lock(|emu| self.emulator_loop.step(emu, &self.queue, now));
            if !running {
                log::info!("emulator stopped running");
                break;
            }
        }

        self.shutdown.store(true, Ordering::SeqCst);
        let _ = services_handle.join();
        self.bus.disconnect();
        log::info!("emulator loop finished");
    }

    fn spawn_services_thread(&self) -> thread::JoinHandle<()> {
        let emu = Arc::clone(&self.emu);
        let bus = Arc::clone(&self.bus);
        let topics = self.topics.clone();
        let queue = Arc::clone(&self.queue);
        let scene_manager = Arc::clone(&self.scene_manager);
        let autosave = Arc::clone(&self.autosave);
        let autosave_enabled = self.config.autosave_enabled;
        let shutdown = Arc::clone(&self.shutdown);

        thread::spawn(move || {
            log::info!("starting services loop");
            while !shutdown.load(Ordering::SeqCst) {
                let now = Instant::now();

                for message in bus.poll_incoming() {
                    if message.topic != topics.battle_move() {
                        continue;
                    }
                    if let Some(cmd) = battle_command_listener::parse_command(&message.payload, format!("{now:?}")) {
                        battle_command_listener::dispatch(scene_manager.current_scene(), cmd);
                    }
                }

                emu.with_lock(|e| {
                    scene_manager.tick(e, &bus, &topics, &queue, now);
                    if autosave_enabled {
                        autosave.tick(e, now);
                    }
                });

                // Short sleep to avoid busy-waiting; each service gates
                // its own work against its own due time.
                thread::sleep(Duration::from_millis(1));
            }
            log::info!("services loop stopped");
        })
    }
}
